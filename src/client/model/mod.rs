pub mod options;

pub use options::{
    DocumentReadOptions,
    EdgeCreateOptions,
    EdgeReplaceOptions,
    EdgeUpdateOptions,
    EdgeDeleteOptions,
    VertexCreateOptions,
    VertexReplaceOptions,
    VertexUpdateOptions,
    VertexDeleteOptions,
    GraphCreateOptions,
};
