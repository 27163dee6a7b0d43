pub mod graph;
pub mod document;

pub use graph::{EdgeDefinition, GraphEntity, ReplicationFactor};

pub use document::{
    DocumentEntity,
    DocumentUpdateEntity,
    EdgeEntity,
    EdgeUpdateEntity,
    VertexEntity,
    VertexUpdateEntity,
};
