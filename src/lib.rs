// Mini ArangoDB Client
// Async client for the ArangoDB graph module (gharial) HTTP API

// Common modules
pub mod common {
    pub mod error;
    pub mod document;
    pub mod utils;
}

// Client modules
pub mod client {
    pub mod config;
    pub mod network;
    pub mod entity;
    pub mod model;
    pub mod database;
    pub mod graph;
    pub mod arango;
}

// Re-export commonly used types for convenience
pub use common::error::{ArangoError, ErrorCode, Result};
pub use common::document::{DocumentId, DocumentKey, DocumentMeta, DocumentRevision};

pub use client::arango::ArangoClient;
pub use client::config::ClientConfig;
pub use client::database::ArangoDatabase;
pub use client::entity::{
    EdgeDefinition, EdgeEntity, EdgeUpdateEntity, GraphEntity, ReplicationFactor, VertexEntity,
    VertexUpdateEntity,
};
pub use client::graph::{
    ArangoEdgeCollection, ArangoGraph, ArangoVertexCollection, EdgeCollectionOperations,
    GraphOperations, VertexCollectionOperations,
};
pub use client::model::{
    DocumentReadOptions, EdgeCreateOptions, EdgeDeleteOptions, EdgeReplaceOptions,
    EdgeUpdateOptions, GraphCreateOptions, VertexCreateOptions, VertexDeleteOptions,
    VertexReplaceOptions, VertexUpdateOptions,
};
pub use client::network::{Connection, ConnectionStats, HttpConnection};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library initialization
pub fn init() -> Result<()> {
    // Default log level for the subscriber installed by the binary
    if std::env::var("RUST_LOG").is_err() {
        // SAFETY: called once at startup, before any threads are spawned
        unsafe { std::env::set_var("RUST_LOG", "info") };
    }

    Ok(())
}
