pub mod graph;
pub mod edge_collection;
pub mod vertex_collection;
mod collection;

pub use graph::ArangoGraph;
pub use edge_collection::ArangoEdgeCollection;
pub use vertex_collection::ArangoVertexCollection;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::common::error::Result;
use crate::client::entity::{
    EdgeDefinition, GraphEntity, EdgeEntity, EdgeUpdateEntity, VertexEntity, VertexUpdateEntity,
};
use crate::client::model::{
    DocumentReadOptions, EdgeCreateOptions, EdgeDeleteOptions, EdgeReplaceOptions,
    EdgeUpdateOptions, GraphCreateOptions, VertexCreateOptions, VertexDeleteOptions,
    VertexReplaceOptions, VertexUpdateOptions,
};

/// Root path of the graph module API
pub const GHARIAL_API_PATH: &str = "/_api/gharial";

/// Operations on a named graph
#[async_trait]
pub trait GraphOperations: Send + Sync {
    /// Whether the graph exists on the server
    async fn exists(&self) -> Result<bool>;

    /// Create the graph from its edge definitions
    async fn create(&self, edge_definitions: Vec<EdgeDefinition>) -> Result<GraphEntity> {
        self.create_with_options(edge_definitions, GraphCreateOptions::default()).await
    }

    async fn create_with_options(
        &self,
        edge_definitions: Vec<EdgeDefinition>,
        options: GraphCreateOptions,
    ) -> Result<GraphEntity>;

    /// Drop the graph, keeping its collections
    async fn drop(&self) -> Result<()> {
        self.drop_with_collections(false).await
    }

    /// Drop the graph; with `drop_collections` its collections go too,
    /// unless another graph still uses them
    async fn drop_with_collections(&self, drop_collections: bool) -> Result<()>;

    /// Fetch the graph definition
    async fn get_info(&self) -> Result<GraphEntity>;

    /// Names of all vertex collections used in the graph, in server order
    async fn get_vertex_collections(&self) -> Result<Vec<String>>;

    /// Add a vertex collection, creating it on the server if needed
    async fn add_vertex_collection(&self, name: &str) -> Result<GraphEntity>;

    /// Names of all edge collections used in the graph, in server order
    async fn get_edge_definitions(&self) -> Result<Vec<String>>;

    async fn add_edge_definition(&self, definition: &EdgeDefinition) -> Result<GraphEntity>;

    /// Replace the definition for `definition.collection`; this affects
    /// every graph in the database that uses the same edge collection
    async fn replace_edge_definition(&self, definition: &EdgeDefinition) -> Result<GraphEntity>;

    /// Remove an edge definition; its vertex collections stay in place
    async fn remove_edge_definition(&self, definition_name: &str) -> Result<GraphEntity>;
}

/// Operations on one edge collection of a named graph
#[async_trait]
pub trait EdgeCollectionOperations: Send + Sync {
    async fn insert_edge<T>(&self, value: &T) -> Result<EdgeEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.insert_edge_with_options(value, EdgeCreateOptions::default()).await
    }

    async fn insert_edge_with_options<T>(
        &self,
        value: &T,
        options: EdgeCreateOptions,
    ) -> Result<EdgeEntity>
    where
        T: Serialize + Sync + ?Sized;

    /// Fetch an edge; `None` when it does not exist
    async fn get_edge<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.get_edge_with_options(key, DocumentReadOptions::default()).await
    }

    async fn get_edge_with_options<T>(
        &self,
        key: &str,
        options: DocumentReadOptions,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send;

    /// Replace the whole edge body
    async fn replace_edge<T>(&self, key: &str, value: &T) -> Result<EdgeUpdateEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.replace_edge_with_options(key, value, EdgeReplaceOptions::default()).await
    }

    async fn replace_edge_with_options<T>(
        &self,
        key: &str,
        value: &T,
        options: EdgeReplaceOptions,
    ) -> Result<EdgeUpdateEntity>
    where
        T: Serialize + Sync + ?Sized;

    /// Merge the patch document into the stored edge
    async fn update_edge<T>(&self, key: &str, value: &T) -> Result<EdgeUpdateEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.update_edge_with_options(key, value, EdgeUpdateOptions::default()).await
    }

    async fn update_edge_with_options<T>(
        &self,
        key: &str,
        value: &T,
        options: EdgeUpdateOptions,
    ) -> Result<EdgeUpdateEntity>
    where
        T: Serialize + Sync + ?Sized;

    async fn delete_edge(&self, key: &str) -> Result<()> {
        self.delete_edge_with_options(key, EdgeDeleteOptions::default()).await
    }

    async fn delete_edge_with_options(&self, key: &str, options: EdgeDeleteOptions) -> Result<()>;
}

/// Operations on one vertex collection of a named graph
#[async_trait]
pub trait VertexCollectionOperations: Send + Sync {
    /// Remove this vertex collection from the graph
    async fn drop(&self) -> Result<()>;

    async fn insert_vertex<T>(&self, value: &T) -> Result<VertexEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.insert_vertex_with_options(value, VertexCreateOptions::default()).await
    }

    async fn insert_vertex_with_options<T>(
        &self,
        value: &T,
        options: VertexCreateOptions,
    ) -> Result<VertexEntity>
    where
        T: Serialize + Sync + ?Sized;

    async fn get_vertex<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.get_vertex_with_options(key, DocumentReadOptions::default()).await
    }

    async fn get_vertex_with_options<T>(
        &self,
        key: &str,
        options: DocumentReadOptions,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send;

    async fn replace_vertex<T>(&self, key: &str, value: &T) -> Result<VertexUpdateEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.replace_vertex_with_options(key, value, VertexReplaceOptions::default()).await
    }

    async fn replace_vertex_with_options<T>(
        &self,
        key: &str,
        value: &T,
        options: VertexReplaceOptions,
    ) -> Result<VertexUpdateEntity>
    where
        T: Serialize + Sync + ?Sized;

    async fn update_vertex<T>(&self, key: &str, value: &T) -> Result<VertexUpdateEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.update_vertex_with_options(key, value, VertexUpdateOptions::default()).await
    }

    async fn update_vertex_with_options<T>(
        &self,
        key: &str,
        value: &T,
        options: VertexUpdateOptions,
    ) -> Result<VertexUpdateEntity>
    where
        T: Serialize + Sync + ?Sized;

    async fn delete_vertex(&self, key: &str) -> Result<()> {
        self.delete_vertex_with_options(key, VertexDeleteOptions::default()).await
    }

    async fn delete_vertex_with_options(&self, key: &str, options: VertexDeleteOptions) -> Result<()>;
}
