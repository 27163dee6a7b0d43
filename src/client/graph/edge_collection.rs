use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::common::error::Result;
use crate::client::entity::{EdgeEntity, EdgeUpdateEntity};
use crate::client::model::{
    DocumentReadOptions, EdgeCreateOptions, EdgeDeleteOptions, EdgeReplaceOptions, EdgeUpdateOptions,
};
use super::collection::{CollectionKind, GraphCollection};
use super::{ArangoGraph, EdgeCollectionOperations};

/// Handle to an edge collection inside a named graph
#[derive(Debug, Clone)]
pub struct ArangoEdgeCollection {
    inner: GraphCollection,
}

impl ArangoEdgeCollection {
    pub(crate) fn new(graph: ArangoGraph, name: String) -> Self {
        ArangoEdgeCollection {
            inner: GraphCollection::new(graph, name, CollectionKind::Edge),
        }
    }

    /// The graph this edge collection belongs to
    pub fn graph(&self) -> &ArangoGraph {
        &self.inner.graph
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }
}

#[async_trait]
impl EdgeCollectionOperations for ArangoEdgeCollection {
    async fn insert_edge_with_options<T>(&self, value: &T, options: EdgeCreateOptions) -> Result<EdgeEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.inner.insert(value, &options).await
    }

    async fn get_edge_with_options<T>(&self, key: &str, options: DocumentReadOptions) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.inner.get(key, &options).await
    }

    async fn replace_edge_with_options<T>(
        &self,
        key: &str,
        value: &T,
        options: EdgeReplaceOptions,
    ) -> Result<EdgeUpdateEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.inner.replace(key, value, &options).await
    }

    async fn update_edge_with_options<T>(
        &self,
        key: &str,
        value: &T,
        options: EdgeUpdateOptions,
    ) -> Result<EdgeUpdateEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.inner.update(key, value, &options).await
    }

    async fn delete_edge_with_options(&self, key: &str, options: EdgeDeleteOptions) -> Result<()> {
        self.inner.delete(key, &options).await
    }
}
