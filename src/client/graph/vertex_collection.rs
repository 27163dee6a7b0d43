use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::common::error::Result;
use crate::client::entity::{VertexEntity, VertexUpdateEntity};
use crate::client::model::{
    DocumentReadOptions, VertexCreateOptions, VertexDeleteOptions, VertexReplaceOptions,
    VertexUpdateOptions,
};
use crate::client::network::HttpMethod;
use super::collection::{CollectionKind, GraphCollection};
use super::{ArangoGraph, VertexCollectionOperations};

/// Handle to a vertex collection inside a named graph
#[derive(Debug, Clone)]
pub struct ArangoVertexCollection {
    inner: GraphCollection,
}

impl ArangoVertexCollection {
    pub(crate) fn new(graph: ArangoGraph, name: String) -> Self {
        ArangoVertexCollection {
            inner: GraphCollection::new(graph, name, CollectionKind::Vertex),
        }
    }

    pub fn graph(&self) -> &ArangoGraph {
        &self.inner.graph
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }
}

#[async_trait]
impl VertexCollectionOperations for ArangoVertexCollection {
    async fn drop(&self) -> Result<()> {
        let db = self.inner.graph.db();
        let request = db.request(HttpMethod::DELETE, self.inner.collection_path()?);

        tracing::debug!("Removing vertex collection '{}' from graph '{}'", self.inner.name, self.inner.graph.name());
        db.execute(request).await?;
        Ok(())
    }

    async fn insert_vertex_with_options<T>(&self, value: &T, options: VertexCreateOptions) -> Result<VertexEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.inner.insert(value, &options).await
    }

    async fn get_vertex_with_options<T>(&self, key: &str, options: DocumentReadOptions) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.inner.get(key, &options).await
    }

    async fn replace_vertex_with_options<T>(
        &self,
        key: &str,
        value: &T,
        options: VertexReplaceOptions,
    ) -> Result<VertexUpdateEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.inner.replace(key, value, &options).await
    }

    async fn update_vertex_with_options<T>(
        &self,
        key: &str,
        value: &T,
        options: VertexUpdateOptions,
    ) -> Result<VertexUpdateEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.inner.update(key, value, &options).await
    }

    async fn delete_vertex_with_options(&self, key: &str, options: VertexDeleteOptions) -> Result<()> {
        self.inner.delete(key, &options).await
    }
}
