// Document operations shared by the edge and vertex collection handles.
// Both speak the same protocol under /{graph}/{edge|vertex}/{collection}.

use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::common::document::DocumentKey;
use crate::common::error::Result;
use crate::common::utils::validate_collection_name;
use crate::client::entity::{DocumentEntity, DocumentUpdateEntity};
use crate::client::entity::document::{ReadEnvelope, WriteEnvelope};
use crate::client::model::{
    DocumentReadOptions, EdgeCreateOptions, EdgeDeleteOptions, EdgeReplaceOptions, EdgeUpdateOptions,
};
use crate::client::network::{HttpMethod, Request};
use super::ArangoGraph;

/// Statuses turned into `Ok(None)` by a catching read
const CAUGHT_READ_STATUSES: [u16; 3] = [304, 404, 412];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CollectionKind {
    Edge,
    Vertex,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Edge => "edge",
            CollectionKind::Vertex => "vertex",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct GraphCollection {
    pub graph: ArangoGraph,
    pub name: String,
    pub kind: CollectionKind,
}

impl GraphCollection {
    pub fn new(graph: ArangoGraph, name: String, kind: CollectionKind) -> Self {
        GraphCollection { graph, name, kind }
    }

    /// Path of the collection itself
    pub fn collection_path(&self) -> Result<String> {
        validate_collection_name(&self.name)?;
        self.graph.path(&[self.kind.as_str(), &self.name])
    }

    /// Path of one document in the collection
    pub fn document_path(&self, key: &str) -> Result<String> {
        validate_collection_name(&self.name)?;
        let key = DocumentKey::new(key)?;
        self.graph.path(&[self.kind.as_str(), &self.name, key.as_str()])
    }

    fn request(&self, method: HttpMethod, path: String) -> Request {
        self.graph.db().request(method, path)
    }

    pub async fn insert<T>(&self, value: &T, options: &EdgeCreateOptions) -> Result<DocumentEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        let request = options
            .apply(self.request(HttpMethod::POST, self.collection_path()?))
            .with_json_body(value)?;

        tracing::debug!("Inserting {} into '{}' of graph '{}'", self.kind.as_str(), self.name, self.graph.name());
        let envelope: WriteEnvelope = self.graph.db().execute(request).await?.json()?;
        Ok(envelope.into_entity())
    }

    pub async fn get<T>(&self, key: &str, options: &DocumentReadOptions) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let request = options.apply(self.request(HttpMethod::GET, self.document_path(key)?));
        let response = self.graph.db().execute_raw(request).await?;

        if options.catch_exception && CAUGHT_READ_STATUSES.contains(&response.status_code) {
            tracing::debug!(
                "{} '{}/{}' not returned (status {})",
                self.kind.as_str(), self.name, key, response.status_code
            );
            return Ok(None);
        }

        let response = response.error_for_status()?;
        let envelope: ReadEnvelope<T> = response.json()?;
        Ok(Some(envelope.edge))
    }

    pub async fn replace<T>(&self, key: &str, value: &T, options: &EdgeReplaceOptions) -> Result<DocumentUpdateEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        let request = options
            .apply(self.request(HttpMethod::PUT, self.document_path(key)?))
            .with_json_body(value)?;

        let envelope: WriteEnvelope = self.graph.db().execute(request).await?.json()?;
        Ok(envelope.into_update_entity())
    }

    pub async fn update<T>(&self, key: &str, value: &T, options: &EdgeUpdateOptions) -> Result<DocumentUpdateEntity>
    where
        T: Serialize + Sync + ?Sized,
    {
        let request = options
            .apply(self.request(HttpMethod::PATCH, self.document_path(key)?))
            .with_json_body(value)?;

        let envelope: WriteEnvelope = self.graph.db().execute(request).await?.json()?;
        Ok(envelope.into_update_entity())
    }

    pub async fn delete(&self, key: &str, options: &EdgeDeleteOptions) -> Result<()> {
        let request = options.apply(self.request(HttpMethod::DELETE, self.document_path(key)?));

        tracing::debug!("Removing {} '{}/{}' from graph '{}'", self.kind.as_str(), self.name, key, self.graph.name());
        self.graph.db().execute(request).await?;
        Ok(())
    }
}
