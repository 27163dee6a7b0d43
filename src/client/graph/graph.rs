// Graph handle - HTTP-backed implementation of GraphOperations
// Covers the management part of the gharial API

use async_trait::async_trait;
use serde_json::json;
use crate::common::error::Result;
use crate::common::utils::{join_segments, validate_collection_name, validate_graph_name};
use crate::client::database::ArangoDatabase;
use crate::client::entity::{EdgeDefinition, GraphEntity};
use crate::client::entity::graph::{CollectionsEnvelope, GraphEnvelope, RemovedEnvelope};
use crate::client::model::GraphCreateOptions;
use crate::client::network::HttpMethod;
use super::{ArangoEdgeCollection, ArangoVertexCollection, GraphOperations, GHARIAL_API_PATH};

/// Handle to a named graph
#[derive(Debug, Clone)]
pub struct ArangoGraph {
    db: ArangoDatabase,
    name: String,
}

impl ArangoGraph {
    pub(crate) fn new(db: ArangoDatabase, name: String) -> Self {
        ArangoGraph { db, name }
    }

    /// Database the graph lives in
    pub fn db(&self) -> &ArangoDatabase {
        &self.db
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_collection(&self, name: impl Into<String>) -> ArangoVertexCollection {
        ArangoVertexCollection::new(self.clone(), name.into())
    }

    pub fn edge_collection(&self, name: impl Into<String>) -> ArangoEdgeCollection {
        ArangoEdgeCollection::new(self.clone(), name.into())
    }

    /// `/_api/gharial/{graph}` followed by the given segments, all encoded
    pub(crate) fn path(&self, segments: &[&str]) -> Result<String> {
        validate_graph_name(&self.name)?;
        let mut all = Vec::with_capacity(segments.len() + 1);
        all.push(self.name.as_str());
        all.extend_from_slice(segments);
        Ok(format!("{}{}", GHARIAL_API_PATH, join_segments(&all)))
    }

    async fn fetch_graph(&self, method: HttpMethod, path: String, body: Option<serde_json::Value>) -> Result<GraphEntity> {
        let mut request = self.db.request(method, path);
        if let Some(body) = body {
            request = request.with_json_body(&body)?;
        }
        let envelope: GraphEnvelope = self.db.execute(request).await?.json()?;
        Ok(envelope.graph)
    }

    async fn fetch_collections(&self, path: String) -> Result<Vec<String>> {
        let request = self.db.request(HttpMethod::GET, path);
        let envelope: CollectionsEnvelope = self.db.execute(request).await?.json()?;
        Ok(envelope.collections)
    }
}

#[async_trait]
impl GraphOperations for ArangoGraph {
    async fn exists(&self) -> Result<bool> {
        match self.get_info().await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn create_with_options(
        &self,
        edge_definitions: Vec<EdgeDefinition>,
        options: GraphCreateOptions,
    ) -> Result<GraphEntity> {
        for definition in &edge_definitions {
            validate_definition(definition)?;
        }
        self.db.create_graph(&self.name, edge_definitions, options).await
    }

    async fn drop_with_collections(&self, drop_collections: bool) -> Result<()> {
        tracing::debug!("Dropping graph '{}' (drop collections: {})", self.name, drop_collections);

        let request = self.db
            .request(HttpMethod::DELETE, self.path(&[])?)
            .with_bool_param("dropCollections", drop_collections.then_some(true));
        let response = self.db.execute(request).await?;

        // Older servers answer with an empty body
        if !response.body.is_empty() {
            let _: RemovedEnvelope = response.json()?;
        }
        Ok(())
    }

    async fn get_info(&self) -> Result<GraphEntity> {
        self.fetch_graph(HttpMethod::GET, self.path(&[])?, None).await
    }

    async fn get_vertex_collections(&self) -> Result<Vec<String>> {
        self.fetch_collections(self.path(&["vertex"])?).await
    }

    async fn add_vertex_collection(&self, name: &str) -> Result<GraphEntity> {
        validate_collection_name(name)?;
        tracing::debug!("Adding vertex collection '{}' to graph '{}'", name, self.name);

        self.fetch_graph(
            HttpMethod::POST,
            self.path(&["vertex"])?,
            Some(json!({ "collection": name })),
        ).await
    }

    async fn get_edge_definitions(&self) -> Result<Vec<String>> {
        self.fetch_collections(self.path(&["edge"])?).await
    }

    async fn add_edge_definition(&self, definition: &EdgeDefinition) -> Result<GraphEntity> {
        validate_definition(definition)?;
        tracing::debug!("Adding edge definition '{}' to graph '{}'", definition.collection, self.name);

        self.fetch_graph(
            HttpMethod::POST,
            self.path(&["edge"])?,
            Some(serde_json::to_value(definition)?),
        ).await
    }

    async fn replace_edge_definition(&self, definition: &EdgeDefinition) -> Result<GraphEntity> {
        validate_definition(definition)?;
        tracing::debug!("Replacing edge definition '{}' in graph '{}'", definition.collection, self.name);

        self.fetch_graph(
            HttpMethod::PUT,
            self.path(&["edge", &definition.collection])?,
            Some(serde_json::to_value(definition)?),
        ).await
    }

    async fn remove_edge_definition(&self, definition_name: &str) -> Result<GraphEntity> {
        validate_collection_name(definition_name)?;
        tracing::debug!("Removing edge definition '{}' from graph '{}'", definition_name, self.name);

        self.fetch_graph(HttpMethod::DELETE, self.path(&["edge", definition_name])?, None).await
    }
}

fn validate_definition(definition: &EdgeDefinition) -> Result<()> {
    validate_collection_name(&definition.collection)?;
    for name in definition.from.iter().chain(definition.to.iter()) {
        validate_collection_name(name)?;
    }
    Ok(())
}
