use std::sync::Arc;
use crate::common::error::Result;
use crate::common::utils::{validate_database_name, validate_graph_name};
use crate::client::entity::{EdgeDefinition, GraphEntity};
use crate::client::entity::graph::{GraphEnvelope, GraphsEnvelope};
use crate::client::graph::{ArangoGraph, GHARIAL_API_PATH};
use crate::client::model::GraphCreateOptions;
use crate::client::network::{Connection, ConnectionStats, HttpMethod, Request, Response};

/// Handle to one database on the server
#[derive(Clone)]
pub struct ArangoDatabase {
    name: String,
    connection: Arc<dyn Connection>,
}

impl ArangoDatabase {
    pub fn new(connection: Arc<dyn Connection>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_database_name(&name)?;
        Ok(ArangoDatabase { name, connection })
    }

    /// Get database name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> ConnectionStats {
        self.connection.stats()
    }

    /// Handle to a named graph; nothing is sent until an operation runs
    pub fn graph(&self, name: impl Into<String>) -> ArangoGraph {
        ArangoGraph::new(self.clone(), name.into())
    }

    /// List all graphs of this database
    pub async fn get_graphs(&self) -> Result<Vec<GraphEntity>> {
        let request = self.request(HttpMethod::GET, GHARIAL_API_PATH);
        let envelope: GraphsEnvelope = self.execute(request).await?.json()?;
        Ok(envelope.graphs)
    }

    /// Create a graph in one step
    pub async fn create_graph(
        &self,
        name: &str,
        edge_definitions: Vec<EdgeDefinition>,
        options: GraphCreateOptions,
    ) -> Result<GraphEntity> {
        validate_graph_name(name)?;
        tracing::debug!("Creating graph '{}' in database '{}'", name, self.name);

        let request = self
            .request(HttpMethod::POST, GHARIAL_API_PATH)
            .with_bool_param("waitForSync", options.wait_for_sync)
            .with_json_body(&options.to_body(name, &edge_definitions))?;

        let envelope: GraphEnvelope = self.execute(request).await?.json()?;
        Ok(envelope.graph)
    }

    pub(crate) fn request(&self, method: HttpMethod, path: impl Into<String>) -> Request {
        Request::new(method, self.name.clone(), path)
    }

    /// Send a request, failing on any non-2xx status
    pub(crate) async fn execute(&self, request: Request) -> Result<Response> {
        self.connection.execute(request).await?.error_for_status()
    }

    /// Send a request and hand back the response regardless of status
    pub(crate) async fn execute_raw(&self, request: Request) -> Result<Response> {
        self.connection.execute(request).await
    }
}

impl std::fmt::Debug for ArangoDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArangoDatabase").field("name", &self.name).finish()
    }
}
