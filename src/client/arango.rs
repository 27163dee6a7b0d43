use std::sync::Arc;
use crate::common::error::Result;
use super::config::ClientConfig;
use super::database::ArangoDatabase;
use super::network::{Connection, ConnectionStats, HttpConnection};

/// Entry point of the client: owns the shared connection and hands out
/// database handles bound to it
#[derive(Clone)]
pub struct ArangoClient {
    config: ClientConfig,
    connection: Arc<dyn Connection>,
}

impl ArangoClient {
    /// Connect over HTTP using the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let connection = HttpConnection::new(&config)?;
        tracing::info!("ArangoDB client for {} (database '{}')", config.endpoint, config.database);

        Ok(ArangoClient {
            config,
            connection: Arc::new(connection),
        })
    }

    /// Use a custom transport; `database` becomes the default database
    pub fn with_connection(connection: Arc<dyn Connection>, database: impl Into<String>) -> Self {
        let config = ClientConfig::default().with_database(database);
        ArangoClient { config, connection }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Handle to the configured database
    pub fn db(&self) -> Result<ArangoDatabase> {
        self.db_named(self.config.database.clone())
    }

    pub fn db_named(&self, name: impl Into<String>) -> Result<ArangoDatabase> {
        ArangoDatabase::new(self.connection.clone(), name)
    }

    pub fn stats(&self) -> ConnectionStats {
        self.connection.stats()
    }
}

impl std::fmt::Debug for ArangoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArangoClient")
            .field("endpoint", &self.config.endpoint)
            .field("database", &self.config.database)
            .finish()
    }
}
