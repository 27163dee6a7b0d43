use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use url::Url;
use crate::common::error::{ArangoError, Result};
use crate::common::utils::validate_database_name;

/// Environment variable prefix read by [`ClientConfig::load`]
pub const ENV_PREFIX: &str = "ARANGO";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server endpoint, e.g. `http://127.0.0.1:8529`
    pub endpoint: String,
    /// Database addressed by default
    pub database: String,
    /// User for basic authentication; no credentials are sent when unset
    pub user: Option<String>,
    pub password: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Idle connections kept per host
    pub max_connections: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: "http://127.0.0.1:8529".to_string(),
            database: "_system".to_string(),
            user: Some("root".to_string()),
            password: None,
            timeout_secs: 30,
            max_connections: 8,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        ClientConfig {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    pub fn without_credentials(mut self) -> Self {
        self.user = None;
        self.password = None;
        self
    }

    /// The timeout is kept in whole seconds. Fractions round up, so anything
    /// below one second becomes one second.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let partial = u64::from(timeout.subsec_nanos() > 0);
        self.timeout_secs = (timeout.as_secs() + partial).max(1);
        self
    }

    /// Load defaults, then an optional config file, then `ARANGO_*` variables
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_from(file, ENV_PREFIX)
    }

    /// Same as [`ClientConfig::load`] with a custom environment prefix
    pub fn load_from(file: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let defaults = ClientConfig::default();

        let mut builder = config::Config::builder()
            .set_default("endpoint", defaults.endpoint.clone())?
            .set_default("database", defaults.database.clone())?
            .set_default("user", "root")?
            .set_default("timeout_secs", defaults.timeout_secs as i64)?
            .set_default("max_connections", defaults.max_connections as i64)?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path.to_path_buf()).required(true));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check the endpoint and database name
    pub fn validate(&self) -> Result<()> {
        self.endpoint_url()?;
        validate_database_name(&self.database)?;
        if self.timeout_secs == 0 {
            return Err(ArangoError::Config("timeout_secs must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ArangoError::Config(format!("unsupported endpoint scheme '{}'", other))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
