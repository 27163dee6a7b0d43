use std::collections::HashMap;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Method, RequestBuilder};
use url::Url;
use crate::client::config::ClientConfig;
use crate::common::error::{ArangoError, Result};
use crate::common::utils::encode_segment;
use super::network::{ConnectionStats, HttpMethod, Request, RequestTimer, Response, StatsRecorder};

/// Transport seam: anything that can carry a request to the server
#[async_trait]
pub trait Connection: Send + Sync {
    /// Send a request and return the raw response, whatever its status
    async fn execute(&self, request: Request) -> Result<Response>;

    /// Statistics gathered so far
    fn stats(&self) -> ConnectionStats {
        ConnectionStats::default()
    }
}

/// HTTP transport backed by reqwest
pub struct HttpConnection {
    base_url: Url,
    client: Client,
    user: Option<String>,
    password: Option<String>,
    recorder: StatsRecorder,
}

impl HttpConnection {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(config.max_connections)
            .build()?;

        Ok(HttpConnection {
            base_url: config.endpoint_url()?,
            client,
            user: config.user.clone(),
            password: config.password.clone(),
            recorder: StatsRecorder::new(),
        })
    }

    /// Full URL for a request: endpoint + `/_db/{database}` + path + query
    pub fn url_for(&self, request: &Request) -> Url {
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!(
            "{}/_db/{}{}",
            base_path,
            encode_segment(&request.database),
            request.path
        ));

        if request.query_params.is_empty() {
            url.set_query(None);
        } else {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in &request.query_params {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::GET => Method::GET,
            HttpMethod::POST => Method::POST,
            HttpMethod::PUT => Method::PUT,
            HttpMethod::PATCH => Method::PATCH,
            HttpMethod::DELETE => Method::DELETE,
        }
    }
}

impl HttpConnection {
    /// Send the request and read the whole body; a failure in either step is a transport error
    async fn receive(builder: RequestBuilder) -> reqwest::Result<(u16, HashMap<String, String>, Bytes)> {
        let response = builder.send().await?;
        let status_code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.bytes().await?;
        Ok((status_code, headers, body))
    }
}

#[async_trait]
impl Connection for HttpConnection {
    async fn execute(&self, request: Request) -> Result<Response> {
        let url = self.url_for(&request);
        let timer = RequestTimer::new();

        tracing::debug!("{} {}", request.method.as_str(), url);

        let mut builder = self.client.request(Self::method(request.method), url.clone());
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(user) = &self.user {
            builder = builder.basic_auth(user, self.password.as_ref());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        self.recorder.record_request(request.content_length() as u64);

        let (status_code, headers, body) = match Self::receive(builder).await {
            Ok(parts) => parts,
            Err(e) => {
                self.recorder.record_connection_error();
                tracing::warn!("{} {} failed: {}", request.method.as_str(), url, e);
                return Err(ArangoError::Http(e));
            }
        };

        let response = Response { status_code, headers, body };
        self.recorder.record_response(timer.elapsed(), response.content_length() as u64, response.is_error());

        if response.is_error() {
            tracing::warn!("{} {} returned {}", request.method.as_str(), url, status_code);
        } else {
            tracing::debug!("{} {} returned {} in {:?}", request.method.as_str(), url, status_code, timer.elapsed());
        }

        Ok(response)
    }

    fn stats(&self) -> ConnectionStats {
        self.recorder.get_stats()
    }
}
