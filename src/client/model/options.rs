use serde::Serialize;
use crate::client::entity::{EdgeDefinition, ReplicationFactor};
use crate::client::network::Request;

/// Options for reading a single edge or vertex
#[derive(Debug, Clone)]
pub struct DocumentReadOptions {
    pub if_none_match: Option<String>,
    pub if_match: Option<String>,
    /// Turn "not found" and "not modified" into `Ok(None)`
    pub catch_exception: bool,
}

impl Default for DocumentReadOptions {
    fn default() -> Self {
        DocumentReadOptions {
            if_none_match: None,
            if_match: None,
            catch_exception: true,
        }
    }
}

impl DocumentReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return the document if its revision differs from `rev`
    pub fn if_none_match(mut self, rev: impl Into<String>) -> Self {
        self.if_none_match = Some(rev.into());
        self
    }

    /// Only return the document if its revision equals `rev`
    pub fn if_match(mut self, rev: impl Into<String>) -> Self {
        self.if_match = Some(rev.into());
        self
    }

    pub fn catch_exception(mut self, catch: bool) -> Self {
        self.catch_exception = catch;
        self
    }

    pub(crate) fn apply(&self, request: Request) -> Request {
        request
            .with_optional_header("If-None-Match", self.if_none_match.as_deref())
            .with_optional_header("If-Match", self.if_match.as_deref())
    }
}

/// Options for inserting an edge
#[derive(Debug, Clone, Default)]
pub struct EdgeCreateOptions {
    pub wait_for_sync: Option<bool>,
    pub return_new: Option<bool>,
}

impl EdgeCreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wait_for_sync(mut self, wait: bool) -> Self {
        self.wait_for_sync = Some(wait);
        self
    }

    pub fn return_new(mut self, return_new: bool) -> Self {
        self.return_new = Some(return_new);
        self
    }

    pub(crate) fn apply(&self, request: Request) -> Request {
        request
            .with_bool_param("waitForSync", self.wait_for_sync)
            .with_bool_param("returnNew", self.return_new)
    }
}

/// Options for replacing an edge
#[derive(Debug, Clone, Default)]
pub struct EdgeReplaceOptions {
    pub wait_for_sync: Option<bool>,
    /// Replace only if the stored revision equals this one
    pub if_match: Option<String>,
    pub return_old: Option<bool>,
    pub return_new: Option<bool>,
}

impl EdgeReplaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wait_for_sync(mut self, wait: bool) -> Self {
        self.wait_for_sync = Some(wait);
        self
    }

    pub fn if_match(mut self, rev: impl Into<String>) -> Self {
        self.if_match = Some(rev.into());
        self
    }

    pub fn return_old(mut self, return_old: bool) -> Self {
        self.return_old = Some(return_old);
        self
    }

    pub fn return_new(mut self, return_new: bool) -> Self {
        self.return_new = Some(return_new);
        self
    }

    pub(crate) fn apply(&self, request: Request) -> Request {
        request
            .with_bool_param("waitForSync", self.wait_for_sync)
            .with_bool_param("returnOld", self.return_old)
            .with_bool_param("returnNew", self.return_new)
            .with_optional_header("If-Match", self.if_match.as_deref())
    }
}

/// Options for partially updating an edge
#[derive(Debug, Clone, Default)]
pub struct EdgeUpdateOptions {
    pub wait_for_sync: Option<bool>,
    pub if_match: Option<String>,
    /// When `false`, attributes patched to `null` are removed
    pub keep_null: Option<bool>,
    pub return_old: Option<bool>,
    pub return_new: Option<bool>,
}

impl EdgeUpdateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wait_for_sync(mut self, wait: bool) -> Self {
        self.wait_for_sync = Some(wait);
        self
    }

    pub fn if_match(mut self, rev: impl Into<String>) -> Self {
        self.if_match = Some(rev.into());
        self
    }

    pub fn keep_null(mut self, keep_null: bool) -> Self {
        self.keep_null = Some(keep_null);
        self
    }

    pub fn return_old(mut self, return_old: bool) -> Self {
        self.return_old = Some(return_old);
        self
    }

    pub fn return_new(mut self, return_new: bool) -> Self {
        self.return_new = Some(return_new);
        self
    }

    pub(crate) fn apply(&self, request: Request) -> Request {
        request
            .with_bool_param("waitForSync", self.wait_for_sync)
            .with_bool_param("keepNull", self.keep_null)
            .with_bool_param("returnOld", self.return_old)
            .with_bool_param("returnNew", self.return_new)
            .with_optional_header("If-Match", self.if_match.as_deref())
    }
}

/// Options for removing an edge
#[derive(Debug, Clone, Default)]
pub struct EdgeDeleteOptions {
    pub wait_for_sync: Option<bool>,
    pub if_match: Option<String>,
    pub return_old: Option<bool>,
}

impl EdgeDeleteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wait_for_sync(mut self, wait: bool) -> Self {
        self.wait_for_sync = Some(wait);
        self
    }

    pub fn if_match(mut self, rev: impl Into<String>) -> Self {
        self.if_match = Some(rev.into());
        self
    }

    pub fn return_old(mut self, return_old: bool) -> Self {
        self.return_old = Some(return_old);
        self
    }

    pub(crate) fn apply(&self, request: Request) -> Request {
        request
            .with_bool_param("waitForSync", self.wait_for_sync)
            .with_bool_param("returnOld", self.return_old)
            .with_optional_header("If-Match", self.if_match.as_deref())
    }
}

// Vertex writes accept exactly the same parameters.
pub type VertexCreateOptions = EdgeCreateOptions;
pub type VertexReplaceOptions = EdgeReplaceOptions;
pub type VertexUpdateOptions = EdgeUpdateOptions;
pub type VertexDeleteOptions = EdgeDeleteOptions;

/// Options for creating a graph
#[derive(Debug, Clone, Default)]
pub struct GraphCreateOptions {
    pub orphan_collections: Vec<String>,
    pub is_smart: Option<bool>,
    pub replication_factor: Option<ReplicationFactor>,
    pub number_of_shards: Option<u32>,
    pub smart_graph_attribute: Option<String>,
    pub wait_for_sync: Option<bool>,
}

impl GraphCreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex collections not referenced by any edge definition
    pub fn orphan_collections<I, S>(mut self, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orphan_collections = collections.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_smart(mut self, is_smart: bool) -> Self {
        self.is_smart = Some(is_smart);
        self
    }

    pub fn replication_factor(mut self, factor: ReplicationFactor) -> Self {
        self.replication_factor = Some(factor);
        self
    }

    pub fn number_of_shards(mut self, shards: u32) -> Self {
        self.number_of_shards = Some(shards);
        self
    }

    pub fn smart_graph_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.smart_graph_attribute = Some(attribute.into());
        self
    }

    pub fn wait_for_sync(mut self, wait: bool) -> Self {
        self.wait_for_sync = Some(wait);
        self
    }

    pub(crate) fn to_body<'a>(
        &'a self,
        name: &'a str,
        edge_definitions: &'a [EdgeDefinition],
    ) -> GraphCreateBody<'a> {
        let options = GraphCreateBodyOptions {
            smart_graph_attribute: self.smart_graph_attribute.as_deref(),
            number_of_shards: self.number_of_shards,
            replication_factor: self.replication_factor.as_ref(),
        };

        GraphCreateBody {
            name,
            edge_definitions,
            orphan_collections: &self.orphan_collections,
            is_smart: self.is_smart,
            options: if options.is_empty() { None } else { Some(options) },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphCreateBody<'a> {
    pub name: &'a str,
    pub edge_definitions: &'a [EdgeDefinition],
    pub orphan_collections: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_smart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GraphCreateBodyOptions<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphCreateBodyOptions<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_graph_attribute: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_shards: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<&'a ReplicationFactor>,
}

impl GraphCreateBodyOptions<'_> {
    fn is_empty(&self) -> bool {
        self.smart_graph_attribute.is_none()
            && self.number_of_shards.is_none()
            && self.replication_factor.is_none()
    }
}
