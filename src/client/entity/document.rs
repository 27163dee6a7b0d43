// Results of edge and vertex writes

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::common::document::{DocumentMeta, DocumentRevision};
use crate::common::error::Result;

/// Outcome of an insert: the new document's handle and, if requested, its body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEntity {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<Value>,
}

impl DocumentEntity {
    /// Decode the `new` body, present when `return_new` was set
    pub fn new_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        decode(self.new.as_ref())
    }
}

/// Outcome of a replace or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentUpdateEntity {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    #[serde(rename = "_oldRev", default, skip_serializing_if = "Option::is_none")]
    pub old_rev: Option<DocumentRevision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<Value>,
}

impl DocumentUpdateEntity {
    pub fn new_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        decode(self.new.as_ref())
    }

    pub fn old_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        decode(self.old.as_ref())
    }
}

pub type EdgeEntity = DocumentEntity;
pub type EdgeUpdateEntity = DocumentUpdateEntity;
pub type VertexEntity = DocumentEntity;
pub type VertexUpdateEntity = DocumentUpdateEntity;

fn decode<T: DeserializeOwned>(value: Option<&Value>) -> Result<Option<T>> {
    match value {
        Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        None => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WrittenMeta {
    #[serde(flatten)]
    meta: DocumentMeta,
    #[serde(rename = "_oldRev", default)]
    old_rev: Option<DocumentRevision>,
}

/// `{"edge": {...}, "new": ..., "old": ...}` or the same keyed by `vertex`
#[derive(Debug, Deserialize)]
pub(crate) struct WriteEnvelope {
    #[serde(alias = "vertex")]
    edge: WrittenMeta,
    #[serde(default)]
    new: Option<Value>,
    #[serde(default)]
    old: Option<Value>,
}

impl WriteEnvelope {
    pub fn into_entity(self) -> DocumentEntity {
        DocumentEntity {
            meta: self.edge.meta,
            new: self.new,
        }
    }

    pub fn into_update_entity(self) -> DocumentUpdateEntity {
        DocumentUpdateEntity {
            meta: self.edge.meta,
            old_rev: self.edge.old_rev,
            new: self.new,
            old: self.old,
        }
    }
}

/// `{"edge": <document>}` or `{"vertex": <document>}`
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub(crate) struct ReadEnvelope<T> {
    #[serde(alias = "vertex")]
    pub edge: T,
}
