use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize, Serializer, Deserializer};
use crate::common::error::{ArangoError, Result};

/// Maximum length of a document key in bytes
pub const MAX_KEY_LENGTH: usize = 254;

/// Punctuation the server accepts inside document keys
const KEY_PUNCTUATION: &str = "_-:.@()+,=;$!*'%";

/// Document key type - must be a valid string identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Create a new document key
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        Self::validate_key(&key)?;
        Ok(DocumentKey(key))
    }

    /// Get the key as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate document key format
    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(ArangoError::validation("document key cannot be empty"));
        }

        if key.len() > MAX_KEY_LENGTH {
            return Err(ArangoError::validation(
                format!("document key too long (max {} bytes)", MAX_KEY_LENGTH)
            ));
        }

        for c in key.chars() {
            if !c.is_ascii_alphanumeric() && !KEY_PUNCTUATION.contains(c) {
                return Err(ArangoError::validation(
                    format!("invalid character '{}' in document key", c)
                ));
            }
        }

        Ok(())
    }
}

impl FromStr for DocumentKey {
    type Err = ArangoError;

    fn from_str(s: &str) -> Result<Self> {
        DocumentKey::new(s)
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DocumentKey> for String {
    fn from(key: DocumentKey) -> String {
        key.0
    }
}

impl AsRef<str> for DocumentKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Document ID - combination of collection name and document key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId {
    pub collection: String,
    pub key: DocumentKey,
}

impl DocumentId {
    /// Create a new document ID
    pub fn new(collection: impl Into<String>, key: DocumentKey) -> Self {
        DocumentId {
            collection: collection.into(),
            key,
        }
    }

    /// Parse document ID from string format "collection/key"
    pub fn parse(id: &str) -> Result<Self> {
        let (collection, key) = id.split_once('/').ok_or_else(|| {
            ArangoError::validation(format!("document ID '{}' must be in format 'collection/key'", id))
        })?;

        crate::common::utils::validate_collection_name(collection)?;
        let key = DocumentKey::new(key)?;

        Ok(DocumentId { collection: collection.to_string(), key })
    }

    /// Get collection name
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Get document key
    pub fn key(&self) -> &DocumentKey {
        &self.key
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.key)
    }
}

impl FromStr for DocumentId {
    type Err = ArangoError;

    fn from_str(s: &str) -> Result<Self> {
        DocumentId::parse(s)
    }
}

impl Serialize for DocumentId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DocumentId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Document revision as assigned by the server; opaque to the client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DocumentRevision(String);

impl DocumentRevision {
    pub fn new(rev: impl Into<String>) -> Self {
        DocumentRevision(rev.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// System attributes returned by every write operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DocumentMeta {
    #[serde(rename = "_id")]
    pub id: DocumentId,

    #[serde(rename = "_key")]
    pub key: DocumentKey,

    #[serde(rename = "_rev")]
    pub rev: DocumentRevision,
}
