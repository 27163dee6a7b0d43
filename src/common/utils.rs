use std::borrow::Cow;
use crate::common::error::Result;
use crate::{arango_bail, arango_ensure};

/// Maximum length of collection and graph names
pub const MAX_NAME_LENGTH: usize = 256;

/// Validate collection name according to ArangoDB rules
pub fn validate_collection_name(name: &str) -> Result<()> {
    validate_name("collection", name)
}

/// Graph names follow the same rules as collection names
pub fn validate_graph_name(name: &str) -> Result<()> {
    validate_name("graph", name)
}

/// Validate database name according to ArangoDB rules
pub fn validate_database_name(name: &str) -> Result<()> {
    arango_ensure!(!name.is_empty(), "database name cannot be empty");
    arango_ensure!(name.len() <= 64, "database name too long (max 64 characters)");

    if name == "_system" {
        return Ok(());
    }

    let first_char = name.chars().next().unwrap_or('_');
    arango_ensure!(first_char.is_ascii_alphabetic(), "database name must start with a letter");

    if let Some(c) = name.chars().find(|c| !is_name_char(*c)) {
        arango_bail!("invalid character '{}' in database name", c);
    }

    Ok(())
}

fn validate_name(kind: &str, name: &str) -> Result<()> {
    arango_ensure!(!name.is_empty(), "{} name cannot be empty", kind);
    arango_ensure!(
        name.len() <= MAX_NAME_LENGTH,
        "{} name too long (max {} characters)", kind, MAX_NAME_LENGTH
    );

    // Must start with letter or underscore
    let first_char = name.chars().next().unwrap_or('-');
    arango_ensure!(
        first_char.is_ascii_alphabetic() || first_char == '_',
        "{} name must start with a letter or underscore", kind
    );

    if let Some(c) = name.chars().find(|c| !is_name_char(*c)) {
        arango_bail!("invalid character '{}' in {} name", c, kind);
    }

    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Percent-encode a single URL path segment
pub fn encode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

/// Join already-validated segments into a path, encoding each one
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(&encode_segment(segment.as_ref()));
    }
    path
}

/// Render a boolean as the server expects in query strings
pub fn bool_param(value: bool) -> String {
    if value { "true".to_string() } else { "false".to_string() }
}
