// Graph-level entities exchanged with the gharial API

use serde::{Deserialize, Serialize};

/// Which vertex collections an edge collection may connect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    /// Edge collection name
    pub collection: String,
    /// Source vertex collections
    pub from: Vec<String>,
    /// Target vertex collections
    pub to: Vec<String>,
}

impl EdgeDefinition {
    pub fn new(collection: impl Into<String>) -> Self {
        EdgeDefinition {
            collection: collection.into(),
            from: Vec::new(),
            to: Vec::new(),
        }
    }

    pub fn with_from<I, S>(mut self, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.from = collections.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_to<I, S>(mut self, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to = collections.into_iter().map(Into::into).collect();
        self
    }

    /// All vertex collections referenced by this definition, deduplicated in order
    pub fn vertex_collections(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for name in self.from.iter().chain(self.to.iter()) {
            if !seen.contains(&name.as_str()) {
                seen.push(name.as_str());
            }
        }
        seen
    }
}

/// Replication factor: a number of copies, or `"satellite"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplicationFactor {
    Copies(u32),
    Satellite(String),
}

/// Graph definition as stored by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEntity {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub edge_definitions: Vec<EdgeDefinition>,

    #[serde(default)]
    pub orphan_collections: Vec<String>,

    #[serde(default)]
    pub is_smart: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_shards: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<ReplicationFactor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_graph_attribute: Option<String>,

    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
}

impl GraphEntity {
    /// Graph name; older servers only report `_key`
    pub fn name(&self) -> &str {
        if self.name.is_empty() {
            self.key.as_deref().unwrap_or("")
        } else {
            &self.name
        }
    }

    pub fn edge_definition(&self, collection: &str) -> Option<&EdgeDefinition> {
        self.edge_definitions.iter().find(|d| d.collection == collection)
    }

    /// Vertex collections from edge definitions and orphans, deduplicated
    pub fn vertex_collections(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let referenced = self.edge_definitions
            .iter()
            .flat_map(|d| d.from.iter().chain(d.to.iter()))
            .chain(self.orphan_collections.iter());
        for name in referenced {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names.sort();
        names
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphEnvelope {
    pub graph: GraphEntity,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphsEnvelope {
    pub graphs: Vec<GraphEntity>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionsEnvelope {
    pub collections: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemovedEnvelope {
    #[serde(default)]
    pub removed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_edge_definition_wire_format() {
        let definition = EdgeDefinition::new("knows")
            .with_from(["persons"])
            .with_to(["persons", "bots"]);

        assert_eq!(
            serde_json::to_value(&definition).unwrap(),
            json!({"collection": "knows", "from": ["persons"], "to": ["persons", "bots"]})
        );
        assert_eq!(definition.vertex_collections(), vec!["persons", "bots"]);
    }

    #[test]
    fn test_graph_entity_from_server() {
        let envelope: GraphEnvelope = serde_json::from_value(json!({
            "error": false,
            "code": 200,
            "graph": {
                "_key": "social",
                "_id": "_graphs/social",
                "_rev": "_hVx--A---",
                "name": "social",
                "edgeDefinitions": [
                    {"collection": "relation", "from": ["female", "male"], "to": ["female", "male"]}
                ],
                "orphanCollections": ["lonely"],
                "isSmart": false,
                "numberOfShards": 1,
                "replicationFactor": 1
            }
        })).unwrap();

        let graph = envelope.graph;
        assert_eq!(graph.name(), "social");
        assert_eq!(graph.id.as_deref(), Some("_graphs/social"));
        assert_eq!(graph.replication_factor, Some(ReplicationFactor::Copies(1)));
        assert!(graph.edge_definition("relation").is_some());
        assert_eq!(graph.vertex_collections(), vec!["female", "lonely", "male"]);
    }

    #[test]
    fn test_graph_name_falls_back_to_key() {
        let graph: GraphEntity = serde_json::from_value(json!({
            "_key": "legacy",
            "edgeDefinitions": [],
            "replicationFactor": "satellite"
        })).unwrap();

        assert_eq!(graph.name(), "legacy");
        assert_eq!(graph.replication_factor, Some(ReplicationFactor::Satellite("satellite".into())));
    }
}
