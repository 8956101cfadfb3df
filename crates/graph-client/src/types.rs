//! Wire types and the service contract for the graph facade.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Entity categories the facade's full-text search understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Movie,
    Actor,
}

impl EntityKind {
    /// The `type` query parameter value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Movie => "movie",
            EntityKind::Actor => "actor",
        }
    }
}

/// Relationships the facade can traverse from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Movie -> cast members.
    Actors,
    /// Actor -> filmography.
    ActedIn,
}

impl Relation {
    /// The path segment naming this relationship.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Actors => "actors",
            Relation::ActedIn => "acted_in",
        }
    }
}

/// One graph node as the facade lists it.
///
/// Search hits carry a node's public properties; relationship listings carry
/// only `id` plus `name` or `title`, whichever the node has. The facade
/// emits internal node ids as JSON numbers, so `id` deserializes from either
/// a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Envelope for `GET /:id/:relation` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct RelatedResponse {
    pub data: Vec<NodeRecord>,
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Number(u64),
        Text(String),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Number(id) => id.to_string(),
        IdRepr::Text(id) => id,
    })
}

/// Contract the suggestion engine needs from the graph backend.
///
/// Both calls are remote round trips; implementations must be safe to share
/// across tasks (`Send + Sync`) because lookups are dispatched concurrently.
#[async_trait]
pub trait GraphService: Send + Sync {
    /// Full-text search for nodes of one entity kind.
    ///
    /// The facade ANDs comma-separated query terms and ORs space-separated
    /// ones; callers are responsible for writing queries in that syntax.
    async fn search(&self, kind: EntityKind, query: &str) -> Result<Vec<NodeRecord>>;

    /// List the nodes related to `node_id` through `relation`.
    async fn related(&self, node_id: &str, relation: Relation) -> Result<Vec<NodeRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_and_relation_names() {
        assert_eq!(EntityKind::Movie.as_str(), "movie");
        assert_eq!(EntityKind::Actor.as_str(), "actor");
        assert_eq!(Relation::Actors.as_str(), "actors");
        assert_eq!(Relation::ActedIn.as_str(), "acted_in");
    }

    #[test]
    fn test_node_record_decodes_numeric_id() {
        let node: NodeRecord = serde_json::from_str(r#"{"id": 42, "title": "Heat"}"#).unwrap();
        assert_eq!(node.id, "42");
        assert_eq!(node.title.as_deref(), Some("Heat"));
        assert_eq!(node.name, None);
    }

    #[test]
    fn test_node_record_decodes_string_id() {
        let node: NodeRecord =
            serde_json::from_str(r#"{"id": "42", "name": "Al Pacino"}"#).unwrap();
        assert_eq!(node.id, "42");
        assert_eq!(node.name.as_deref(), Some("Al Pacino"));
    }

    #[test]
    fn test_node_record_ignores_extra_properties() {
        // Search hits include every public property of the node.
        let node: NodeRecord =
            serde_json::from_str(r#"{"id": 7, "title": "Heat", "year": 1995}"#).unwrap();
        assert_eq!(node.id, "7");
        assert_eq!(node.title.as_deref(), Some("Heat"));
    }

    #[test]
    fn test_related_response_envelope() {
        let response: RelatedResponse =
            serde_json::from_str(r#"{"data": [{"id": 1, "name": "Val Kilmer"}]}"#).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].name.as_deref(), Some("Val Kilmer"));
    }
}
