//! Domain types for one suggestion run.
//!
//! Everything here is keyed by graph node id, never by title or name:
//! titles are not unique, ids are. All of these values are created at the
//! start of a run and dropped when the run returns.

use graph_client::NodeRecord;
use serde::Serialize;

/// A movie as resolved from the graph. Identity is `id`; `title` is
/// display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
}

impl MovieRecord {
    /// Build from a wire node. Nodes without a `title` property are not
    /// movies we can present and are dropped.
    pub fn from_node(node: NodeRecord) -> Option<Self> {
        let title = node.title?;
        Some(Self { id: node.id, title })
    }
}

/// An actor as listed in a movie's cast. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorRecord {
    pub id: String,
    pub name: String,
}

impl ActorRecord {
    /// Build from a wire node, dropping nodes without a `name` property.
    pub fn from_node(node: NodeRecord) -> Option<Self> {
        let name = node.name?;
        Some(Self { id: node.id, name })
    }
}

/// Running count of how many of the resolved movies feature one actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorTally {
    pub actor: ActorRecord,
    /// Number of distinct resolved movies this actor appears in; at least 1.
    pub count: u32,
}

/// A successful suggestion: one movie the group has not named, plus the
/// shared actor that led to it.
///
/// Serializes to the documented result payload:
/// `{"title": ..., "id": ..., "star": {"id": ..., "name": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub title: String,
    pub id: String,
    pub star: ActorRecord,
}
