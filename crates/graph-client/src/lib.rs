//! Client for the remote graph/search facade.
//!
//! The facade fronts a graph database holding movie and actor nodes with
//! `acted_in` / `actors` relationships between them, plus a full-text index
//! over titles and names. This crate provides:
//! - The [`GraphService`] trait: the contract the suggestion engine needs
//!   (entity search and relationship traversal).
//! - [`HttpGraphClient`]: the REST/JSON implementation of that contract.
//! - The wire types and a typed error for everything that can go wrong on
//!   the way there and back.
//!
//! ## Example Usage
//!
//! ```ignore
//! use graph_client::{EntityKind, GraphClientConfig, GraphService, HttpGraphClient, Relation};
//!
//! let client = HttpGraphClient::new(GraphClientConfig::new("http://localhost:9393"));
//!
//! let movies = client.search(EntityKind::Movie, "The,Matrix").await?;
//! let cast = client.related(&movies[0].id, Relation::Actors).await?;
//! ```

pub mod error;
pub mod http;
pub mod types;

pub use error::{GraphError, Result};
pub use http::{GraphClientConfig, HttpGraphClient};
pub use types::{EntityKind, GraphService, NodeRecord, Relation};
