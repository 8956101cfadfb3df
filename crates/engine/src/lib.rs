//! # Engine Crate
//!
//! Movie-night suggestion engine: given the movies a group has already
//! named, suggest one they have not, starring the actor those movies share
//! the most.
//!
//! ## Pipeline
//!
//! 1. Resolve each title against the graph facade (parallel fan-out)
//! 2. Fetch the cast of every resolved movie (parallel fan-out)
//! 3. Tally how many of the resolved movies each actor appears in
//! 4. Rank actors by that tally
//! 5. Walk ranked filmographies, most-shared actor first, for the first
//!    movie that was not part of the input (sequential backtracking)
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::SuggestionEngine;
//! use graph_client::{GraphClientConfig, HttpGraphClient};
//! use std::sync::Arc;
//!
//! let client = Arc::new(HttpGraphClient::new(GraphClientConfig::new("http://localhost:9393")));
//! let engine = SuggestionEngine::new(client);
//!
//! let titles = vec!["The Matrix".to_string(), "Speed".to_string()];
//! let suggestion = engine.suggest(&titles).await?;
//! println!("watch {} (stars {})", suggestion.title, suggestion.star.name);
//! ```

// Public modules
pub mod engine;
pub mod error;
pub mod query;
pub mod ranking;
pub mod types;

// Re-export commonly used types
pub use engine::SuggestionEngine;
pub use error::{Result, SuggestError};
pub use types::{ActorRecord, ActorTally, MovieRecord, Suggestion};
