//! The suggestion run: resolve titles, tally shared cast, probe
//! filmographies.
//!
//! One call to [`SuggestionEngine::suggest`] is one isolated run. The run
//! fans out one search per input title and one cast lookup per resolved
//! movie, collects every completion over a channel, and only once nothing is
//! outstanding ranks the tallied actors and walks their filmographies for a
//! film that was not part of the input.
//!
//! The coordinator is the channel's single consumer and owns all run state
//! (movie map, tally map, blacklist, pending counters), so completions can
//! arrive in any order, from any worker thread, without a lock and without
//! losing an update. Every dispatched lookup sends exactly one completion,
//! errors included, which keeps the counters honest even when the facade
//! fails mid-run.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use graph_client::{EntityKind, GraphError, GraphService, NodeRecord, Relation};

use crate::error::{Result, SuggestError};
use crate::query::title_to_query;
use crate::ranking::rank;
use crate::types::{ActorRecord, ActorTally, MovieRecord, Suggestion};

/// One completion from the fan-out stage.
enum Completion {
    TitleSearch(graph_client::Result<Vec<NodeRecord>>),
    CastLookup {
        movie_id: String,
        outcome: graph_client::Result<Vec<NodeRecord>>,
    },
}

/// Aggregation state owned by a single run. Nothing in here is shared
/// across runs or outlives the run that built it.
#[derive(Default)]
struct RunState {
    /// Resolved movies keyed by id; the first occurrence wins.
    movies: HashMap<String, MovieRecord>,
    /// Per-actor appearance counts keyed by actor id.
    tallies: HashMap<String, ActorTally>,
    /// Ids of the input movies; never suggested back.
    blacklist: HashSet<String>,
    /// First graph failure seen during fan-out, if any.
    failure: Option<GraphError>,
}

/// Suggests a movie the group has not named, starring the actor most shared
/// across the movies they did name.
#[derive(Clone)]
pub struct SuggestionEngine {
    graph: Arc<dyn GraphService>,
}

impl SuggestionEngine {
    pub fn new(graph: Arc<dyn GraphService>) -> Self {
        Self { graph }
    }

    /// Run one aggregation over `titles`.
    ///
    /// # Returns
    /// * `Ok(Suggestion)` - a movie outside the input set, with the actor
    ///   that justified it attached as `star`
    /// * `Err(SuggestError::NoMatches)` - no title resolved to any movie
    ///   (or `titles` was empty)
    /// * `Err(SuggestError::Exhausted)` - every candidate actor's films were
    ///   already in the input set
    /// * `Err(SuggestError::Transport)` - a facade call failed or timed out
    pub async fn suggest(&self, titles: &[String]) -> Result<Suggestion> {
        // With nothing dispatched there is nothing to wait for; fail here
        // rather than letting the fan-in declare itself complete over zero
        // requests.
        if titles.is_empty() {
            return Err(SuggestError::NoMatches);
        }

        let state = self.collect(titles).await;

        if let Some(failure) = state.failure {
            return Err(SuggestError::Transport(failure));
        }
        if state.movies.is_empty() {
            return Err(SuggestError::NoMatches);
        }

        info!(
            "fan-in complete: {} movies, {} distinct actors",
            state.movies.len(),
            state.tallies.len()
        );

        let ranked = rank(state.tallies.into_values().collect());
        self.find_suggestion(ranked, &state.blacklist).await
    }

    /// Fan out the title searches, dispatch a cast lookup for each movie the
    /// moment it first resolves, and drain one completion per dispatched
    /// call until none are outstanding.
    async fn collect(&self, titles: &[String]) -> RunState {
        let (tx, mut rx) = mpsc::unbounded_channel();

        for title in titles {
            let query = title_to_query(title);
            debug!("resolving {:?} as query {:?}", title, query);
            let graph = Arc::clone(&self.graph);
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = graph.search(EntityKind::Movie, &query).await;
                let _ = tx.send(Completion::TitleSearch(outcome));
            });
        }

        let mut pending_title_lookups = titles.len();
        let mut pending_cast_lookups = 0usize;
        let mut state = RunState::default();

        while pending_title_lookups > 0 || pending_cast_lookups > 0 {
            // `tx` is still on this stack frame, so the channel cannot close
            // while completions are owed.
            let Some(completion) = rx.recv().await else {
                break;
            };
            match completion {
                Completion::TitleSearch(Ok(nodes)) => {
                    pending_title_lookups -= 1;
                    for movie in nodes.into_iter().filter_map(MovieRecord::from_node) {
                        if state.movies.contains_key(&movie.id) {
                            continue;
                        }
                        state.blacklist.insert(movie.id.clone());
                        self.spawn_cast_lookup(&tx, &movie);
                        pending_cast_lookups += 1;
                        state.movies.insert(movie.id.clone(), movie);
                    }
                }
                Completion::TitleSearch(Err(error)) => {
                    pending_title_lookups -= 1;
                    warn!("title search failed: {error}");
                    state.failure.get_or_insert(error);
                }
                Completion::CastLookup {
                    movie_id,
                    outcome: Ok(nodes),
                } => {
                    pending_cast_lookups -= 1;
                    tally_cast(&mut state.tallies, &movie_id, nodes);
                }
                Completion::CastLookup {
                    movie_id,
                    outcome: Err(error),
                } => {
                    pending_cast_lookups -= 1;
                    warn!("cast lookup for movie {movie_id} failed: {error}");
                    state.failure.get_or_insert(error);
                }
            }
        }

        state
    }

    fn spawn_cast_lookup(&self, tx: &mpsc::UnboundedSender<Completion>, movie: &MovieRecord) {
        debug!("fetching cast of {:?} (id {})", movie.title, movie.id);
        let graph = Arc::clone(&self.graph);
        let movie_id = movie.id.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = graph.related(&movie_id, Relation::Actors).await;
            let _ = tx.send(Completion::CastLookup { movie_id, outcome });
        });
    }

    /// Probe ranked actors' filmographies, most-shared first, for the first
    /// movie that is not blacklisted.
    ///
    /// Lookups are strictly sequential: only one candidate movie is needed,
    /// so the next actor is tried only after the current one comes up empty.
    async fn find_suggestion(
        &self,
        mut ranked: Vec<ActorTally>,
        blacklist: &HashSet<String>,
    ) -> Result<Suggestion> {
        while let Some(tally) = ranked.pop() {
            debug!(
                "probing filmography of {} (appears in {} of the inputs)",
                tally.actor.name, tally.count
            );
            let films = self.graph.related(&tally.actor.id, Relation::ActedIn).await?;

            for film in films.into_iter().filter_map(MovieRecord::from_node) {
                if blacklist.contains(&film.id) {
                    continue;
                }
                info!("suggesting {:?} starring {}", film.title, tally.actor.name);
                return Ok(Suggestion {
                    title: film.title,
                    id: film.id,
                    star: tally.actor,
                });
            }
        }

        Err(SuggestError::Exhausted)
    }
}

/// Fold one movie's cast into the tallies.
///
/// A cast listing can repeat an actor; each movie still counts at most once
/// per actor, so a tally is exactly the number of distinct resolved movies
/// that actor appears in.
fn tally_cast(tallies: &mut HashMap<String, ActorTally>, movie_id: &str, nodes: Vec<NodeRecord>) {
    let mut seen = HashSet::new();
    for actor in nodes.into_iter().filter_map(ActorRecord::from_node) {
        if !seen.insert(actor.id.clone()) {
            debug!("cast of movie {movie_id} lists actor {} more than once", actor.id);
            continue;
        }
        tallies
            .entry(actor.id.clone())
            .and_modify(|tally| tally.count += 1)
            .or_insert(ActorTally { actor, count: 1 });
    }
}
