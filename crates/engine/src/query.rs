//! Translation from display titles to the facade's search syntax.

/// Rewrite a movie title for the facade's full-text search.
///
/// The search endpoint ANDs comma-separated terms and ORs space-separated
/// ones, so every space becomes a comma: all of a title's words must match.
/// Everything else passes through byte-for-byte; embedded commas already
/// mean AND, and the exact rewrite affects which nodes come back.
pub fn title_to_query(title: &str) -> String {
    title.replace(' ', ",")
}
