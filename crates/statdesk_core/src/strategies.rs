//! Candidate search-query generation, most specific first.
//!
//! The evidence collector consumes the returned queries in order and stops
//! at the first satisfactory result set, so ordering encodes policy:
//! entity-pinned and domain-restricted variants come before recency and
//! general-news variants.

use time::OffsetDateTime;

/// High-salience entities whose questions get a query pinned to their
/// canonical sources.
const ENTITY_QUERIES: &[(&[&str], &str, &str)] = &[(
    &["curry", "stephen"],
    "Stephen Curry",
    "site:nba.com OR site:basketball-reference.com OR site:espn.com",
)];

/// Ordered query variants for a user question. Always at least 4 entries.
pub fn query_strategies(question: &str) -> Vec<String> {
    strategies_for_year(question, OffsetDateTime::now_utc().year())
}

/// Year-parameterized form of [`query_strategies`]. The recency variant
/// covers the season window spanning the previous and given year.
pub fn strategies_for_year(question: &str, year: i32) -> Vec<String> {
    let lowered = question.to_lowercase();
    let mut queries = Vec::with_capacity(5);

    for (keywords, entity, sites) in ENTITY_QUERIES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            queries.push(format!("\"{entity}\" {question} {sites}"));
            break;
        }
    }

    queries.push(format!(
        "{question} site:espn.com OR site:nba.com OR site:nfl.com OR site:mlb.com OR site:nhl.com"
    ));
    queries.push(format!(
        "{question} official sports statistics {} {}",
        year - 1,
        year
    ));
    queries.push(format!(
        "{question} basketball-reference.com OR espn.com OR nba.com"
    ));
    queries.push(format!("{question} sports news latest"));

    queries
}
