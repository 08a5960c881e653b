//! Evidence collection: tries query strategies in order and stops at the
//! first satisfactory result set.

use statdesk_core::domain::SearchResult;
use statdesk_core::ranking::source_priority;
use statdesk_core::strategies::query_strategies;
use time::OffsetDateTime;

use crate::search::SearchProvider;

/// Per-strategy provider call limit.
const RESULTS_PER_QUERY: u32 = 8;

/// Maximum evidence handed to the prompt.
const MAX_EVIDENCE: usize = 5;

/// Minimum volume before the loose fallback filter is accepted, so a single
/// weak match never stands in for trusted evidence.
const MIN_FALLBACK_RESULTS: usize = 3;

/// Sports domains accepted by the fallback filter even without a trusted
/// priority score.
const FALLBACK_DOMAINS: &[&str] = &[
    "espn.com",
    "nba.com",
    "nfl.com",
    "mlb.com",
    "nhl.com",
    "bleacherreport.com",
    "sports.yahoo.com",
    "si.com",
    "cbssports.com",
    "basketball-reference.com",
];

/// Gather up to [`MAX_EVIDENCE`] search results for a question.
///
/// Strategies run sequentially and short-circuit: once one yields a
/// satisfactory set, later strategies are not attempted. Provider failures
/// surface as empty result lists and never abort the loop. Exhausting every
/// strategy yields an empty set.
pub fn collect_evidence(provider: &dyn SearchProvider, question: &str) -> Vec<SearchResult> {
    let year = OffsetDateTime::now_utc().year();

    for query in query_strategies(question) {
        let results = provider.search(&query, RESULTS_PER_QUERY);
        if results.is_empty() {
            tracing::debug!(%query, "strategy yielded no results");
            continue;
        }

        // Precision path: trusted-tier results only, best sources first.
        // The sort is stable, so provider order survives among equal tiers.
        let mut prioritized: Vec<SearchResult> = results
            .iter()
            .map(|r| SearchResult {
                priority: Some(source_priority(&r.url)),
                ..r.clone()
            })
            .filter(|r| r.priority.unwrap_or(0) > 0)
            .collect();
        prioritized.sort_by(|a, b| b.priority.cmp(&a.priority));

        if !prioritized.is_empty() {
            prioritized.truncate(MAX_EVIDENCE);
            return prioritized;
        }

        // Recall fallback: keep raw results from known sports domains or
        // with a fresh-looking snippet, in provider order.
        let mut loose: Vec<SearchResult> = results
            .into_iter()
            .filter(|r| {
                let url = r.url.to_lowercase();
                FALLBACK_DOMAINS.iter().any(|d| url.contains(d)) || is_fresh(&r.snippet, year)
            })
            .collect();

        if loose.len() >= MIN_FALLBACK_RESULTS {
            loose.truncate(MAX_EVIDENCE);
            return loose;
        }
    }

    Vec::new()
}

/// Snippet mentions the current season window or a freshness keyword.
fn is_fresh(snippet: &str, year: i32) -> bool {
    let snippet = snippet.to_lowercase();
    snippet.contains(&(year - 1).to_string())
        || snippet.contains(&year.to_string())
        || snippet.contains("latest")
        || snippet.contains("current")
}
