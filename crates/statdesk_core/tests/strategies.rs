use pretty_assertions::assert_eq;

use statdesk_core::strategies::{query_strategies, strategies_for_year};

#[test]
fn entity_question_gets_entity_variant_first() {
    let queries = strategies_for_year("How many 3-pointers has Stephen Curry made?", 2026);
    assert_eq!(queries.len(), 5);
    assert!(queries[0].starts_with("\"Stephen Curry\""));
    assert!(queries[0].contains("site:nba.com"));
    assert!(queries[0].contains("site:basketball-reference.com"));
}

#[test]
fn entity_keywords_match_case_insensitively() {
    let queries = strategies_for_year("CURRY career stats", 2026);
    assert!(queries[0].starts_with("\"Stephen Curry\""));
}

#[test]
fn generic_question_starts_with_domain_restricted_variant() {
    let queries = strategies_for_year("Who led the league in rushing yards?", 2026);
    assert_eq!(queries.len(), 4);
    assert!(queries[0].contains("site:espn.com"));
    assert!(queries[0].contains("site:nfl.com"));
}

#[test]
fn recency_variant_covers_season_window() {
    let queries = strategies_for_year("points per game leaders", 2026);
    assert_eq!(
        queries[1],
        "points per game leaders official sports statistics 2025 2026"
    );
}

#[test]
fn order_ends_with_trusted_then_news_variants() {
    let queries = strategies_for_year("triple doubles this season", 2026);
    let n = queries.len();
    assert!(queries[n - 2].contains("basketball-reference.com OR espn.com OR nba.com"));
    assert_eq!(queries[n - 1], "triple doubles this season sports news latest");
}

#[test]
fn always_at_least_four_strategies() {
    assert!(query_strategies("anything at all").len() >= 4);
    assert!(query_strategies("").len() >= 4);
}
