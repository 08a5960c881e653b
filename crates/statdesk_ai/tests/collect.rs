use std::cell::RefCell;
use std::collections::VecDeque;

use statdesk_ai::collect::collect_evidence;
use statdesk_ai::search::SearchProvider;
use statdesk_core::domain::SearchResult;
use statdesk_core::strategies::query_strategies;

/// Provider double that replays one scripted response per call and records
/// the queries it was asked.
struct ScriptedProvider {
    responses: RefCell<VecDeque<Vec<SearchResult>>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedProvider {
    fn new(responses: Vec<Vec<SearchResult>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SearchProvider for ScriptedProvider {
    fn search(&self, query: &str, _limit: u32) -> Vec<SearchResult> {
        self.calls.borrow_mut().push(query.to_string());
        self.responses.borrow_mut().pop_front().unwrap_or_default()
    }

    fn label(&self) -> &'static str {
        "scripted"
    }
}

fn result(url: &str, snippet: &str) -> SearchResult {
    SearchResult {
        title: format!("result for {url}"),
        url: url.to_string(),
        snippet: snippet.to_string(),
        content: None,
        priority: None,
    }
}

#[test]
fn precision_path_keeps_trusted_sources_sorted_by_priority() {
    let provider = ScriptedProvider::new(vec![vec![
        result("https://example.org/recap", "a recap"),
        result("https://www.espn.com/nba/story", "espn story"),
        result("https://www.reddit.com/r/nba/thread", "fan thread"),
        result("https://www.nba.com/stats", "official stats"),
    ]]);

    let evidence = collect_evidence(&provider, "points per game leaders");

    let priorities: Vec<i64> = evidence.iter().map(|r| r.priority.unwrap()).collect();
    assert_eq!(priorities, vec![100, 80, 20]);
    assert_eq!(evidence[0].url, "https://www.nba.com/stats");
    assert_eq!(evidence[1].url, "https://www.espn.com/nba/story");
    assert_eq!(evidence[2].url, "https://example.org/recap");
    // Early exit: later strategies never run.
    assert_eq!(provider.call_count(), 1);
}

#[test]
fn precision_path_preserves_provider_order_on_priority_ties() {
    let provider = ScriptedProvider::new(vec![vec![
        result("https://www.espn.com/nba/a", "first"),
        result("https://www.espn.com/nba/b", "second"),
        result("https://www.nba.com/stats", "official"),
    ]]);

    let evidence = collect_evidence(&provider, "assists leaders");

    assert_eq!(evidence[0].url, "https://www.nba.com/stats");
    assert_eq!(evidence[1].url, "https://www.espn.com/nba/a");
    assert_eq!(evidence[2].url, "https://www.espn.com/nba/b");
}

#[test]
fn evidence_is_capped_at_five() {
    let results: Vec<SearchResult> = (0..8)
        .map(|i| result(&format!("https://www.nba.com/page/{i}"), "stats"))
        .collect();
    let provider = ScriptedProvider::new(vec![results]);

    let evidence = collect_evidence(&provider, "rebounds leaders");
    assert_eq!(evidence.len(), 5);
}

#[test]
fn exhausted_strategies_yield_empty_set_with_one_call_each() {
    let question = "who won the scoring title";
    let provider = ScriptedProvider::new(vec![]);

    let evidence = collect_evidence(&provider, question);

    assert!(evidence.is_empty());
    assert_eq!(provider.call_count(), query_strategies(question).len());
}

#[test]
fn fallback_accepts_three_or_more_loose_matches_in_provider_order() {
    // All denylisted, so the precision path stays empty; snippets carry
    // freshness keywords, so the loose filter keeps them.
    let provider = ScriptedProvider::new(vec![vec![
        result("https://hoopsblog.example.com/a", "the latest numbers"),
        result("https://forum.example.net/b", "current standings"),
        result("https://www.reddit.com/r/nba/c", "latest thread"),
    ]]);

    let evidence = collect_evidence(&provider, "field goal percentage leaders");

    assert_eq!(evidence.len(), 3);
    assert_eq!(evidence[0].url, "https://hoopsblog.example.com/a");
    assert_eq!(evidence[1].url, "https://forum.example.net/b");
    assert_eq!(evidence[2].url, "https://www.reddit.com/r/nba/c");
    assert!(evidence.iter().all(|r| r.priority.is_none()));
    assert_eq!(provider.call_count(), 1);
}

#[test]
fn fallback_below_minimum_volume_moves_to_next_strategy() {
    let provider = ScriptedProvider::new(vec![
        vec![
            result("https://hoopsblog.example.com/a", "the latest numbers"),
            result("https://forum.example.net/b", "stale post"),
        ],
        vec![result("https://www.nba.com/stats", "official stats")],
    ]);

    let evidence = collect_evidence(&provider, "steals leaders");

    assert_eq!(provider.call_count(), 2);
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].priority, Some(100));
}

#[test]
fn denylisted_results_never_reach_the_precision_path() {
    let provider = ScriptedProvider::new(vec![
        vec![
            result("https://www.reddit.com/r/nba/a", "stale"),
            result("https://twitter.com/hoops/b", "stale"),
        ],
        vec![],
        vec![],
        vec![],
    ]);

    let evidence = collect_evidence(&provider, "blocks leaders");
    assert!(evidence.is_empty());
}
