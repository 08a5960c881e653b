use serde::{Deserialize, Serialize};

/// One web search hit as returned by a search provider.
///
/// Notes:
/// - `content` is only populated by providers that return full page text.
/// - `priority` stays `None` on raw results and is set once the result
///   passes the source-reliability filter; fallback-filtered results keep
///   it unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

/// A (title, url) pair presented to the caller as a claimed source for the
/// answer. Either extracted from model output or synthesized from evidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    pub title: String,
    pub url: String,
}

/// Terminal artifact of the answer pipeline.
///
/// `search_results` is present only when evidence collection produced a
/// non-empty set for this request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsAnswer {
    pub answer: String,
    pub sources: Vec<Citation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_results: Option<Vec<SearchResult>>,
}
