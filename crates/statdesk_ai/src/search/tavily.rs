use serde::{Deserialize, Serialize};
use statdesk_core::domain::SearchResult;

use super::SearchProvider;

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";

/// Tavily Search API backend. The only backend that can return full page
/// text alongside the snippet.
#[derive(Debug, Clone)]
pub struct TavilySearch {
    api_key: String,
}

impl TavilySearch {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
        }
    }

    fn fetch(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>, String> {
        let req = TavilyRequest {
            api_key: &self.api_key,
            query,
            search_depth: "basic",
            include_answer: false,
            include_images: false,
            include_image_descriptions: false,
            max_results: limit,
        };

        let resp = ureq::post(TAVILY_ENDPOINT)
            .timeout(std::time::Duration::from_secs(10))
            .send_json(serde_json::to_value(req).map_err(|e| e.to_string())?);

        match resp {
            Ok(r) if r.status() == 200 => {
                let v: TavilyResponse = r.into_json().map_err(|e| e.to_string())?;
                Ok(v.results
                    .into_iter()
                    .map(|r| SearchResult {
                        title: r.title,
                        url: r.url,
                        snippet: r.content,
                        content: r.raw_content,
                        priority: None,
                    })
                    .collect())
            }
            Ok(r) => Err(format!("status={}", r.status())),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    include_answer: bool,
    include_images: bool,
    include_image_descriptions: bool,
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    title: String,
    url: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    raw_content: Option<String>,
}

impl SearchProvider for TavilySearch {
    fn search(&self, query: &str, limit: u32) -> Vec<SearchResult> {
        match self.fetch(query, limit) {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(provider = "tavily", %err, "search request failed");
                Vec::new()
            }
        }
    }

    fn label(&self) -> &'static str {
        "Tavily Search"
    }
}
