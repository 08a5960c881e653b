use serde::Deserialize;
use statdesk_core::domain::SearchResult;

use super::SearchProvider;

const BRAVE_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

/// Brave Search API backend.
#[derive(Debug, Clone)]
pub struct BraveSearch {
    api_key: String,
}

impl BraveSearch {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
        }
    }

    fn fetch(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>, String> {
        let resp = ureq::get(BRAVE_ENDPOINT)
            .query("q", query)
            .query("count", &limit.to_string())
            .set("X-Subscription-Token", &self.api_key)
            .set("Accept", "application/json")
            .timeout(std::time::Duration::from_secs(10))
            .call();

        match resp {
            Ok(r) if r.status() == 200 => {
                let v: BraveResponse = r.into_json().map_err(|e| e.to_string())?;
                let results = v.web.map(|w| w.results).unwrap_or_default();
                Ok(results
                    .into_iter()
                    .map(|r| SearchResult {
                        title: r.title,
                        url: r.url,
                        snippet: r.description,
                        content: None,
                        priority: None,
                    })
                    .collect())
            }
            Ok(r) => Err(format!("status={}", r.status())),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BraveResponse {
    #[serde(default)]
    web: Option<BraveWeb>,
}

#[derive(Debug, Deserialize)]
struct BraveWeb {
    #[serde(default)]
    results: Vec<BraveResult>,
}

#[derive(Debug, Deserialize)]
struct BraveResult {
    title: String,
    url: String,
    #[serde(default)]
    description: String,
}

impl SearchProvider for BraveSearch {
    fn search(&self, query: &str, limit: u32) -> Vec<SearchResult> {
        match self.fetch(query, limit) {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(provider = "brave", %err, "search request failed");
                Vec::new()
            }
        }
    }

    fn label(&self) -> &'static str {
        "Brave Search"
    }
}
