use serde::Deserialize;
use statdesk_core::domain::SearchResult;

use super::SearchProvider;

const SERPAPI_ENDPOINT: &str = "https://serpapi.com/search";

/// SerpAPI backend (Google organic results).
#[derive(Debug, Clone)]
pub struct SerpApiSearch {
    api_key: String,
}

impl SerpApiSearch {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
        }
    }

    fn fetch(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>, String> {
        let resp = ureq::get(SERPAPI_ENDPOINT)
            .query("q", query)
            .query("api_key", &self.api_key)
            .query("engine", "google")
            .query("num", &limit.to_string())
            .timeout(std::time::Duration::from_secs(10))
            .call();

        match resp {
            Ok(r) if r.status() == 200 => {
                let v: SerpApiResponse = r.into_json().map_err(|e| e.to_string())?;
                Ok(v.organic_results
                    .into_iter()
                    .map(|r| SearchResult {
                        title: r.title,
                        url: r.link,
                        snippet: r.snippet,
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
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SerpApiResult>,
}

#[derive(Debug, Deserialize)]
struct SerpApiResult {
    title: String,
    link: String,
    #[serde(default)]
    snippet: String,
}

impl SearchProvider for SerpApiSearch {
    fn search(&self, query: &str, limit: u32) -> Vec<SearchResult> {
        match self.fetch(query, limit) {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(provider = "serpapi", %err, "search request failed");
                Vec::new()
            }
        }
    }

    fn label(&self) -> &'static str {
        "SerpAPI (Google Search)"
    }
}
