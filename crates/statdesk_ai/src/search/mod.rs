use statdesk_core::domain::SearchResult;
use statdesk_core::error::AppError;

/// A pluggable web-search backend.
///
/// Adapters swallow transport and status errors at this boundary and
/// return an empty list, so callers treat a failed call identically to a
/// call that found nothing.
pub trait SearchProvider {
    fn search(&self, query: &str, limit: u32) -> Vec<SearchResult>;

    /// Human-readable backend name for status surfaces.
    fn label(&self) -> &'static str;
}

pub mod brave;
pub mod serpapi;
pub mod tavily;

/// Select a search backend by configuration name.
pub fn create_provider(
    provider: &str,
    api_key: &str,
) -> Result<Box<dyn SearchProvider + Send + Sync>, AppError> {
    match provider.to_lowercase().as_str() {
        "brave" => Ok(Box::new(brave::BraveSearch::new(api_key))),
        "tavily" => Ok(Box::new(tavily::TavilySearch::new(api_key))),
        "serpapi" => Ok(Box::new(serpapi::SerpApiSearch::new(api_key))),
        other => Err(
            AppError::new("SEARCH_PROVIDER_UNSUPPORTED", "Unsupported search provider")
                .with_details(format!("provider={other}")),
        ),
    }
}
