//! Route dispatch and handlers. Handlers are transport-free and operate on
//! shared immutable state, so every connection thread can serve them.

use serde::{Deserialize, Serialize};
use statdesk_ai::answer::answer_question;
use statdesk_ai::llm::openai::OpenAiClient;
use statdesk_ai::search::{create_provider, SearchProvider};
use statdesk_core::domain::SearchResult;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::config::ServerConfig;
use crate::http::{HttpRequest, HttpResponse};

/// Raw-search passthrough result limit.
const RAW_SEARCH_LIMIT: u32 = 10;

pub struct AppState {
    provider: Option<Box<dyn SearchProvider + Send + Sync>>,
    llm: OpenAiClient,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        let provider = match &config.search_api_key {
            Some(key) => match create_provider(&config.search_provider, key) {
                Ok(p) => {
                    tracing::info!(provider = %config.search_provider, "search provider initialized");
                    Some(p)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to initialize search provider");
                    None
                }
            },
            None => {
                tracing::warn!("SEARCH_API_KEY not set; web search disabled");
                None
            }
        };

        if config.openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY not set; completion requests will fail");
        }
        let llm = OpenAiClient::new(config.openai_api_key.as_deref().unwrap_or(""));

        Self { provider, llm }
    }

    pub fn provider_label(&self) -> &'static str {
        self.provider.as_ref().map(|p| p.label()).unwrap_or("disabled")
    }
}

pub fn dispatch(state: &AppState, req: &HttpRequest) -> HttpResponse {
    match (req.method.as_str(), req.path.as_str()) {
        ("POST", "/api/chat") => chat(state, req),
        ("POST", "/api/search") => search(state, req),
        ("GET", "/health") => health(state),
        _ => HttpResponse::json(404, &ErrorBody::new("Not found")),
    }
}

#[derive(Debug, Deserialize)]
struct ChatRequestBody {
    #[serde(default)]
    question: String,
}

#[derive(Debug, Deserialize)]
struct SearchRequestBody {
    #[serde(default)]
    query: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Debug, Serialize)]
struct SearchResponseBody {
    query: String,
    results: Vec<SearchResult>,
    provider: String,
    count: usize,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: String,
    timestamp: String,
    search_service: String,
    provider: String,
}

fn chat(state: &AppState, req: &HttpRequest) -> HttpResponse {
    let question = match serde_json::from_slice::<ChatRequestBody>(&req.body) {
        Ok(body) if !body.question.trim().is_empty() => body.question,
        _ => return HttpResponse::json(400, &ErrorBody::new("Question is required")),
    };

    let provider = state.provider.as_deref().map(|p| p as &dyn SearchProvider);
    match answer_question(provider, &state.llm, &question) {
        Ok(answer) => HttpResponse::json(200, &answer),
        Err(e) => HttpResponse::json(
            500,
            &ErrorBody::new("Failed to get sports stats information")
                .with_details(e.details.clone().unwrap_or_else(|| e.to_string())),
        ),
    }
}

fn search(state: &AppState, req: &HttpRequest) -> HttpResponse {
    let query = match serde_json::from_slice::<SearchRequestBody>(&req.body) {
        Ok(body) if !body.query.trim().is_empty() => body.query,
        _ => return HttpResponse::json(400, &ErrorBody::new("Query is required")),
    };

    let Some(provider) = state.provider.as_ref() else {
        return HttpResponse::json(
            503,
            &ErrorBody::new("Search provider not configured")
                .with_details("Set SEARCH_API_KEY to enable web search"),
        );
    };

    let results = provider.search(&query, RAW_SEARCH_LIMIT);
    HttpResponse::json(
        200,
        &SearchResponseBody {
            query,
            count: results.len(),
            provider: provider.label().to_string(),
            results,
        },
    )
}

fn health(state: &AppState) -> HttpResponse {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    let search_service = match state.provider.as_ref() {
        Some(p) => format!("{} enabled", p.label()),
        None => "disabled".to_string(),
    };

    HttpResponse::json(
        200,
        &HealthBody {
            status: "OK".to_string(),
            timestamp,
            search_service,
            provider: state.provider_label().to_string(),
        },
    )
}
