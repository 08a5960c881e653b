//! Env-derived server configuration, read once at startup and passed into
//! constructors explicitly. The library crates never read process state.

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PROVIDER: &str = "serpapi";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub search_provider: String,
    pub search_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            search_provider: std::env::var("SEARCH_PROVIDER")
                .unwrap_or_else(|_| DEFAULT_PROVIDER.to_string()),
            search_api_key: std::env::var("SEARCH_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
        }
    }
}
