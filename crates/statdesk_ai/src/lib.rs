pub mod answer;
pub mod collect;
pub mod llm;
pub mod parse;
pub mod prompt;
pub mod search;

#[cfg(test)]
mod tests {
    use super::prompt::{format_evidence, NO_EVIDENCE_SENTINEL};
    use super::search::create_provider;

    #[test]
    fn provider_factory_matches_known_backends() {
        assert!(create_provider("brave", "key").is_ok());
        assert!(create_provider("Tavily", "key").is_ok());
        assert!(create_provider("SERPAPI", "key").is_ok());

        let err = create_provider("bing", "key").expect_err("should reject");
        assert_eq!(err.code, "SEARCH_PROVIDER_UNSUPPORTED");
    }

    #[test]
    fn empty_evidence_formats_to_sentinel() {
        assert_eq!(format_evidence(&[]), NO_EVIDENCE_SENTINEL);
    }

    #[test]
    fn evidence_blocks_are_numbered_in_order() {
        use statdesk_core::domain::SearchResult;

        let results: Vec<SearchResult> = ["https://www.nba.com/a", "https://www.espn.com/b"]
            .iter()
            .enumerate()
            .map(|(i, url)| SearchResult {
                title: format!("Title {}", i + 1),
                url: url.to_string(),
                snippet: format!("Snippet {}", i + 1),
                content: None,
                priority: None,
            })
            .collect();

        let block = format_evidence(&results);
        assert!(block.starts_with("[1] Title 1\nURL: https://www.nba.com/a\nSummary: Snippet 1\n"));
        assert!(block.contains("[2] Title 2\nURL: https://www.espn.com/b\nSummary: Snippet 2\n"));
    }
}
