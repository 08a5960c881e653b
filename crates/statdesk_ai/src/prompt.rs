//! Prompt assembly for the completion service.

use statdesk_core::domain::SearchResult;

/// Sentinel injected when evidence collection came back empty.
pub const NO_EVIDENCE_SENTINEL: &str = "No recent web search results available.";

/// System instruction sent with every completion request.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful sports statistics expert with access to current web search results. Always prioritize current search results over training data for recent events. Provide accurate citations from the search results.";

/// Render evidence as a numbered block for prompt injection, in the
/// evidence set's existing order.
pub fn format_evidence(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_EVIDENCE_SENTINEL.to_string();
    }

    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "[{}] {}\nURL: {}\nSummary: {}\n",
                i + 1,
                r.title,
                r.url,
                r.snippet
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn answer_prompt(question: &str, evidence_context: &str) -> String {
    // The ANSWER/SOURCES reply format is a contract with the parser: keep
    // the labels and the bulleted, URL-bearing source lines as-is.
    format!(
        r#"You are a sports statistics expert with access to current web search results. Answer the following question using the most accurate and up-to-date information available.

CURRENT WEB SEARCH RESULTS (ranked by source reliability):
{evidence_context}

Instructions:
1. PRIORITIZE information from official sources like NBA.com, Basketball-Reference.com, ESPN.com
2. Use the search results above for the most current statistics
3. If search results conflict with your training data, prioritize the search results for recent events
4. Always cite your sources using the exact URLs from the search results
5. Include multiple reliable sources when available to increase credibility
6. If no relevant search results are available, use your training data but clearly note the information may not be current

Format your response as:
ANSWER: [Your detailed answer here, incorporating information from the search results when available]

SOURCES:
- [Brief description] [EXACT_URL_HERE]
- [Brief description] [EXACT_URL_HERE]
- [Brief description] [EXACT_URL_HERE]

IMPORTANT: Keep URLs clean and separate from descriptions. Do NOT add parentheses or extra text to URLs.

Question: {question}"#
    )
}
