//! Best-effort recovery of structured (answer, sources) data from
//! free-form model output.
//!
//! Precedence is a contract: label detection, then line splitting, then
//! URL extraction, then fallback synthesis from evidence.

use statdesk_core::domain::{Citation, SearchResult, StatsAnswer};

const ANSWER_LABEL: &str = "ANSWER:";
const SOURCES_LABEL: &str = "SOURCES:";

/// How many citations to synthesize from evidence when the model output
/// carried none.
const SYNTHESIZED_SOURCES: usize = 3;

/// Parse a model reply into a structured answer. Never fails; a non-empty
/// `model_text` always yields a non-empty answer.
pub fn parse_reply(model_text: &str, evidence: &[SearchResult]) -> StatsAnswer {
    let answer_section = match model_text.find(ANSWER_LABEL) {
        Some(pos) => {
            let after = &model_text[pos + ANSWER_LABEL.len()..];
            match after.find(SOURCES_LABEL) {
                Some(end) => &after[..end],
                None => after,
            }
        }
        None => model_text,
    };
    let mut answer = answer_section.trim().to_string();
    if answer.is_empty() {
        answer = model_text.trim().to_string();
    }

    let mut sources: Vec<Citation> = Vec::new();
    if let Some(pos) = model_text.find(SOURCES_LABEL) {
        let section = &model_text[pos + SOURCES_LABEL.len()..];
        for line in section.lines() {
            let Some(entry) = line.trim().strip_prefix('-') else {
                continue;
            };
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            // Lines without a recoverable URL are dropped rather than
            // surfaced as malformed citations.
            if let Some((url, rest)) = split_embedded_url(entry) {
                let title = clean_title(&rest);
                let title = if title.is_empty() {
                    host_of(&url).unwrap_or_else(|| "Source".to_string())
                } else {
                    title
                };
                sources.push(Citation { title, url });
            }
        }
    }

    if sources.is_empty() && !evidence.is_empty() {
        sources = evidence
            .iter()
            .take(SYNTHESIZED_SOURCES)
            .map(|r| Citation {
                title: r.title.clone(),
                url: r.url.clone(),
            })
            .collect();
    }

    StatsAnswer {
        answer,
        sources,
        search_results: if evidence.is_empty() {
            None
        } else {
            Some(evidence.to_vec())
        },
    }
}

/// Find the first http(s) URL embedded in a line. The URL run ends at
/// whitespace or a parenthesis. Returns the URL and the line with the URL
/// removed.
fn split_embedded_url(line: &str) -> Option<(String, String)> {
    let start = match (line.find("http://"), line.find("https://")) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    let tail = &line[start..];
    let len = tail
        .find(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .unwrap_or(tail.len());

    let url = tail[..len].to_string();
    let mut rest = String::with_capacity(line.len() - len);
    rest.push_str(&line[..start]);
    rest.push_str(&line[start + len..]);
    Some((url, rest))
}

/// Strip the parentheses and dashes left over after removing the URL.
fn clean_title(rest: &str) -> String {
    rest.chars()
        .filter(|c| !matches!(c, '(' | ')' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Host component of an http(s) URL, e.g. "nba.com" for "https://nba.com/a".
fn host_of(url: &str) -> Option<String> {
    let after = url.split_once("//")?.1;
    let host = after.split('/').next().unwrap_or(after);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
