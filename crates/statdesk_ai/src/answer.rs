//! End-to-end question answering: collect evidence, prompt the model,
//! parse the reply.

use statdesk_core::domain::StatsAnswer;
use statdesk_core::error::AppError;

use crate::collect::collect_evidence;
use crate::llm::CompletionClient;
use crate::parse::parse_reply;
use crate::prompt::{answer_prompt, format_evidence, SYSTEM_INSTRUCTION};
use crate::search::SearchProvider;

/// Answer a sports-statistics question.
///
/// A missing provider degrades to answering without evidence; a completion
/// failure is fatal for the request.
pub fn answer_question(
    provider: Option<&dyn SearchProvider>,
    llm: &dyn CompletionClient,
    question: &str,
) -> Result<StatsAnswer, AppError> {
    if question.trim().is_empty() {
        return Err(AppError::new(
            "ANSWER_QUESTION_REQUIRED",
            "Question must not be empty",
        ));
    }

    let evidence = match provider {
        Some(p) => collect_evidence(p, question),
        None => {
            tracing::debug!("no search provider configured; answering without evidence");
            Vec::new()
        }
    };

    let context = format_evidence(&evidence);
    let prompt = answer_prompt(question, &context);
    let reply = llm.complete(SYSTEM_INSTRUCTION, &prompt)?;

    Ok(parse_reply(&reply, &evidence))
}
