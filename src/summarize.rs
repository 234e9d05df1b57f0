//! Summarization with graceful degradation.

use tracing::error;

use crate::ai::CompletionApi;
use crate::prompt::build_prompt;

/// Rewrites a raw changelog into a user-facing summary via the completion
/// service. Total over its inputs: any remote failure is reported as a single
/// diagnostic line and absorbed by returning the changelog unchanged.
pub async fn summarize<C: CompletionApi>(api: &C, changelog: &str) -> String {
    match api.complete(build_prompt(changelog)).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Error summarizing release notes: {e}");
            changelog.to_string()
        }
    }
}
