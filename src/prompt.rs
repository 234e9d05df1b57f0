//! Fixed prompt for rewriting raw changelogs into user-facing release notes.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

pub const SYSTEM_PROMPT: &str = "Take the following raw changelog and rewrite it into a friendly, \
    user-focused release note. Prioritize clarity over technical detail. Group related changes \
    under headings like New Features, Improvements, Fixes, and Behind the Scenes. Summarize \
    technical work in plain language or omit it if it's not directly relevant to the end user. \
    Assume the audience is someone who uses the bot, not someone maintaining it. Add emojis to \
    help visually break up sections. Use a casual, helpful tone, as if explaining to a server \
    admin or end user.";

pub const USER_PREFIX: &str = "Summarize the following release notes:\n\n";

/// Builds the two-message chat payload: the fixed system instruction plus a
/// user message carrying the raw changelog. The changelog may be empty.
pub fn build_prompt(changelog: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(format!("{USER_PREFIX}{changelog}")),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
