/// relnotes - rewrites raw changelogs into user-facing release notes with ChatGPT.
///
/// A release-automation helper: the changelog text and API credential arrive
/// via the environment, one chat-completion request produces the rewrite, and
/// the result lands on stdout. If the remote call fails for any reason the
/// original changelog is printed instead, so the release pipeline never
/// blocks on the model.
///
/// # Example
///
/// ```no_run
/// use relnotes::ai::LlmClient;
/// use relnotes::config::AppConfig;
/// use relnotes::summarize::summarize;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     relnotes::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client = LlmClient::new(
///         config.openai_api_key.clone(),
///         config.openai_org_id.clone(),
///         config.openai_model.clone(),
///     );
///
///     let summary = summarize(&client, &config.release_notes).await;
///     println!("{summary}");
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod config;
pub mod errors;
pub mod prompt;
pub mod summarize;

/// Configure structured logging on stderr.
///
/// Stdout is reserved for the summary itself, so all diagnostics (including
/// the single error line emitted when the remote call fails) go to stderr.
/// Stderr is part of the tool's interface: a successful run writes nothing
/// to it and a degraded run writes exactly one diagnostic line, so the
/// default filter admits errors only. `RUST_LOG` overrides it for debugging.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
