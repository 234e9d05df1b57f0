use relnotes::errors::SummarizeError;
use std::error::Error;

#[test]
fn test_summarize_error_implements_error_trait() {
    // Verify SummarizeError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizeError::OpenAIError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_summarize_error_display() {
    // Verify Display implementation works correctly
    let error = SummarizeError::OpenAIError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: Model unavailable"
    );

    let error = SummarizeError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );
}

#[test]
fn test_summarize_error_from_reqwest() {
    // Build a reqwest::Error without doing any network I/O
    let err = reqwest::Client::new().get("not a url").build().unwrap_err();
    let summarize_err: SummarizeError = err.into();

    match summarize_err {
        SummarizeError::HttpError(msg) => assert!(!msg.is_empty()),
        _ => panic!("Unexpected error type"),
    }
}
