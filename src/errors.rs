use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::HttpError(error.to_string())
    }
}
