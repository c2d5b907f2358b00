use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermdeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("TermdeckError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for TermdeckError {
    fn from(error: std::io::Error) -> Self {
        TermdeckError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for TermdeckError {
    fn from(error: reqwest::Error) -> Self {
        TermdeckError::Reqwest(Box::new(error))
    }
}
