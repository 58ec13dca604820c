use thiserror::Error;

#[derive(Error, Debug)]
pub enum YomikataError {
    #[error("{message} while parsing 「{preview}」")]
    SegmentationFailed { message: String, preview: String },

    #[error("malformed {service} response: {detail}")]
    MalformedResponse { service: &'static str, detail: String },

    #[error("rating submission rejected for card {card_id}: {reason}")]
    SubmissionFailed { card_id: u64, reason: String },

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("YomikataError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for YomikataError {
    fn from(error: std::io::Error) -> Self {
        YomikataError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for YomikataError {
    fn from(error: reqwest::Error) -> Self {
        YomikataError::Reqwest(Box::new(error))
    }
}

impl YomikataError {
    pub fn malformed(service: &'static str, detail: impl Into<String>) -> Self {
        YomikataError::MalformedResponse { service, detail: detail.into() }
    }
}
