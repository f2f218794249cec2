#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("error getting {endpoint}: {status}")]
    Request { endpoint: String, status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StatsError {
    /// HTTP status code carried by a [`StatsError::Request`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            StatsError::Request { status, .. } => Some(*status),
            StatsError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
