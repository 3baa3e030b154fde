use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Failure anywhere on the engine call path.
///
/// Never reaches an HTTP caller: the inference handler turns every variant
/// into the fallback response.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("engine unavailable: {0}")]
    Unavailable(String),

    #[error("engine returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed engine output: {0}")]
    MalformedOutput(String),

    #[error("engine returned no scores")]
    EmptyScores,

    #[error("invalid score {score} for label '{label}'")]
    InvalidScore { label: String, score: f64 },
}

impl InferenceError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedOutput(msg.into())
    }
}
