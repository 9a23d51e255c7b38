#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A remote source failed; the message is shown to users as-is.
    #[error("{0}")]
    Upstream(String),
}
