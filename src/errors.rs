use thiserror::Error;

/// Error type that captures store load/save failures. The recurrence engine
/// itself raises no errors; malformed schedules degrade to producing
/// nothing.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
