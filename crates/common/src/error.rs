use thiserror::Error;

/// Common error types used across the application.
///
/// Non-200 push responses are deliberately NOT represented here: the
/// dispatcher reports them as `DispatchResult::Failed` data so a delivery
/// rejection never aborts a scheduled run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
