use thiserror::Error;

/// Errors the initial load can hit. The loader logs and swallows them;
/// nothing user-visible is derived from them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("request failed: {0}")]
    Fetch(#[from] gloo_net::Error),
    #[error("unexpected payload: {0}")]
    Json(String),
}

pub(crate) type AppResult<T> = Result<T, AppError>;
