use gloo_net::http::Request;
use mingle_api_types::User;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

use crate::error::{AppError, AppResult};

/// The dev API server from the project README.
const API_BASE: &str = "http://localhost:4000";

pub(crate) async fn get_users(abort: Option<&AbortSignal>) -> AppResult<Vec<User>> {
    fetch_api("/users", abort).await
}

/// The endpoint answers `null` when nobody is signed in.
pub(crate) async fn get_current_user(abort: Option<&AbortSignal>) -> AppResult<Option<User>> {
    fetch_api("/current-user", abort).await
}

async fn fetch_api<T>(path: &str, abort: Option<&AbortSignal>) -> AppResult<T>
where
    T: DeserializeOwned,
{
    let json = Request::get(&format!("{API_BASE}{path}"))
        .abort_signal(abort)
        .send()
        .await?
        .text()
        .await?;
    serde_json::from_str(&json).map_err(|e| AppError::Json(e.to_string()))
}
