use gloo_net::http::Request;
use thiserror::Error;
use travel_memory_lib::experience::{Experience, UNDEFINED_SEGMENT};

use crate::config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("experience not found")]
    NotFound,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(gloo_net::Error),
}

fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(ApiError::NotFound),
        other => Err(ApiError::Status(other)),
    }
}

pub async fn make_request<ReturnType>(path: &str) -> Result<ReturnType, ApiError>
where
    ReturnType: serde::de::DeserializeOwned,
{
    let response = Request::get(&config::api_url(path)).send().await?;
    check_status(response.status())?;
    response.json::<ReturnType>().await.map_err(ApiError::Decode)
}

pub async fn get_experiences() -> Result<Vec<Experience>, ApiError> {
    make_request("/trip").await
}

pub async fn get_experience(id: &str) -> Result<Experience, ApiError> {
    // Cards without an id link here; there is nothing to ask the backend for
    if id.is_empty() || id == UNDEFINED_SEGMENT {
        return Err(ApiError::NotFound);
    }

    make_request(&format!("/trip/{id}")).await
}
