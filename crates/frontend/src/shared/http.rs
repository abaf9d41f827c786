//! Thin wrappers over `gloo_net` used by every entity service.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// GET `url` and decode the JSON body into `T`. A non-success status or a
/// body that does not decode is an error, never a silently wrong value.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// DELETE `url`; only the status is checked, the body is ignored.
pub async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    Ok(())
}
