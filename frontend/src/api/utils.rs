use gloo_net::http::{Request, Response};
use log::debug;
use serde::de::DeserializeOwned;
use shared::{Result, SharedError};

pub fn map_transport_error(err: gloo_net::Error) -> SharedError {
    match err {
        gloo_net::Error::SerdeError(e) => SharedError::Parse(e.to_string()),
        other => SharedError::Network(other.to_string()),
    }
}

/// Sends a GET and returns the raw response regardless of status.
pub async fn send_get(url: &str) -> Result<Response> {
    debug!("GET {}", url);
    Request::get(url).send().await.map_err(map_transport_error)
}

/// GET that treats any non-2xx status as an error before decoding the body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = send_get(url).await?;

    if !response.ok() {
        return Err(SharedError::HttpStatus(response.status()));
    }

    response.json::<T>().await.map_err(map_transport_error)
}

/// GET that decodes the body whatever the status, for endpoints that report
/// their own state in the JSON.
pub async fn get_json_any_status<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = send_get(url).await?;
    response.json::<T>().await.map_err(map_transport_error)
}

/// Appends `?key=value` with the value percent-encoded.
pub fn with_query(base: &str, key: &str, value: &str) -> String {
    format!("{}?{}={}", base, key, urlencoding::encode(value))
}
