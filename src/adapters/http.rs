use crate::utils::error::{InvoiceError, Result};
use serde::de::DeserializeOwned;

/// Decode a JSON response, mapping non-2xx statuses to a service error.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    service: &'static str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!("Failed to parse {} response: {} (body: {})", service, e, text);
            InvoiceError::SerializationError(e)
        })
    } else {
        Err(InvoiceError::ServiceError {
            service,
            status: status.as_u16(),
            message: text,
        })
    }
}

/// Like [`handle_response`] for endpoints whose body we do not inspect.
pub(crate) async fn ensure_success(service: &'static str, response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(InvoiceError::ServiceError {
            service,
            status: status.as_u16(),
            message,
        })
    }
}

/// Collect a binary response body, mapping non-2xx statuses to a service error.
pub(crate) async fn handle_bytes(service: &'static str, response: reqwest::Response) -> Result<Vec<u8>> {
    let status = response.status();
    if status.is_success() {
        Ok(response.bytes().await?.to_vec())
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(InvoiceError::ServiceError {
            service,
            status: status.as_u16(),
            message,
        })
    }
}
