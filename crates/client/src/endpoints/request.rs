//! Request execution and response handling.
//!
//! This module is the single place that sends a request, checks the HTTP
//! status, and decodes a JSON body. It never retries: a transport error or a
//! non-200 status is surfaced to the caller immediately.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};

/// How much of a failed response to keep in the resulting error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorDetail {
    StatusLine,
    StatusAndBody,
}

/// Send a request and require a `200 OK` answer.
///
/// Any other status becomes [`ClientError::ApiError`] carrying the status line.
///
/// # Errors
///
/// Returns `ClientError::HttpError` if the request could not be sent.
pub async fn send_request(
    builder: RequestBuilder,
    method: &str,
    endpoint: &str,
) -> Result<Response> {
    execute(builder, method, endpoint, ErrorDetail::StatusLine).await
}

/// Like [`send_request`], but a failed response's body is read and kept in
/// the error alongside the status code.
pub async fn send_request_with_error_body(
    builder: RequestBuilder,
    method: &str,
    endpoint: &str,
) -> Result<Response> {
    execute(builder, method, endpoint, ErrorDetail::StatusAndBody).await
}

async fn execute(
    builder: RequestBuilder,
    method: &str,
    endpoint: &str,
    detail: ErrorDetail,
) -> Result<Response> {
    debug!(method, endpoint, "Sending request");

    let response = builder.send().await?;
    let status = response.status();

    if status == StatusCode::OK {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = match detail {
        ErrorDetail::StatusLine => None,
        ErrorDetail::StatusAndBody => Some(
            response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response body".to_string()),
        ),
    };

    debug!(
        method,
        endpoint,
        status = status.as_u16(),
        "Request returned non-success status"
    );

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message: status.to_string(),
        body,
    })
}

/// Decode a fully buffered JSON body.
///
/// Unknown fields are ignored and missing fields take their default value,
/// as defined on each model.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(ClientError::InvalidResponse)
}
