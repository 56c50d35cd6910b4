//! API utilities for frontend-backend communication
//!
//! Builds API URLs and performs the two kinds of calls the screens need:
//! collection reads (`GET /<resource>`) and entity writes (`POST /<resource>`).
//! Every request carries an abort signal armed with the configured timeout.

use crate::shared::config::app_config;
use contracts::shared::api_response::{ApiErrorBody, WriteAck};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use leptos::prelude::on_cleanup;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

/// Notification text for a failed write without a server-provided message
pub const GENERIC_WRITE_ERROR: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("GET /{resource} failed with HTTP {status}")]
    FetchFailed { resource: String, status: u16 },
    #[error("/{resource} rejected the request (HTTP {status}): {message}")]
    WriteRejected {
        resource: String,
        status: u16,
        message: String,
    },
    #[error("failed to decode /{resource} response: {detail}")]
    DecodeFailed { resource: String, detail: String },
    #[error("/{resource} did not respond within {timeout_ms} ms")]
    FetchTimedOut { resource: String, timeout_ms: u32 },
    #[error("request to /{resource} failed: {detail}")]
    Network { resource: String, detail: String },
    #[error("request to /{resource} was cancelled")]
    Cancelled { resource: String },
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled { .. })
    }

    /// Text shown to the user when a write fails
    pub fn write_notification_text(&self) -> String {
        match self {
            ApiError::WriteRejected { message, .. } => format!("Error: {}", message),
            _ => GENERIC_WRITE_ERROR.to_string(),
        }
    }
}

/// Cancellation flag shared by the requests of one screen
///
/// Results that settle after `cancel` are reported as `ApiError::Cancelled`
/// and must not be applied to any state.
#[derive(Debug, Clone, Default)]
pub struct FetchScope {
    cancelled: Arc<AtomicBool>,
}

impl FetchScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope cancelled when the current reactive owner is disposed
    pub fn for_component() -> Self {
        let scope = Self::new();
        let on_dispose = scope.clone();
        on_cleanup(move || on_dispose.cancel());
        scope
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Get the base URL for API requests
///
/// Uses the configured base URL when present, otherwise derives it from the
/// current window location and the configured port and path prefix.
pub fn api_base() -> String {
    let api = &app_config().api;
    if let Some(base) = &api.base_url {
        return base.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return api.path_prefix.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    api.compose_base(&protocol, &hostname)
}

/// Build a full API URL from a path such as "/fueltypes"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `GET /<resource>` returning a JSON array
pub async fn fetch_collection<T: DeserializeOwned>(
    resource: &str,
    scope: &FetchScope,
) -> Result<Vec<T>, ApiError> {
    let url = api_url(&format!("/{}", resource));
    let response = dispatch(resource, scope, |signal| {
        Request::get(&url)
            .header("Accept", "application/json")
            .abort_signal(signal)
            .build()
    })
    .await?;

    if !response.ok() {
        return Err(ApiError::FetchFailed {
            resource: resource.to_string(),
            status: response.status(),
        });
    }

    let body = response.text().await.map_err(|e| ApiError::DecodeFailed {
        resource: resource.to_string(),
        detail: e.to_string(),
    })?;
    if scope.is_cancelled() {
        return Err(ApiError::Cancelled {
            resource: resource.to_string(),
        });
    }
    decode_collection(resource, &body)
}

/// `POST /<resource>` with a JSON body
///
/// Writes are not tied to a screen scope: once sent, the outcome is always
/// reported.
pub async fn post_entity<B: Serialize>(resource: &str, body: &B) -> Result<WriteAck, ApiError> {
    let url = api_url(&format!("/{}", resource));
    let scope = FetchScope::new();
    let response = dispatch(resource, &scope, |signal| {
        Request::post(&url).abort_signal(signal).json(body)
    })
    .await?;

    let ok = response.ok();
    let status = response.status();
    let text = response.text().await.map_err(|e| ApiError::DecodeFailed {
        resource: resource.to_string(),
        detail: e.to_string(),
    })?;
    interpret_write_response(resource, ok, status, &text)
}

/// Decode a collection body
pub fn decode_collection<T: DeserializeOwned>(resource: &str, body: &str) -> Result<Vec<T>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DecodeFailed {
        resource: resource.to_string(),
        detail: e.to_string(),
    })
}

/// Map a write response onto an acknowledgement or error
pub fn interpret_write_response(
    resource: &str,
    ok: bool,
    status: u16,
    body: &str,
) -> Result<WriteAck, ApiError> {
    if ok {
        return serde_json::from_str::<WriteAck>(body).map_err(|e| ApiError::DecodeFailed {
            resource: resource.to_string(),
            detail: e.to_string(),
        });
    }

    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => Err(ApiError::WriteRejected {
            resource: resource.to_string(),
            status,
            message: err.error,
        }),
        Err(e) => Err(ApiError::DecodeFailed {
            resource: resource.to_string(),
            detail: format!("HTTP {}: {}", status, e),
        }),
    }
}

/// Send a request with the configured timeout
async fn dispatch<F>(resource: &str, scope: &FetchScope, build: F) -> Result<Response, ApiError>
where
    F: FnOnce(Option<&AbortSignal>) -> Result<Request, gloo_net::Error>,
{
    if scope.is_cancelled() {
        return Err(ApiError::Cancelled {
            resource: resource.to_string(),
        });
    }

    let timeout_ms = app_config().api.request_timeout_ms;
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(AbortController::signal);
    let request = build(signal.as_ref()).map_err(|e| ApiError::Network {
        resource: resource.to_string(),
        detail: e.to_string(),
    })?;

    let timed_out = Rc::new(Cell::new(false));
    let timer = controller.map(|controller| {
        let timed_out = timed_out.clone();
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    });

    let result = request.send().await;
    drop(timer);

    if scope.is_cancelled() {
        return Err(ApiError::Cancelled {
            resource: resource.to_string(),
        });
    }

    match result {
        Ok(response) => Ok(response),
        Err(_) if timed_out.get() => {
            log::warn!("/{} timed out after {} ms", resource, timeout_ms);
            Err(ApiError::FetchTimedOut {
                resource: resource.to_string(),
                timeout_ms,
            })
        }
        Err(e) => Err(ApiError::Network {
            resource: resource.to_string(),
            detail: e.to_string(),
        }),
    }
}
