//! HTTP transport for the REST backend.
//!
//! Every request carries the session cookie, a JSON body when there is one,
//! and an abort signal. The signal fires on timeout and, when the caller
//! supplied an [`AbortHandle`], when the caller aborts.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_net::http::{Method, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use hoodmap_core::ApiError;
use serde::{Serialize, de::DeserializeOwned};
use web_sys::{AbortController, AbortSignal, RequestCredentials};

use crate::config::{API_BASE, FETCH_TIMEOUT_MS};

// =============================================================================
// Abort Handle
// =============================================================================

/// Lets a view cancel the requests it started.
///
/// Dropping the handle does not abort; views call [`abort`](Self::abort)
/// when they close so a late response never reaches them.
#[derive(Clone)]
pub struct AbortHandle {
    controller: AbortController,
}

impl AbortHandle {
    pub fn new() -> Option<Self> {
        AbortController::new()
            .ok()
            .map(|controller| Self { controller })
    }

    pub fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    pub fn abort(&self) {
        self.controller.abort();
    }
}

// =============================================================================
// Client
// =============================================================================

/// REST client. Endpoint methods live in the sibling modules.
#[derive(Clone, Default)]
pub struct ApiClient {
    abort: Option<AbortSignal>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests made through the returned client are cancelled by `handle`.
    pub fn with_abort(handle: &AbortHandle) -> Self {
        Self {
            abort: Some(handle.signal()),
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, None).await?;
        decode(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::POST, path, Some(encode(body)?)).await?;
        decode(response).await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::PATCH, path, Some(encode(body)?)).await?;
        decode(response).await
    }

    /// POST without a body, decoding the response.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::POST, path, None).await?;
        decode(response).await
    }

    /// Request whose response body is ignored.
    pub(crate) async fn send(&self, method: Method, path: &str) -> Result<(), ApiError> {
        self.execute(method, path, None).await.map(|_| ())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Response, ApiError> {
        web_sys::window().ok_or(ApiError::NoWindow)?;

        let controller =
            AbortController::new().map_err(|_| ApiError::Network("abort unavailable".into()))?;

        // Forward the caller's abort into this request's controller.
        let _forward = self.abort.as_ref().map(|signal| {
            let inner = controller.clone();
            if signal.aborted() {
                inner.abort();
            }
            EventListener::once(signal, "abort", move |_| inner.abort())
        });

        let timed_out = Rc::new(Cell::new(false));
        let _timeout = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(FETCH_TIMEOUT_MS, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let url = format!("{API_BASE}{path}");
        let signal = controller.signal();
        let builder = RequestBuilder::new(&url)
            .method(method)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .header("Accept", "application/json");

        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(json),
            None => builder.build(),
        }
        .map_err(|e| transport_error(e, false))?;

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, timed_out.get()))?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &text));
        }
        Ok(response)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| transport_error(e, false))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn transport_error(err: gloo_net::Error, timed_out: bool) -> ApiError {
    if timed_out {
        return ApiError::Timeout;
    }
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
        gloo_net::Error::JsError(js) => ApiError::Network(js.message),
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        gloo_net::Error::GlooError(msg) => ApiError::Network(msg),
    }
}
