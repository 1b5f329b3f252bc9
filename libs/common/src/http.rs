//! Authenticated HTTP fetcher
//!
//! Single entry point for every backend call. Attaches the bearer token,
//! maps HTTP and envelope error shapes onto [`ApiError`](crate::error::ApiError),
//! and owns the session-expiry flow: on 401 the token is cleared and a
//! redirect to the login route is scheduled after a fixed delay so the user
//! can read the message.
//!
//! Body encoding is a per-call choice ([`Payload`]): most endpoints take
//! JSON, a few legacy ones take form-urlencoded bodies, and image uploads
//! are single-field multipart. Retrying is off by default and only ever
//! applies to failures where no response was received.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::{ClientConfig, RetryConfig};
use crate::envelope::{Envelope, PageMeta};
use crate::error::{ApiError, ApiResult};
use crate::session::TokenStore;

/// Navigation sink for the session-expiry redirect
///
/// The host UI decides what "redirect" means (router push, location change);
/// the fetcher only decides when it happens.
pub trait Navigator: Send + Sync {
    fn redirect(&self, route: &str);
}

/// Request body, chosen per endpoint
#[derive(Debug, Clone)]
pub enum Payload {
    /// No body
    None,
    /// JSON body
    Json(serde_json::Value),
    /// Form-urlencoded body (kept for the legacy endpoints that require it)
    Form(Vec<(String, String)>),
    /// Single-field multipart upload
    Multipart(FilePart),
}

impl Payload {
    /// JSON payload from any serializable request body
    pub fn json<T: serde::Serialize>(body: &T) -> ApiResult<Self> {
        Ok(Payload::Json(
            serde_json::to_value(body).map_err(ApiError::Decode)?,
        ))
    }
}

/// A file destined for a single-field multipart upload
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Multipart field name (e.g. "profileImage")
    pub field: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Authenticated API client
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
    redirect_delay: Duration,
    retry: RetryConfig,
    redirect_pending: Arc<AtomicBool>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// `login_route` is the area-specific login route the user is sent to
    /// when the session expires ("/auth/login" for the admin area, "/login"
    /// elsewhere).
    pub fn new(
        config: &ClientConfig,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        login_route: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            tokens,
            navigator,
            login_route: login_route.into(),
            redirect_delay: Duration::from_millis(config.session_redirect_delay_ms),
            retry: config.retry(),
            redirect_pending: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Perform a request and decode the envelope `data` field
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> ApiResult<T> {
        let (status, body) = self.perform(method, path, &payload).await?;
        self.settle(interpret(status, &body))
    }

    /// Perform a request and also return the pagination meta, if present
    pub async fn request_with_meta<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> ApiResult<(T, Option<PageMeta>)> {
        let (status, body) = self.perform(method, path, &payload).await?;
        self.settle(interpret_with_meta(status, &body))
    }

    /// Perform a mutation where only the envelope message matters
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> ApiResult<Option<String>> {
        let (status, body) = self.perform(method, path, &payload).await?;
        self.settle(interpret_message(status, &body))
    }

    /// Dispatch a request, retrying network failures per the retry policy
    async fn perform(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
    ) -> ApiResult<(u16, String)> {
        let token = self.tokens.get().ok_or(ApiError::Unauthenticated)?;
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();

        let mut attempt: u32 = 0;
        loop {
            info!(%request_id, %method, path, attempt, "Dispatching API request");

            let mut builder = self.http.request(method.clone(), &url).bearer_auth(&token);
            builder = match payload {
                Payload::None => builder,
                Payload::Json(body) => builder.json(body),
                Payload::Form(fields) => builder.form(fields),
                Payload::Multipart(part) => builder.multipart(build_multipart(part)?),
            };

            match builder.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response.text().await.unwrap_or_default();
                    return Ok((status, body));
                }
                Err(e) if attempt < self.retry.max_retries => {
                    warn!(%request_id, attempt, "Network failure, retrying: {}", e);
                    tokio::time::sleep(Duration::from_millis(self.retry.backoff_ms)).await;
                    attempt += 1;
                }
                Err(e) => {
                    error!(%request_id, "Network failure: {}", e);
                    return Err(ApiError::Network(e));
                }
            }
        }
    }

    /// Run the session-expiry side effects before handing the result back
    fn settle<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(e) = &result
            && e.is_session_expired()
        {
            self.session_expired();
        }
        result
    }

    /// Clear the token and schedule a single delayed redirect to the login
    /// route. Further 401s while the redirect is pending are absorbed.
    fn session_expired(&self) {
        self.tokens.clear();

        if self.redirect_pending.swap(true, Ordering::SeqCst) {
            return;
        }

        let navigator = Arc::clone(&self.navigator);
        let pending = Arc::clone(&self.redirect_pending);
        let route = self.login_route.clone();
        let delay = self.redirect_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            info!(route = %route, "Session expired, redirecting to login");
            navigator.redirect(&route);
            pending.store(false, Ordering::SeqCst);
        });
    }
}

fn build_multipart(part: &FilePart) -> ApiResult<reqwest::multipart::Form> {
    let file = reqwest::multipart::Part::bytes(part.bytes.clone())
        .file_name(part.file_name.clone())
        .mime_str(&part.mime_type)
        .map_err(ApiError::Network)?;

    Ok(reqwest::multipart::Form::new().part(part.field.clone(), file))
}

/// Map a raw status + body onto the error taxonomy and decode `data`
fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    let envelope = check_status::<T>(status, body)?;
    envelope.data.ok_or(ApiError::Api {
        status,
        message: "Respons server tidak lengkap.".to_string(),
    })
}

/// Like [`interpret`], keeping the pagination meta
fn interpret_with_meta<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> ApiResult<(T, Option<PageMeta>)> {
    let envelope = check_status::<T>(status, body)?;
    let meta = envelope.meta;
    let data = envelope.data.ok_or(ApiError::Api {
        status,
        message: "Respons server tidak lengkap.".to_string(),
    })?;
    Ok((data, meta))
}

/// Like [`interpret`] for mutations that carry no payload of interest
fn interpret_message(status: u16, body: &str) -> ApiResult<Option<String>> {
    let envelope = check_status::<serde_json::Value>(status, body)?;
    Ok(envelope.message)
}

fn check_status<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<Envelope<T>> {
    if status == 401 {
        return Err(ApiError::SessionExpired);
    }

    if status == 404 {
        return Err(ApiError::NotFound(
            extract_message(body).unwrap_or_else(|| "Data tidak ditemukan.".to_string()),
        ));
    }

    // Field-level rejections the backend reports per input
    if status == 400 || status == 422 {
        return Err(ApiError::Validation(
            extract_message(body).unwrap_or_else(|| "Data yang dikirim tidak valid.".to_string()),
        ));
    }

    if !(200..300).contains(&status) {
        return Err(ApiError::Api {
            status,
            message: extract_message(body).unwrap_or_else(|| format!("HTTP error {}", status)),
        });
    }

    let envelope: Envelope<T> = serde_json::from_str(body).map_err(ApiError::Decode)?;
    if !envelope.success {
        return Err(ApiError::Api {
            status,
            message: envelope
                .message
                .unwrap_or_else(|| format!("HTTP error {}", status)),
        });
    }

    Ok(envelope)
}

/// Best-effort extraction of a `message` field from an error body
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}
