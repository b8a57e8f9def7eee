//! REST client for the hosted Supabase backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` against the auth and
//! rest endpoints. Native builds: stubs returning errors, since the hosted
//! service is only reachable from the browser.
//!
//! The access token is persisted in `localStorage` so a page reload restores
//! the session without a new login, matching the hosted SDK's behavior. The
//! client also keeps the listener registry behind the session-change
//! subscription: every auth operation it performs that changes the session
//! notifies all registered listeners.

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::backend::types::{BackendError, Session, SignupOutcome};
use crate::backend::{AuthBackend, Subscription};
use crate::config::BackendConfig;

#[cfg(feature = "csr")]
const TOKEN_STORAGE_KEY: &str = "agenda_studio_access_token";

type SessionListener = Arc<dyn Fn(Option<Session>) + Send + Sync>;
type ListenerRegistry = Arc<Mutex<Vec<(u64, SessionListener)>>>;

/// Client for the hosted service. Cheap to clone; clones share the listener
/// registry.
#[derive(Clone)]
pub struct SupabaseClient {
    config: BackendConfig,
    listeners: ListenerRegistry,
    next_listener_id: Arc<AtomicU64>,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_listener_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Notify every registered listener of a session change.
    ///
    /// Listeners are snapshotted before the calls so a listener that
    /// subscribes or unsubscribes while running cannot deadlock the registry.
    #[cfg(feature = "csr")]
    fn notify(&self, session: Option<Session>) {
        let snapshot: Vec<SessionListener> = match self.listeners.lock() {
            Ok(listeners) => listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => Vec::new(),
        };
        for listener in snapshot {
            listener(session.clone());
        }
    }
}

impl AuthBackend for SupabaseClient {
    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        #[cfg(feature = "csr")]
        {
            let Some(token) = read_stored_token() else {
                return Ok(None);
            };

            let url = format!("{}/auth/v1/user", self.config.url);
            let resp = gloo_net::http::Request::get(&url)
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;

            // An expired or revoked token is a missing session, not an error.
            if resp.status() == 401 || resp.status() == 403 {
                store_token(None);
                return Ok(None);
            }
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(BackendError::Service(extract_service_message(&body, status)));
            }

            let user: WireUser = resp
                .json()
                .await
                .map_err(|e| BackendError::Malformed(e.to_string()))?;
            Ok(Some(user.into_session()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        #[cfg(feature = "csr")]
        {
            let url = format!("{}/auth/v1/token?grant_type=password", self.config.url);
            let resp = gloo_net::http::Request::post(&url)
                .header("apikey", &self.config.anon_key)
                .json(&serde_json::json!({ "email": email, "password": password }))
                .map_err(|e| BackendError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;

            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(BackendError::Service(extract_service_message(&body, status)));
            }

            #[derive(serde::Deserialize)]
            struct TokenResponse {
                access_token: String,
                user: WireUser,
            }
            let body: TokenResponse = resp
                .json()
                .await
                .map_err(|e| BackendError::Malformed(e.to_string()))?;

            store_token(Some(&body.access_token));
            let session = body.user.into_session();
            self.notify(Some(session.clone()));
            Ok(session)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(stub_unavailable())
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: &str,
    ) -> Result<SignupOutcome, BackendError> {
        #[cfg(feature = "csr")]
        {
            let redirect = String::from(js_sys::encode_uri_component(redirect_to));
            let url = format!("{}/auth/v1/signup?redirect_to={redirect}", self.config.url);
            let resp = gloo_net::http::Request::post(&url)
                .header("apikey", &self.config.anon_key)
                .json(&serde_json::json!({ "email": email, "password": password }))
                .map_err(|e| BackendError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;

            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(BackendError::Service(extract_service_message(&body, status)));
            }

            // With confirmation disabled the service answers with a full
            // token payload; otherwise only the pending user record comes
            // back and the session arrives after the email link is clicked.
            let body: serde_json::Value = resp
                .json()
                .await
                .map_err(|e| BackendError::Malformed(e.to_string()))?;

            let token = body.get("access_token").and_then(|v| v.as_str());
            let user = body
                .get("user")
                .cloned()
                .or_else(|| body.get("id").map(|_| body.clone()));
            if let (Some(token), Some(user)) = (token, user) {
                let user: WireUser = serde_json::from_value(user)
                    .map_err(|e| BackendError::Malformed(e.to_string()))?;
                store_token(Some(token));
                let session = user.into_session();
                self.notify(Some(session.clone()));
                return Ok(SignupOutcome::Confirmed(session));
            }
            Ok(SignupOutcome::PendingConfirmation)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password, redirect_to);
            Err(stub_unavailable())
        }
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        #[cfg(feature = "csr")]
        {
            let Some(token) = read_stored_token() else {
                // Nothing stored; still announce the (absent) session so the
                // UI settles on logged-out.
                self.notify(None);
                return Ok(());
            };

            let url = format!("{}/auth/v1/logout", self.config.url);
            let resp = gloo_net::http::Request::post(&url)
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;

            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(BackendError::Service(extract_service_message(&body, status)));
            }

            store_token(None);
            self.notify(None);
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(stub_unavailable())
        }
    }

    fn subscribe(
        &self,
        listener: impl Fn(Option<Session>) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, Arc::new(listener)));
        }

        let registry = Arc::clone(&self.listeners);
        Subscription::new(move || {
            if let Ok(mut listeners) = registry.lock() {
                listeners.retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    async fn count_rows(&self, collection: &str) -> Result<u64, BackendError> {
        #[cfg(feature = "csr")]
        {
            let url = format!(
                "{}/rest/v1/{collection}?select=id&limit=1",
                self.config.url
            );
            let resp = gloo_net::http::Request::get(&url)
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {}", self.config.anon_key))
                .header("Prefer", "count=exact")
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;

            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(BackendError::Service(extract_service_message(&body, status)));
            }

            let range = resp.headers().get("content-range").unwrap_or_default();
            parse_content_range(&range).ok_or_else(|| {
                leptos::logging::warn!("unparseable content-range for {collection}: {range:?}");
                BackendError::Malformed(format!("missing row count for {collection}"))
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = collection;
            Err(stub_unavailable())
        }
    }
}

/// User record as the auth endpoints return it.
#[cfg(feature = "csr")]
#[derive(serde::Deserialize)]
struct WireUser {
    id: String,
    email: Option<String>,
}

#[cfg(feature = "csr")]
impl WireUser {
    fn into_session(self) -> Session {
        Session {
            user_id: self.id,
            email: self.email.unwrap_or_default(),
        }
    }
}

#[cfg(not(feature = "csr"))]
fn stub_unavailable() -> BackendError {
    BackendError::Network("backend not reachable outside the browser".to_owned())
}

/// Pull the human-readable message out of a service error body.
///
/// The auth endpoints use a handful of different field names depending on
/// the failure; fall back to the HTTP status when none of them is present.
fn extract_service_message(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(ToOwned::to_owned))
        })
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

/// Total row count from a `Content-Range` header value such as `0-0/57`.
fn parse_content_range(value: &str) -> Option<u64> {
    let (_, total) = value.split_once('/')?;
    if total == "*" {
        return None;
    }
    total.trim().parse().ok()
}

#[cfg(feature = "csr")]
fn read_stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?
}

#[cfg(feature = "csr")]
fn store_token(token: Option<&str>) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = match token {
            Some(token) => storage.set_item(TOKEN_STORAGE_KEY, token),
            None => storage.remove_item(TOKEN_STORAGE_KEY),
        };
    }
}
