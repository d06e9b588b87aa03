//! Bridge to the identity provider's browser SDK.
//!
//! Tokens are fetched for every mutating call and never cached here; the SDK
//! refreshes them on its own schedule.

use crate::error::ApiError;
use async_trait::async_trait;
use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Function, Promise, Reflect};
use leptos::logging::{error, log};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[async_trait(?Send)]
pub trait TokenProvider {
    /// Returns a bearer token minted from the named template.
    async fn token(&self, template: &str) -> Result<String, ApiError>;
}

#[derive(Serialize)]
struct TokenOptions<'a> {
    template: &'a str,
}

/// Reads tokens from `window.Clerk.session.getToken(...)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClerkTokenProvider;

#[async_trait(?Send)]
impl TokenProvider for ClerkTokenProvider {
    async fn token(&self, template: &str) -> Result<String, ApiError> {
        let session = clerk_session()?;
        let get_token: Function = property(&session, "getToken")?
            .dyn_into()
            .map_err(|_| ApiError::Auth("session.getToken is not a function".into()))?;

        let options = JsValue::from_serde(&TokenOptions { template })
            .map_err(|e| ApiError::Auth(e.to_string()))?;
        let promise: Promise = get_token
            .call1(&session, &options)
            .map_err(|e| js_error("getToken threw", &e))?
            .dyn_into()
            .map_err(|_| ApiError::Auth("getToken did not return a promise".into()))?;

        let value = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("getToken rejected", &e))?;

        match value.as_string() {
            Some(token) if !token.is_empty() => {
                log!("[AUTH] Obtained token for template '{}'", template);
                Ok(token)
            }
            _ => Err(ApiError::Auth("no active session".into())),
        }
    }
}

fn clerk_session() -> Result<JsValue, ApiError> {
    let clerk = property(&js_sys::global(), "Clerk")?;
    let session = property(&clerk, "session")?;
    if session.is_null() || session.is_undefined() {
        return Err(ApiError::Auth("no active session".into()));
    }
    Ok(session)
}

fn property(target: &JsValue, key: &str) -> Result<JsValue, ApiError> {
    if target.is_null() || target.is_undefined() {
        return Err(ApiError::Auth(format!("identity provider not loaded ({key})")));
    }
    Reflect::get(target, &JsValue::from_str(key)).map_err(|e| js_error(key, &e))
}

fn js_error(context: &str, value: &JsValue) -> ApiError {
    let detail = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    error!("[AUTH] {}: {}", context, detail);
    ApiError::Auth(format!("{context}: {detail}"))
}
