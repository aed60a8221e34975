//! REST API Bindings
//!
//! Frontend bindings to the backend REST API, organized by domain.
//! Shared plumbing lives here: base-URL resolution, bearer auth, the
//! error taxonomy, and the 401-clears-session rule.

mod auth;
mod leads;
mod costings;
mod quotations;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::session::SessionContext;

// Re-export all public items
pub use auth::*;
pub use leads::*;
pub use costings::*;
pub use quotations::*;

/// Errors surfaced by the API layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Backend rejected the request; carries the `detail` message verbatim
    #[error("{0}")]
    Validation(String),
    /// 401 from any endpoint; the session has already been cleared
    #[error("not authenticated")]
    Unauthorized,
    /// Transport or decode failure
    #[error("network error: {0}")]
    Network(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Build a full endpoint URL. Deployed builds override the base at compile
/// time via `VALOS_API_URL`.
fn api_url(path: &str) -> String {
    let base = option_env!("VALOS_API_URL").unwrap_or(DEFAULT_API_BASE);
    format!("{}/api{}", base.trim_end_matches('/'), path)
}

/// Error payload shape used by the backend
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

fn authorize(builder: RequestBuilder, session: SessionContext) -> RequestBuilder {
    match session.token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Map an error response to the taxonomy. A 401 clears the session, which
/// reactively swaps the app to the login view.
async fn check(session: SessionContext, response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        web_sys::console::warn_1(&"[API] 401 response, clearing session".into());
        session.clear();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| format!("request failed with status {}", response.status()));
        return Err(ApiError::Validation(detail));
    }
    Ok(response)
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    session: SessionContext,
    path: &str,
    query: &[(&'static str, String)],
) -> Result<T, ApiError> {
    let builder = Request::get(&api_url(path)).query(query.iter().map(|(k, v)| (*k, v.as_str())));
    let response = authorize(builder, session).send().await?;
    let response = check(session, response).await?;
    Ok(response.json::<T>().await?)
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    session: SessionContext,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorize(Request::post(&api_url(path)), session).json(body)?;
    let response = request.send().await?;
    let response = check(session, response).await?;
    Ok(response.json::<T>().await?)
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    session: SessionContext,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorize(Request::put(&api_url(path)), session).json(body)?;
    let response = request.send().await?;
    let response = check(session, response).await?;
    Ok(response.json::<T>().await?)
}

pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
    session: SessionContext,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorize(Request::patch(&api_url(path)), session).json(body)?;
    let response = request.send().await?;
    let response = check(session, response).await?;
    Ok(response.json::<T>().await?)
}

/// POST with no request body, discarding any response body
pub(crate) async fn post_no_content(session: SessionContext, path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::post(&api_url(path)), session).send().await?;
    check(session, response).await?;
    Ok(())
}

pub(crate) async fn delete(session: SessionContext, path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&api_url(path)), session).send().await?;
    check(session, response).await?;
    Ok(())
}

/// POST an urlencoded form, as the auth and costing-create endpoints expect
pub(crate) async fn post_form<T: DeserializeOwned>(
    session: SessionContext,
    path: &str,
    fields: &[(&str, &str)],
) -> Result<T, ApiError> {
    let request = authorize(Request::post(&api_url(path)), session)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_body(fields))?;
    let response = request.send().await?;
    let response = check(session, response).await?;
    Ok(response.json::<T>().await?)
}

/// Urlencode form fields, skipping empty values
pub(crate) fn form_body(fields: &[(&str, &str)]) -> String {
    use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_skips_empty_fields() {
        let body = form_body(&[("username", "admin"), ("location", ""), ("notes", "a b")]);
        assert_eq!(body, "username=admin&notes=a%20b");
    }

    #[test]
    fn form_body_escapes_reserved_characters() {
        let body = form_body(&[("password", "p@ss&word=1")]);
        assert_eq!(body, "password=p%40ss%26word%3D1");
    }

    #[test]
    fn api_url_joins_base_and_path() {
        assert!(api_url("/leads/").ends_with("/api/leads/"));
    }
}
