//! Auth Endpoints
//!
//! Login/logout against the token endpoint. `login` initializes the
//! session context on success so every later call carries the bearer.

use super::{post_form, post_no_content, ApiError};
use crate::models::LoginResponse;
use crate::session::SessionContext;

pub async fn login(
    session: SessionContext,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let response: LoginResponse =
        post_form(session, "/auth/login/", &[("username", username), ("password", password)]).await?;
    session.init(response.access_token.clone(), username.to_string());
    Ok(response)
}

/// Best-effort server logout; the local session is cleared regardless
pub async fn logout(session: SessionContext) {
    let _ = post_no_content(session, "/auth/logout/").await;
    session.clear();
}
