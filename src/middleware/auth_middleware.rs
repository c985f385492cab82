// Session middleware for owner-scoped routes.
// Resolves the caller's session via the external auth tables and injects
// AuthenticatedUser into request extensions; everything else is refused
// before any persistence access.

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use axum_extra::extract::CookieJar;
use serde_json::json;

use crate::{
    app::AppState, middleware::auth::AuthenticatedUser, utils::service_error::ServiceError,
};

/// Validate the caller's session and add AuthenticatedUser to extensions
pub async fn session_middleware(
    State(app_state): State<AppState>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = match extract_session_token(&jar, request.headers()) {
        Some(token) => token,
        None => return unauthenticated_response(),
    };

    match app_state.session_service.resolve_token(&token).await {
        Ok(Some(session_user)) => {
            let auth_user = AuthenticatedUser {
                user_id: session_user.id,
                name: session_user.name,
            };
            request.extensions_mut().insert(auth_user);
            next.run(request).await
        },
        Ok(None) => unauthenticated_response(),
        Err(e) => {
            tracing::warn!("session lookup failed: {}", e);
            e.into_response()
        },
    }
}

/// Session token from the auth cookie, falling back to a bearer header.
/// The auth service signs its cookie as `token.signature`; the lookup key
/// is the part before the dot.
fn extract_session_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    let cookie_name = &crate::app_config::config().session_cookie_name;

    if let Some(cookie) = jar.get(cookie_name) {
        let raw = cookie.value();
        let token = raw.split('.').next().unwrap_or(raw);
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(String::from)
}

fn unauthenticated_response() -> Response {
    ServiceError::Unauthenticated("You must be logged in to do that.").into_response()
}

/// Extractor so handlers can take AuthenticatedUser directly
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Authentication required" })),
                )
            })
    }
}
