use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use log::{debug, info, warn};
use ring::hmac;

use crate::{
    error::AppError,
    session::{self, SESSION_COOKIE, SESSION_LIFETIME},
    state::AppState,
    types::{AuthStatus, LoginRequest, Success},
};

const NO_STORE: [(header::HeaderName, &str); 2] =
    [(header::CACHE_CONTROL, "no-store"), (header::VARY, "Cookie")];

const PASSWORD_MAC_KEY: &[u8] = b"kosmo admin password check";

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let result = match body {
        Ok(Json(req)) => start_session(&state, jar, &req.password),
        Err(rejection) => Err(AppError::MalformedBody(rejection)),
    };
    (NO_STORE, result)
}

fn start_session(
    state: &AppState,
    jar: CookieJar,
    password: &str,
) -> Result<(CookieJar, Json<Success>), AppError> {
    if password.is_empty() {
        return Err(AppError::MissingPassword);
    }

    let Some(admin_password) = state.secrets.admin_password.as_deref() else {
        warn!("Login attempted while ADMIN_PASSWORD is unset");
        return Err(AppError::LoginDisabled);
    };

    if !password_matches(password, admin_password) {
        debug!("Login rejected: wrong password");
        return Err(AppError::WrongPassword);
    }

    let token = session::issue(&state.secrets, session::now_ms())?;
    info!("Admin logged in, session expires at {}", token.expires_at_ms());

    let cookie = session_cookie(token.into_string(), state.production);
    Ok((jar.add(cookie), Json(Success { success: true })))
}

/// Logout only drops the cookie; the token itself stays valid until expiry.
#[axum::debug_handler]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    debug!("Logging out");

    let mut cookie = Cookie::from(SESSION_COOKIE);
    cookie.set_path("/");
    (jar.remove(cookie), Json(Success { success: true }))
}

#[axum::debug_handler]
pub async fn check_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Json<AuthStatus> {
    Json(AuthStatus {
        authenticated: is_authenticated(&state, &jar),
    })
}

pub fn is_authenticated(state: &AppState, jar: &CookieJar) -> bool {
    match jar.get(SESSION_COOKIE) {
        Some(cookie) => session::verify(cookie.value(), &state.secrets, session::now_ms()),
        None => false,
    }
}

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(SESSION_LIFETIME.num_seconds()))
        .build()
}

/// Compares MACs of both passwords so timing does not depend on where they
/// differ.
fn password_matches(candidate: &str, expected: &str) -> bool {
    let key = hmac::Key::new(hmac::HMAC_SHA256, PASSWORD_MAC_KEY);
    let expected_tag = hmac::sign(&key, expected.as_bytes());
    hmac::verify(&key, candidate.as_bytes(), expected_tag.as_ref()).is_ok()
}
