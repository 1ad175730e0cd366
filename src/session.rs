use std::fmt;

use chrono::{Duration, TimeDelta, Utc};
use log::{error, trace};
use rand::rngs::OsRng;
use rand::RngCore;
use ring::hmac;
use thiserror::Error;

use crate::config::Secrets;

pub const SESSION_COOKIE: &str = "session";
pub const SESSION_LIFETIME: TimeDelta = Duration::days(7);

const RANDOM_BYTES: usize = 32;
const SIGNATURE_HEX_LEN: usize = 64;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("session secret is not configured")]
    MissingSecret,

    #[error("secure random source failed: {0}")]
    Rng(#[from] rand::Error),
}

/// HMAC-SHA256 key used to sign session tokens.
#[derive(Clone)]
pub struct SessionSecret(hmac::Key);

impl SessionSecret {
    pub fn new(secret: &[u8]) -> Result<Self, SessionError> {
        if secret.is_empty() {
            return Err(SessionError::MissingSecret);
        }
        Ok(SessionSecret(hmac::Key::new(hmac::HMAC_SHA256, secret)))
    }

    fn sign(&self, payload: &str) -> String {
        hex::encode(hmac::sign(&self.0, payload.as_bytes()))
    }

    /// Only the exact lowercase hex form produced by [`SessionSecret::sign`]
    /// is accepted. The tag comparison itself is constant-time.
    fn verify(&self, payload: &str, signature: &str) -> bool {
        if signature.len() != SIGNATURE_HEX_LEN {
            return false;
        }
        if !signature
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return false;
        }
        let Ok(tag) = hex::decode(signature) else {
            return false;
        };
        hmac::verify(&self.0, payload.as_bytes(), &tag).is_ok()
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret(..)")
    }
}

/// A signed `<random>.<expiresAtMs>.<signature>` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    value: String,
    expires_at_ms: i64,
}

impl SessionToken {
    pub fn expires_at_ms(&self) -> i64 {
        self.expires_at_ms
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Issue a fresh token valid for [`SESSION_LIFETIME`] from `now_ms`.
///
/// Refuses to issue anything when no signing secret is configured.
pub fn issue(secrets: &Secrets, now_ms: i64) -> Result<SessionToken, SessionError> {
    let Some(secret) = secrets.session.as_ref() else {
        error!("SESSION_SECRET is not set, refusing to issue a session token");
        return Err(SessionError::MissingSecret);
    };

    let mut random_bytes = [0u8; RANDOM_BYTES];
    OsRng.try_fill_bytes(&mut random_bytes)?;
    let random_part = hex::encode(random_bytes);

    let expires_at_ms = now_ms.saturating_add(SESSION_LIFETIME.num_milliseconds());
    let payload = format!("{random_part}.{expires_at_ms}");
    let signature = secret.sign(&payload);

    Ok(SessionToken {
        value: format!("{payload}.{signature}"),
        expires_at_ms,
    })
}

/// Check a token presented by a client. Malformed, expired or forged tokens
/// are all just `false`.
pub fn verify(token: &str, secrets: &Secrets, now_ms: i64) -> bool {
    let mut parts = token.split('.');
    let (Some(random_part), Some(expires_raw), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        trace!("Session token does not have three parts");
        return false;
    };
    if random_part.is_empty() || expires_raw.is_empty() || signature.is_empty() {
        trace!("Session token has an empty part");
        return false;
    }

    let Ok(expires_at_ms) = expires_raw.parse::<i64>() else {
        trace!("Session token expiry is not a number");
        return false;
    };
    if expires_at_ms < now_ms {
        trace!("Session token expired at {}", expires_at_ms);
        return false;
    }

    let Some(secret) = secrets.session.as_ref() else {
        error!("SESSION_SECRET is not set, every session token is rejected");
        return false;
    };

    // The raw expiry text is signed, not its parsed value.
    secret.verify(&format!("{random_part}.{expires_raw}"), signature)
}
