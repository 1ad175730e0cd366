use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

use log::{error, info, warn};
use thiserror::Error;

use crate::session::SessionSecret;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Server-held secrets, passed explicitly to whatever needs them.
#[derive(Clone, Default)]
pub struct Secrets {
    pub session: Option<SessionSecret>,
    pub admin_password: Option<String>,
}

impl Secrets {
    pub fn from_env() -> Self {
        let session = match non_empty_var("SESSION_SECRET") {
            Some(secret) => SessionSecret::new(secret.as_bytes()).ok(),
            None => None,
        };
        if session.is_none() {
            error!("SESSION_SECRET is not set; login and session checks are disabled");
        }

        let admin_password = non_empty_var("ADMIN_PASSWORD");
        if admin_password.is_none() {
            error!("ADMIN_PASSWORD is not set; login is disabled");
        }

        Secrets {
            session,
            admin_password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub assets: PathBuf,
    pub production: bool,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            addr: try_load("KOSMO_ADDR", "0.0.0.0:4321")?,
            assets: try_load("KOSMO_ASSETS", "./public")?,
            production: try_load("KOSMO_PRODUCTION", "false")?,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }
    })
}
