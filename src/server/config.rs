use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_JWT_EXPIRES_IN_SECONDS: i64 = 86_400;
const DEFAULT_CACHE_TTL_SECONDS: u64 = 300;
const DEFAULT_CACHE_MAX_CAPACITY: u64 = 10_000;
const DEFAULT_BCRYPT_COST: u32 = 10;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_SUPERADMIN_USERNAME: &str = "admin";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_expires_in_seconds: i64,
    pub bcrypt_cost: u32,

    pub cache_ttl_seconds: u64,
    pub cache_max_capacity: u64,

    pub max_upload_bytes: usize,
    pub cors_allowed_origin: Option<String>,

    pub superadmin_email: Option<String>,
    pub superadmin_password: Option<String>,
    pub superadmin_username: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expires_in_seconds: parsed("JWT_EXPIRES_IN_SECONDS", DEFAULT_JWT_EXPIRES_IN_SECONDS)?,
            bcrypt_cost: parsed("BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
            cache_ttl_seconds: parsed("CACHE_TTL_SECONDS", DEFAULT_CACHE_TTL_SECONDS)?,
            cache_max_capacity: parsed("CACHE_MAX_CAPACITY", DEFAULT_CACHE_MAX_CAPACITY)?,
            max_upload_bytes: parsed("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            cors_allowed_origin: optional("CORS_ALLOWED_ORIGIN"),
            superadmin_email: optional("SUPERADMIN_EMAIL").map(|email| email.to_lowercase()),
            superadmin_password: optional("SUPERADMIN_PASSWORD"),
            superadmin_username: optional("SUPERADMIN_USERNAME")
                .unwrap_or_else(|| DEFAULT_SUPERADMIN_USERNAME.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
