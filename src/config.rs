use crate::core::models::user::AdminSeed;
use crate::error::Error;
use chrono::Duration;
use std::path::PathBuf;

const MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    File(PathBuf),
    Memory,
}

/// Token lifetime shared with the auth handlers.
#[derive(Debug, Clone, Copy)]
pub struct TokenTtl(pub Duration);

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: Storage,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bind_addr: String,
    pub port: u16,
    pub admin: Option<AdminSeed>,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let storage = match var("DATA_PATH") {
            Some(p) if p == MEMORY => Storage::Memory,
            Some(p) => Storage::File(p.into()),
            None => Storage::File("data.json".into()),
        };
        let jwt_secret = var("JWT_SECRET").ok_or_else(|| Error::ConfigError("JWT_SECRET must be set".into()))?;
        let hours = match var("TOKEN_TTL_HOURS") {
            Some(h) => h
                .parse::<i64>()
                .ok()
                .filter(|h| *h > 0)
                .ok_or_else(|| Error::ConfigError(format!("invalid TOKEN_TTL_HOURS: {}", h)))?,
            None => 24,
        };
        let port = match var("PORT") {
            Some(p) => p.parse().map_err(|_| Error::ConfigError(format!("invalid PORT: {}", p)))?,
            None => 3001,
        };
        let admin = match (var("ADMIN_EMAIL"), var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed {
                email,
                password,
                name: var("ADMIN_NAME").unwrap_or_else(|| "Admin".into()),
            }),
            (None, None) => None,
            _ => return Err(Error::ConfigError("ADMIN_EMAIL and ADMIN_PASSWORD must be set together".into())),
        };
        Ok(Self {
            storage,
            jwt_secret,
            token_ttl: Duration::hours(hours),
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            admin,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, Error> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[("JWT_SECRET", "s")]).unwrap();
        assert_eq!(c.storage, Storage::File("data.json".into()));
        assert_eq!(c.token_ttl, Duration::hours(24));
        assert_eq!(c.bind_addr, "0.0.0.0");
        assert_eq!(c.port, 3001);
        assert!(c.admin.is_none());
    }

    #[test]
    fn test_secret_required() {
        assert!(matches!(config(&[]), Err(Error::ConfigError(_))));
        assert!(matches!(config(&[("JWT_SECRET", "  ")]), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            ("JWT_SECRET", "s"),
            ("DATA_PATH", ":memory:"),
            ("TOKEN_TTL_HOURS", "2"),
            ("PORT", "8080"),
            ("ADMIN_EMAIL", "root@example.com"),
            ("ADMIN_PASSWORD", "toor"),
        ])
        .unwrap();
        assert_eq!(c.storage, Storage::Memory);
        assert_eq!(c.token_ttl, Duration::hours(2));
        assert_eq!(c.port, 8080);
        assert_eq!(c.admin.map(|a| a.name), Some("Admin".to_owned()));
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(config(&[("JWT_SECRET", "s"), ("PORT", "http")]), Err(Error::ConfigError(_))));
        assert!(matches!(config(&[("JWT_SECRET", "s"), ("TOKEN_TTL_HOURS", "0")]), Err(Error::ConfigError(_))));
        assert!(matches!(config(&[("JWT_SECRET", "s"), ("ADMIN_EMAIL", "a@b.c")]), Err(Error::ConfigError(_))));
    }
}
