//! Runtime configuration from the environment.

use axum::http::HeaderValue;
use std::env;
use tracing::warn;

/// Origin always allowed during local frontend development.
const DEV_FRONT_ORIGIN: &str = "http://localhost:5173";

/// Server configuration, read from the environment (with `.env` support via
/// `dotenvy` in the binary).
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds to. `PORT`, default 8080.
    pub port: u16,
    /// Redis connection URL. `REDIS_URL`, default `redis://redis:6379/0`.
    pub redis_url: String,
    /// Deployed frontend origin added to the CORS allow-list.
    /// `DEPLOYED_FRONT_DOMAIN`, optional.
    pub deployed_front_domain: Option<String>,
}

impl Config {
    /// Reads the configuration from the environment, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8080);
        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://redis:6379/0".to_string());
        let deployed_front_domain = env::var("DEPLOYED_FRONT_DOMAIN")
            .ok()
            .filter(|domain| !domain.is_empty());

        Self {
            port,
            redis_url,
            deployed_front_domain,
        }
    }

    /// The CORS allow-list: the local dev origin plus the deployed frontend
    /// domain when configured.
    pub fn cors_origins(&self) -> Vec<HeaderValue> {
        let mut origins = vec![HeaderValue::from_static(DEV_FRONT_ORIGIN)];
        if let Some(domain) = &self.deployed_front_domain {
            match HeaderValue::from_str(domain) {
                Ok(origin) => origins.push(origin),
                Err(_) => warn!(domain = %domain, "Ignoring invalid DEPLOYED_FRONT_DOMAIN"),
            }
        }
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origins_include_dev_origin() {
        let config = Config {
            port: 8080,
            redis_url: "redis://localhost:6379/0".to_string(),
            deployed_front_domain: None,
        };
        assert_eq!(config.cors_origins().len(), 1);
    }

    #[test]
    fn test_cors_origins_include_deployed_domain() {
        let config = Config {
            port: 8080,
            redis_url: "redis://localhost:6379/0".to_string(),
            deployed_front_domain: Some("https://game.example.com".to_string()),
        };
        assert_eq!(config.cors_origins().len(), 2);
    }
}
