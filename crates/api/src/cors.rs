//! Cross-origin policy: an explicit allowlist plus local development origins.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServerConfig;

const LOCALHOST_PREFIX: &str = "http://localhost:";

/// Decides whether a request `Origin` may receive CORS headers.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Vec<String>,
    allow_localhost: bool,
}

impl OriginPolicy {
    pub fn new(allowed: Vec<String>, allow_localhost: bool) -> Self {
        Self {
            allowed,
            allow_localhost,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.cors_origins.clone(), config.allow_localhost_origins)
    }

    /// Exact allowlist match, or `http://localhost:<digits>` when enabled.
    pub fn allows(&self, origin: &str) -> bool {
        if self.allowed.iter().any(|o| o == origin) {
            return true;
        }
        self.allow_localhost
            && origin
                .strip_prefix(LOCALHOST_PREFIX)
                .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
    }
}

/// Build the CORS middleware layer from server configuration.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let policy = Arc::new(OriginPolicy::from_config(config));

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &axum::http::request::Parts| {
                origin.to_str().is_ok_and(|o| policy.allows(o))
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .expose_headers([CONTENT_LENGTH, HeaderName::from_static("x-request-id")])
        .allow_credentials(true)
        .max_age(Duration::from_secs(600))
}
