use std::path::PathBuf;

/// Origins allowed by default in addition to `http://localhost:<port>`.
pub const DEFAULT_CORS_ORIGINS: &str = "https://tiga2000.com,https://api.tiga2000.com";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8787`).
    pub port: u16,
    /// Explicit CORS allowlist, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Also accept any `http://localhost:<port>` origin (default: `true`).
    pub allow_localhost_origins: bool,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Reported by `/health` and `/build-info` (default: `1.0.0`).
    pub api_version: String,
    /// Deployment environment name (default: `development`).
    pub environment: String,
    /// JSON dataset re-read on every request. `None` serves the bundled dataset.
    pub data_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `8787`                     |
    /// | `CORS_ORIGINS`            | [`DEFAULT_CORS_ORIGINS`]   |
    /// | `CORS_ALLOW_LOCALHOST`    | `true`                     |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `API_VERSION`             | `1.0.0`                    |
    /// | `ENVIRONMENT`             | `development`              |
    /// | `PROBLEMS_DATA_PATH`      | unset (bundled dataset)    |
    ///
    /// Panics on unparseable numeric values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "8787")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let allow_localhost_origins: bool = var("CORS_ALLOW_LOCALHOST", "true")
            .parse()
            .expect("CORS_ALLOW_LOCALHOST must be true or false");

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_path = lookup("PROBLEMS_DATA_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            cors_origins,
            allow_localhost_origins,
            request_timeout_secs,
            api_version: var("API_VERSION", "1.0.0"),
            environment: var("ENVIRONMENT", "development"),
            data_path,
        }
    }
}
