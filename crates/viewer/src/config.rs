use std::path::PathBuf;

/// Service base URL used when `VIEWER_ENV=production`.
pub const PRODUCTION_API_URL: &str = "https://tiga2000.com/api";
/// Service base URL for local development.
pub const DEVELOPMENT_API_URL: &str = "http://localhost:8787";

/// Viewer configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Base URL of the problems service, without a trailing slash.
    pub api_base_url: String,
    /// Where to write the rendered page. `None` writes to stdout.
    pub output: Option<PathBuf>,
}

impl ViewerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var            | Default                                              |
    /// |--------------------|------------------------------------------------------|
    /// | `PROBLEMS_API_URL` | by `VIEWER_ENV`: production or development base URL |
    /// | `VIEWER_ENV`       | `development`                                        |
    /// | `VIEWER_OUTPUT`    | unset (stdout)                                       |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("PROBLEMS_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| {
                let url = match lookup("VIEWER_ENV").as_deref() {
                    Some("production") => PRODUCTION_API_URL,
                    _ => DEVELOPMENT_API_URL,
                };
                url.to_string()
            });

        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
            output: lookup("VIEWER_OUTPUT")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Full URL of the list endpoint.
    pub fn problems_url(&self) -> String {
        format!("{}/problems", self.api_base_url)
    }
}
