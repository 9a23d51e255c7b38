/// Errors raised while fetching problems or rendering the page.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The HTTP request itself failed (connect, DNS, TLS, body decode).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Both the primary and the fallback source failed.
    #[error("{primary} (fallback also failed: {fallback})")]
    AllSourcesFailed { primary: String, fallback: String },

    /// A bundled template failed to parse.
    #[error("Template error: {0}")]
    TemplateSyntax(#[from] handlebars::TemplateError),

    /// Rendering a template against the page data failed.
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}
