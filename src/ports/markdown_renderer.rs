//! Markdown renderer port.

use thiserror::Error;

/// Converts post bodies from markdown to HTML.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// Errors during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Syntax highlighting failed: {0}")]
    Highlight(String),
}
