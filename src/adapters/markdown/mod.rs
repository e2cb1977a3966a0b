//! Markdown rendering adapter.

mod pulldown_renderer;

pub use pulldown_renderer::PulldownMarkdownRenderer;
