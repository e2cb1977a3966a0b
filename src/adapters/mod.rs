//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `github` - posts from GitHub issues
//! - `supabase` / `postgres` - comment storage
//! - `buttondown` - newsletter email
//! - `weather` - CWA forecast passthrough
//! - `markdown` - pulldown-cmark renderer with syntect highlighting
//! - `theme` - preference storage for the theme controller
//! - `http` - axum routes

pub mod buttondown;
pub mod github;
pub mod http;
pub mod markdown;
pub mod postgres;
pub mod supabase;
pub mod theme;
pub mod weather;

pub use buttondown::ButtondownEmailSender;
pub use github::{GithubPostSource, GithubSourceConfig};
pub use markdown::PulldownMarkdownRenderer;
pub use postgres::PostgresCommentStore;
pub use supabase::{SupabaseClients, SupabaseCommentStore};
pub use theme::{InMemoryPreferenceStorage, JsonFilePreferenceStorage};
pub use weather::CwaWeatherSource;
