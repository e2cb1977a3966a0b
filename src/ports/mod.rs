//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PostSource` - published posts (GitHub Issues)
//! - `CommentStore` - reader comments (Supabase or Postgres)
//! - `EmailSender` - newsletter dispatch (Buttondown)
//! - `WeatherSource` - forecast passthrough (CWA open data)
//! - `MarkdownRenderer` - post body rendering
//! - `PreferenceStorage` - persisted theme preference

mod comment_store;
mod email_sender;
mod markdown_renderer;
mod post_source;
mod preference_storage;
mod weather_source;

pub use comment_store::{CommentStore, CommentStoreError};
pub use email_sender::{EmailError, EmailReceipt, EmailSender, OutgoingEmail};
pub use markdown_renderer::{MarkdownRenderer, RenderError};
pub use post_source::{PostSource, PostSourceError};
pub use preference_storage::{PreferenceStorage, StorageError};
pub use weather_source::{WeatherError, WeatherSource};
