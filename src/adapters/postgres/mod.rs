//! PostgreSQL adapters - direct database access for the comments table.
//!
//! Used instead of the Supabase REST API when `BLOG__DATABASE__URL` is set.

mod comment_store;
mod pool;

pub use comment_store::PostgresCommentStore;
pub use pool::connect;
