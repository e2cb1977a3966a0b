//! Supabase adapter - comments through the PostgREST API.

mod client;
mod supabase_comment_store;

pub use client::{SupabaseClient, SupabaseClients};
pub use supabase_comment_store::SupabaseCommentStore;
