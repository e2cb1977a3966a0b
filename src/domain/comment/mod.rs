//! Comment module - reader comments attached to posts.
//!
//! Comments are created as `pending`; moderation happens outside this
//! service and only `approved` comments are ever read back.

mod input;
mod record;

pub use input::{CreateCommentInput, NewComment, MIN_AUTHOR_NAME_CHARS, MIN_CONTENT_CHARS};
pub use record::{CommentRecord, CommentStatus, CreatedComment};
