//! Post module - blog posts backed by GitHub issues.
//!
//! An issue becomes a post when it carries the `published` label. Every
//! other label, except the control labels, is exposed as a tag.

mod blog_post;
mod excerpt;

pub use blog_post::{all_tags, post_path, BlogPost, LabeledIssue, PostQuery, DRAFT_LABEL, PUBLISHED_LABEL};
pub use excerpt::{excerpt, format_long_date};
