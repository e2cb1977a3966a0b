//! GitHub adapter - blog posts from repository issues.

mod github_post_source;
mod issue_types;

pub use github_post_source::{GithubPostSource, GithubSourceConfig};
