//! GenerateFeedHandler - Query handler producing the RSS document.

use std::sync::Arc;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::domain::feed::{FeedChannel, FeedItem, RssDocument};
use crate::domain::foundation::Timestamp;
use crate::domain::post::{excerpt, BlogPost};
use crate::ports::{MarkdownRenderer, PostSource, PostSourceError, RenderError};

/// Excerpt length used for item descriptions.
pub const FEED_EXCERPT_CHARS: usize = 300;

pub const FEED_GENERATOR: &str = concat!("lulu-blog ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Source(#[from] PostSourceError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub struct GenerateFeedHandler {
    posts: Arc<dyn PostSource>,
    renderer: Arc<dyn MarkdownRenderer>,
    site: SiteConfig,
}

impl GenerateFeedHandler {
    pub fn new(posts: Arc<dyn PostSource>, renderer: Arc<dyn MarkdownRenderer>, site: SiteConfig) -> Self {
        Self {
            posts,
            renderer,
            site,
        }
    }

    /// One item per published post, newest first.
    pub async fn handle(&self) -> Result<String, FeedError> {
        let posts = self.posts.list_published(None).await?;
        let base = self.site.base_url();

        let items = posts
            .iter()
            .map(|post| self.item(base, post))
            .collect::<Result<Vec<_>, _>>()?;

        let channel = FeedChannel {
            title: self.site.name.clone(),
            description: self.site.description.clone(),
            link: base.to_string(),
            language: self.site.language.clone(),
            generator: FEED_GENERATOR.to_string(),
            author: self.site.author.clone(),
            last_build_date: Timestamp::now(),
        };

        tracing::debug!(items = items.len(), "RSS feed generated");
        Ok(RssDocument::new(channel, items).render())
    }

    fn item(&self, base: &str, post: &BlogPost) -> Result<FeedItem, RenderError> {
        Ok(FeedItem {
            title: post.title.clone(),
            link: format!("{}{}", base, post.url),
            pub_date: post.created_at,
            description: excerpt(&post.body, FEED_EXCERPT_CHARS),
            content_html: self.renderer.render(&post.body)?,
            categories: post.tags.clone(),
        })
    }
}
