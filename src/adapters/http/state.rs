//! Shared router state.

use std::sync::Arc;

use secrecy::SecretString;

use crate::application::{
    CreateCommentHandler, GenerateFeedHandler, GetPostsHandler, ListCommentsHandler,
    ListTagsHandler, NotifySubscribersHandler,
};
use crate::config::SiteConfig;
use crate::ports::{CommentStore, EmailSender, MarkdownRenderer, PostSource, WeatherSource};

/// Dependencies shared by every route.
///
/// Cloned per request; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostSource>,
    pub comments: Arc<dyn CommentStore>,
    pub weather: Arc<dyn WeatherSource>,
    pub renderer: Arc<dyn MarkdownRenderer>,
    /// `None` when no email provider token is configured.
    pub email: Option<Arc<dyn EmailSender>>,
    /// Bearer secret guarding the notify route, when set.
    pub notify_secret: Option<Arc<SecretString>>,
    pub site: SiteConfig,
}

impl AppState {
    pub fn get_posts_handler(&self) -> GetPostsHandler {
        GetPostsHandler::new(self.posts.clone())
    }

    pub fn list_tags_handler(&self) -> ListTagsHandler {
        ListTagsHandler::new(self.posts.clone())
    }

    pub fn list_comments_handler(&self) -> ListCommentsHandler {
        ListCommentsHandler::new(self.comments.clone())
    }

    pub fn create_comment_handler(&self) -> CreateCommentHandler {
        CreateCommentHandler::new(self.comments.clone())
    }

    pub fn notify_handler(&self) -> NotifySubscribersHandler {
        NotifySubscribersHandler::new(
            self.posts.clone(),
            self.renderer.clone(),
            self.email.clone(),
            self.site.base_url(),
            self.site.name.clone(),
        )
    }

    pub fn feed_handler(&self) -> GenerateFeedHandler {
        GenerateFeedHandler::new(self.posts.clone(), self.renderer.clone(), self.site.clone())
    }
}

#[cfg(test)]
pub(crate) mod test_state {
    use super::*;
    use crate::testing::{EchoRenderer, MockCommentStore, MockPostSource, MockWeatherSource};

    /// State over in-memory doubles; override fields as needed.
    pub fn state() -> AppState {
        AppState {
            posts: Arc::new(MockPostSource::default()),
            comments: Arc::new(MockCommentStore::default()),
            weather: Arc::new(MockWeatherSource::unconfigured()),
            renderer: Arc::new(EchoRenderer),
            email: None,
            notify_secret: None,
            site: SiteConfig {
                url: "https://lulu.example".to_string(),
                ..Default::default()
            },
        }
    }
}
