//! Hand-written port doubles shared by unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::comment::{CommentRecord, CommentStatus, NewComment};
use crate::domain::foundation::{PostNumber, Timestamp};
use crate::domain::post::BlogPost;
use crate::ports::{
    CommentStore, CommentStoreError, EmailError, EmailReceipt, EmailSender, MarkdownRenderer,
    OutgoingEmail, PostSource, PostSourceError, RenderError, WeatherError, WeatherSource,
};

pub fn post(number: u64, title: &str, tags: &[&str]) -> BlogPost {
    let ts = Timestamp::parse_rfc3339("2024-03-05T08:00:00Z").unwrap();
    BlogPost {
        id: 1000 + number,
        number: PostNumber::new(number).unwrap(),
        title: title.to_string(),
        body: format!("Body of **{}**", title),
        created_at: ts,
        updated_at: ts,
        html_url: format!("https://github.com/LinHeMa/blog/issues/{}", number),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        url: format!("/blog/{}", number),
    }
}

pub fn comment(id: &str, post_id: u64, status: CommentStatus) -> CommentRecord {
    CommentRecord {
        id: id.to_string(),
        post_id: PostNumber::new(post_id).unwrap(),
        author_name: "Lulu".to_string(),
        author_email: None,
        content: "Nice post!".to_string(),
        status,
        created_at: Timestamp::parse_rfc3339("2024-03-06T08:00:00Z").unwrap(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Post source
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockPostSource {
    posts: Vec<BlogPost>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockPostSource {
    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self {
            posts,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), PostSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(PostSourceError::Upstream {
                status: 502,
                message: "Simulated GitHub failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PostSource for MockPostSource {
    async fn list_published(&self, tag: Option<&str>) -> Result<Vec<BlogPost>, PostSourceError> {
        self.check()?;
        Ok(self
            .posts
            .iter()
            .filter(|p| tag.map_or(true, |t| p.tags.iter().any(|pt| pt == t)))
            .cloned()
            .collect())
    }

    async fn get_published(&self, number: PostNumber) -> Result<Option<BlogPost>, PostSourceError> {
        self.check()?;
        Ok(self.posts.iter().find(|p| p.number == number).cloned())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Comment store
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockCommentStore {
    rows: Mutex<Vec<CommentRecord>>,
    fail: bool,
    not_configured: bool,
}

impl MockCommentStore {
    pub fn with_rows(rows: Vec<CommentRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn not_configured() -> Self {
        Self {
            not_configured: true,
            ..Default::default()
        }
    }

    pub fn inserted(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), CommentStoreError> {
        if self.not_configured {
            return Err(CommentStoreError::NotConfigured("SUPABASE__URL"));
        }
        if self.fail {
            return Err(CommentStoreError::Database("Simulated store failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CommentStore for MockCommentStore {
    async fn list_approved(&self, post_id: PostNumber) -> Result<Vec<CommentRecord>, CommentStoreError> {
        self.check()?;
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id && c.is_approved())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(rows)
    }

    async fn insert(&self, comment: NewComment) -> Result<CommentRecord, CommentStoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let record = CommentRecord {
            id: format!("c{}", rows.len() + 1),
            post_id: comment.post_id,
            author_name: comment.author_name,
            author_email: comment.author_email,
            content: comment.content,
            status: comment.status,
            created_at: Timestamp::now(),
        };
        rows.push(record.clone());
        Ok(record)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Email sender
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockEmailSender {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: bool,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<EmailReceipt, EmailError> {
        if self.fail {
            return Err(EmailError::Api {
                status: 400,
                body: "rejected".to_string(),
            });
        }
        let receipt = EmailReceipt {
            id: "em_test".to_string(),
            subject: email.subject.clone(),
            publish_at: if email.draft {
                None
            } else {
                Some(email.publish_at.clone().unwrap_or_else(|| "2024-03-05T08:00:00.000Z".to_string()))
            },
            status: if email.draft { "draft" } else { "scheduled" }.to_string(),
        };
        self.sent.lock().unwrap().push(email);
        Ok(receipt)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Renderer and weather
// ════════════════════════════════════════════════════════════════════════════

/// Wraps the markdown in a paragraph without parsing it.
pub struct EchoRenderer;

impl MarkdownRenderer for EchoRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        Ok(format!("<p>{}</p>", markdown))
    }
}

pub struct MockWeatherSource {
    result: Option<serde_json::Value>,
}

impl MockWeatherSource {
    pub fn with_forecast(value: serde_json::Value) -> Self {
        Self { result: Some(value) }
    }

    pub fn unconfigured() -> Self {
        Self { result: None }
    }
}

#[async_trait]
impl WeatherSource for MockWeatherSource {
    async fn forecast(&self) -> Result<serde_json::Value, WeatherError> {
        self.result.clone().ok_or(WeatherError::NotConfigured)
    }
}
