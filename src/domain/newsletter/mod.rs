//! Newsletter module - the email announcing a new post.

use crate::domain::feed::escape_xml;
use crate::domain::post::{excerpt, BlogPost};

/// Excerpt length used in the email lead paragraph.
pub const NEWSLETTER_EXCERPT_CHARS: usize = 200;

/// Subject and HTML body of a new-post announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterEmail {
    pub subject: String,
    pub html_body: String,
}

impl NewsletterEmail {
    /// Composes the announcement for `post`.
    ///
    /// `rendered_body` is the post body already rendered to HTML;
    /// `site_url` has no trailing slash.
    pub fn for_post(post: &BlogPost, rendered_body: &str, site_url: &str, site_name: &str) -> Self {
        let html_body = format!(
            "<h1>{title}</h1>\n<p>{lead}</p>\n<div>{body}</div>\n<p><a href=\"{site}{path}\">Read on {name}</a></p>",
            title = escape_xml(&post.title),
            lead = escape_xml(&excerpt(&post.body, NEWSLETTER_EXCERPT_CHARS)),
            body = rendered_body,
            site = site_url,
            path = post.url,
            name = escape_xml(site_name),
        );

        Self {
            subject: format!("New post: {}", post.title),
            html_body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PostNumber, Timestamp};

    fn post() -> BlogPost {
        let ts = Timestamp::parse_rfc3339("2024-01-15T10:30:00Z").unwrap();
        BlogPost {
            id: 1,
            number: PostNumber::new(8).unwrap(),
            title: "Tips & Tricks".to_string(),
            body: "## Intro\nHello **world**".to_string(),
            created_at: ts,
            updated_at: ts,
            html_url: "https://github.com/o/r/issues/8".to_string(),
            tags: vec![],
            url: "/blog/8".to_string(),
        }
    }

    #[test]
    fn subject_names_the_post() {
        let email = NewsletterEmail::for_post(&post(), "<p>x</p>", "https://site.dev", "Blog");
        assert_eq!(email.subject, "New post: Tips & Tricks");
    }

    #[test]
    fn body_has_title_excerpt_content_and_link() {
        let email = NewsletterEmail::for_post(&post(), "<p>rendered</p>", "https://site.dev", "Blog");
        assert!(email.html_body.starts_with("<h1>Tips &amp; Tricks</h1>"));
        assert!(email.html_body.contains("<p>Intro Hello world</p>"));
        assert!(email.html_body.contains("<div><p>rendered</p></div>"));
        assert!(email
            .html_body
            .ends_with("<p><a href=\"https://site.dev/blog/8\">Read on Blog</a></p>"));
    }
}
