//! Buttondown implementation of the `EmailSender` port.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;

use crate::ports::{EmailError, EmailReceipt, EmailSender, OutgoingEmail};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Request body for `POST /v1/emails`.
///
/// Drafts carry `status: "draft"` and no schedule; everything else is
/// scheduled, immediately unless a time was given.
#[derive(Debug, Serialize)]
struct CreateEmailRequest<'a> {
    subject: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publish_at: Option<String>,
}

impl<'a> CreateEmailRequest<'a> {
    fn from_email(email: &'a OutgoingEmail) -> Self {
        let (status, publish_at) = if email.draft {
            (Some("draft"), None)
        } else {
            let at = email
                .publish_at
                .clone()
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
            (None, Some(at))
        };
        Self {
            subject: &email.subject,
            body: &email.html_body,
            status,
            publish_at,
        }
    }
}

/// Sends emails through the Buttondown REST API.
pub struct ButtondownEmailSender {
    api_url: String,
    token: SecretString,
    client: Client,
}

impl ButtondownEmailSender {
    pub fn new(api_url: impl Into<String>, token: SecretString) -> Result<Self, EmailError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EmailError::Network(e.to_string()))?;
        Ok(Self {
            api_url: api_url.into(),
            token,
            client,
        })
    }
}

#[async_trait]
impl EmailSender for ButtondownEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<EmailReceipt, EmailError> {
        let payload = CreateEmailRequest::from_email(&email);

        let response = self
            .client
            .post(&self.api_url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Token {}", self.token.expose_secret()),
            )
            .json(&payload)
            .send()
            .await
            .map_err(|e| EmailError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), error = %body, "Buttondown rejected email");
            return Err(EmailError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let receipt: EmailReceipt = response
            .json()
            .await
            .map_err(|e| EmailError::Decode(e.to_string()))?;

        tracing::info!(email_id = %receipt.id, draft = email.draft, "Newsletter email queued");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn sender(server: &MockServer) -> ButtondownEmailSender {
        ButtondownEmailSender::new(
            format!("{}/v1/emails", server.uri()),
            SecretString::new("bd_token".to_string()),
        )
        .unwrap()
    }

    fn email(publish_at: Option<&str>, draft: bool) -> OutgoingEmail {
        OutgoingEmail {
            subject: "New post: Hello".to_string(),
            html_body: "<h1>Hello</h1>".to_string(),
            publish_at: publish_at.map(str::to_string),
            draft,
        }
    }

    #[tokio::test]
    async fn draft_is_sent_without_schedule() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/emails"))
            .and(header("authorization", "Token bd_token"))
            .and(body_json(json!({
                "subject": "New post: Hello",
                "body": "<h1>Hello</h1>",
                "status": "draft"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "em_1",
                "subject": "New post: Hello",
                "publish_at": null,
                "status": "draft"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = sender(&server).send(email(None, true)).await.unwrap();
        assert_eq!(receipt.id, "em_1");
        assert_eq!(receipt.publish_at, None);
    }

    #[tokio::test]
    async fn explicit_schedule_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({
                "subject": "New post: Hello",
                "body": "<h1>Hello</h1>",
                "publish_at": "2025-01-01T00:00:00Z"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "em_2",
                "subject": "New post: Hello",
                "publish_at": "2025-01-01T00:00:00Z",
                "status": "scheduled"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = sender(&server)
            .send(email(Some("2025-01-01T00:00:00Z"), false))
            .await
            .unwrap();
        assert_eq!(receipt.publish_at.as_deref(), Some("2025-01-01T00:00:00Z"));
    }

    #[tokio::test]
    async fn missing_schedule_defaults_to_now() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(|req: &Request| {
                let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
                let at = body["publish_at"].clone();
                ResponseTemplate::new(201).set_body_json(json!({"id": "em_3", "publish_at": at}))
            })
            .mount(&server)
            .await;

        let before = Utc::now() - chrono::Duration::seconds(1);
        let receipt = sender(&server).send(email(None, false)).await.unwrap();
        let at = chrono::DateTime::parse_from_rfc3339(receipt.publish_at.as_deref().unwrap()).unwrap();
        assert!(at >= before);

        let requests = server.received_requests().await.unwrap();
        let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(sent.get("status").is_none());
    }

    #[tokio::test]
    async fn non_success_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad subject"))
            .mount(&server)
            .await;

        let err = sender(&server).send(email(None, false)).await.unwrap_err();
        assert_eq!(err.to_string(), "Buttondown API error: 400 bad subject");
    }
}
