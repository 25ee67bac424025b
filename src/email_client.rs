use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::SubscriberEmail;

/// Outbound mail seam used by the news endpoint.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(
        &self,
        recipient: &SubscriberEmail,
        subject: &str,
        content: &str,
        is_multipart: bool,
        is_html: bool,
    ) -> Result<(), anyhow::Error>;
}

#[derive(Debug, Clone)]
pub struct EmailClient {
    http_client: Client,
    endpoint: Url,
    sender: SubscriberEmail,
    auth_token: SecretString,
}

#[derive(Serialize)]
struct EmailUnit<'a> {
    email: &'a str,
}

impl<'a> EmailUnit<'a> {
    fn new(email: &'a str) -> Self {
        Self { email }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: EmailUnit<'a>,
    to: Vec<EmailUnit<'a>>,
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: SubscriberEmail,
        auth_token: SecretString,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the email http client.")?;
        let endpoint = Url::parse(&base_url)
            .and_then(|url| url.join("v1/email"))
            .context("Failed parsing base email api url.")?;

        Ok(Self {
            http_client,
            endpoint,
            sender,
            auth_token,
        })
    }

    /// Posts one message to the mail API.
    ///
    /// A multipart message carries `content` both as text and html, otherwise
    /// `is_html` picks the single representation.
    #[tracing::instrument(
        name = "Sending an email",
        skip(self, subject, content),
        fields(recipient = %recipient.as_ref())
    )]
    pub async fn send(
        &self,
        recipient: &SubscriberEmail,
        subject: &str,
        content: &str,
        is_multipart: bool,
        is_html: bool,
    ) -> Result<(), reqwest::Error> {
        let (html, text) = match (is_multipart, is_html) {
            (true, _) => (Some(content), Some(content)),
            (false, true) => (Some(content), None),
            (false, false) => (None, Some(content)),
        };

        let body = SendEmailRequest {
            from: EmailUnit::new(self.sender.as_ref()),
            to: vec![EmailUnit::new(recipient.as_ref())],
            subject,
            html,
            text,
        };

        self.http_client
            .post(self.endpoint.clone())
            .header(
                "Authorization",
                "Bearer ".to_owned() + self.auth_token.expose_secret(),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[async_trait]
impl Mailer for EmailClient {
    async fn send_email(
        &self,
        recipient: &SubscriberEmail,
        subject: &str,
        content: &str,
        is_multipart: bool,
        is_html: bool,
    ) -> Result<(), anyhow::Error> {
        self.send(recipient, subject, content, is_multipart, is_html)
            .await
            .context("The mail API rejected the email.")
    }
}
