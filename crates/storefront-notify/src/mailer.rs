//! Mail transports.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use storefront_core::config::notify::NotifyConfig;
use storefront_core::error::AppError;
use storefront_core::result::AppResult;

/// A plain-text mail transport.
///
/// The gateway talks to this seam so tests can record messages instead of
/// opening SMTP connections.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one plain-text message.
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()>;
}

/// SMTP transport backed by lettre.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    /// Create a transport from configuration.
    pub fn new(config: &NotifyConfig) -> AppResult<Self> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| {
                AppError::with_source(
                    storefront_core::error::ErrorKind::Notification,
                    format!("Failed to build SMTP relay for {}", config.smtp_host),
                    e,
                )
            })?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let message = Message::builder()
            .from(self.from_address.parse().map_err(|_| {
                AppError::notification(format!("Invalid sender address: {}", self.from_address))
            })?)
            .to(to
                .parse()
                .map_err(|_| AppError::notification(format!("Invalid recipient address: {to}")))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| {
                AppError::with_source(
                    storefront_core::error::ErrorKind::Notification,
                    "Failed to build message",
                    e,
                )
            })?;

        self.transport.send(message).await.map_err(|e| {
            AppError::with_source(
                storefront_core::error::ErrorKind::Notification,
                format!("SMTP send to {to} failed"),
                e,
            )
        })?;

        info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}

/// No-op transport used when outbound mail is disabled.
///
/// Logs what would have been sent so development runs stay observable.
#[derive(Debug, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, _body: &str) -> AppResult<()> {
        info!(to = %to, subject = %subject, "Outbound mail disabled, dropping message");
        Ok(())
    }
}
