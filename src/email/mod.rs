use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::models::NewEntry;

/// Outbound notification seam for the submission workflow.
#[async_trait]
pub trait EntryNotifier: Send + Sync {
    fn admin_address(&self) -> &str;

    async fn notify(&self, to: &str, entry: &NewEntry) -> Result<(), String>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    admin_to: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        // Implicit TLS (SMTPS), port 465 by default.
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| format!("SMTP relay error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
            admin_to: config.admin_to.clone(),
        })
    }
}

#[async_trait]
impl EntryNotifier for SmtpMailer {
    fn admin_address(&self) -> &str {
        &self.admin_to
    }

    async fn notify(&self, to: &str, entry: &NewEntry) -> Result<(), String> {
        let body = format!(
            "A new record has been added:\n\nCity: {}\nSpecialty: {}\nSubmitted by: {}",
            entry.city, entry.specialty, entry.user_email
        );

        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(to.parse().map_err(|e| format!("Invalid to address: {e}"))?)
            .subject("New City Record")
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
