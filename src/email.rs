//! Contact notification email using lettre

use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use portfolio_contact::ContactMessage;
use tracing::info;

use crate::config::{Config, EmailConfig};

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("notification task: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Sends contact notifications to the site operators
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: Mailbox,
    admin_emails: Vec<Mailbox>,
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> Result<Self, NotifyError> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                admin_count = config.admin_emails.len(),
                "Email service initialized with authentication and TLS"
            );
            // relay() negotiates STARTTLS
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        let admin_emails = config
            .admin_emails
            .iter()
            .map(|email| email.parse())
            .collect::<Result<Vec<Mailbox>, _>>()?;

        Ok(Self {
            mailer,
            from: config.from_address.parse()?,
            admin_emails,
        })
    }

    pub fn build_message(&self, contact: &ContactMessage) -> Result<Message, NotifyError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(format!("Portfolio Contact: {}", contact.subject))
            .header(ContentType::TEXT_PLAIN);

        for admin_email in &self.admin_emails {
            builder = builder.to(admin_email.clone());
        }

        Ok(builder.body(contact.summary())?)
    }

    /// Blocking SMTP send
    pub fn send(&self, contact: &ContactMessage) -> Result<(), NotifyError> {
        let email = self.build_message(contact)?;
        self.mailer.send(&email)?;

        info!(
            contact_id = %contact.id,
            admin_count = self.admin_emails.len(),
            "Contact notification sent successfully"
        );

        Ok(())
    }
}

/// Notification side effect of a contact submission
///
/// Disabled unless `features.contact_notification` is set.
#[derive(Clone, Default)]
pub enum Notifier {
    #[default]
    Disabled,
    Email(EmailService),
}

impl Notifier {
    pub fn from_config(config: &Config) -> Result<Self, NotifyError> {
        if !config.features.contact_notification {
            info!("Contact notification disabled");
            return Ok(Self::Disabled);
        }

        Ok(Self::Email(EmailService::new(&config.email)?))
    }

    pub async fn notify(&self, contact: &ContactMessage) -> Result<(), NotifyError> {
        let Self::Email(service) = self else {
            return Ok(());
        };

        let service = service.clone();
        let contact = contact.clone();

        match tokio::task::spawn_blocking(move || service.send(&contact)).await {
            Ok(result) => result,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => Err(err.into()),
        }
    }
}
