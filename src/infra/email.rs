//! SMTP notification for contact form submissions.
//!
//! Email is optional: a deployment without SMTP configured simply wires no
//! notifier and submissions are only stored.

use async_trait::async_trait;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::application::contact::ContactNotifier;
use crate::config::EmailSettings;
use crate::domain::entities::ContactSubmissionRecord;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("email build error: {0}")]
    Build(String),
}

pub struct SmtpContactNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    to_address: String,
}

impl SmtpContactNotifier {
    pub fn new(settings: &EmailSettings) -> Result<Self, EmailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)?
                .port(settings.smtp_port);
        if let (Some(user), Some(pass)) = (&settings.smtp_user, &settings.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }
        Ok(Self {
            mailer: builder.build(),
            from_address: settings.from_address.clone(),
            to_address: settings.notify_address.clone(),
        })
    }

    fn build_message(
        &self,
        submission: &ContactSubmissionRecord,
    ) -> Result<Message, EmailError> {
        let body = format!(
            "Name: {}\nEmail: {}\nCompany: {}\n\n{}",
            submission.name, submission.email, submission.company, submission.message
        );
        Message::builder()
            .from(self.from_address.parse()?)
            .to(self.to_address.parse()?)
            .reply_to(submission.email.parse()?)
            .subject(format!("New contact enquiry from {}", submission.name))
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|err| EmailError::Build(err.to_string()))
    }
}

#[async_trait]
impl ContactNotifier for SmtpContactNotifier {
    /// Delivery failures are logged, not surfaced: the submission is already
    /// stored and the visitor should still see success.
    async fn notify(&self, submission: &ContactSubmissionRecord) {
        let message = match self.build_message(submission) {
            Ok(message) => message,
            Err(err) => {
                tracing::warn!(error = %err, "could not assemble contact notification");
                return;
            }
        };
        if let Err(err) = self.mailer.send(message).await {
            tracing::warn!(error = %err, "contact notification email failed");
        } else {
            tracing::info!(submission = %submission.id, "contact notification email sent");
        }
    }
}
