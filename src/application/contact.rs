//! Contact form intake: validation, storage and the optional notification.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::error::AppError;
use crate::application::repos::{ContactRepo, NewContactParams};
use crate::domain::entities::ContactSubmissionRecord;

/// Outbound notification seam; the mail adapter lives in infra and a
/// deployment without SMTP simply wires `None`.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmissionRecord);
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

pub struct ContactService {
    repo: Arc<dyn ContactRepo>,
    notifier: Option<Arc<dyn ContactNotifier>>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepo>, notifier: Option<Arc<dyn ContactNotifier>>) -> Self {
        Self { repo, notifier }
    }

    pub async fn submit(&self, form: ContactForm) -> Result<ContactSubmissionRecord, AppError> {
        let name = form.name.trim();
        let email = form.email.trim();
        let message = form.message.trim();

        if name.is_empty() {
            return Err(AppError::validation("name is required"));
        }
        if message.is_empty() {
            return Err(AppError::validation("message is required"));
        }
        if !looks_like_email(email) {
            return Err(AppError::validation("a valid email address is required"));
        }

        let record = self
            .repo
            .insert(NewContactParams {
                name: name.to_string(),
                email: email.to_string(),
                company: form.company.trim().to_string(),
                message: message.to_string(),
            })
            .await?;

        if let Some(notifier) = &self.notifier {
            notifier.notify(&record).await;
        }

        Ok(record)
    }
}

/// Coarse shape check; deliverability is the mail server's problem.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
