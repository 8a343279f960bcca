use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use bursar_core::{Email, MailTemplate, Mailer};

/// A message as the mock captured it.
#[derive(Debug, Clone)]
pub struct RecordedMail {
    pub recipient: String,
    pub template: MailTemplate,
    pub subject: String,
    pub context: Value,
}

/// Mailer for tests: delivery always succeeds and every message is recorded,
/// so dispatch counts and contents are assertable.
#[derive(Debug, Clone, Default)]
pub struct MockMailer {
    sent: Arc<RwLock<Vec<RecordedMail>>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<RecordedMail> {
        self.sent.read().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait::async_trait]
impl Mailer for MockMailer {
    async fn send(
        &self,
        recipient: &Email,
        template: MailTemplate,
        subject: &str,
        context: Value,
    ) -> Result<(), String> {
        self.sent.write().await.push(RecordedMail {
            recipient: recipient.expose().to_owned(),
            template,
            subject: subject.to_owned(),
            context,
        });
        Ok(())
    }
}
