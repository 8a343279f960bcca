use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use bursar_core::{Email, MailTemplate, Mailer};

#[derive(Debug)]
struct QueuedMail {
    recipient: Email,
    template: MailTemplate,
    subject: String,
    context: Value,
}

/// Bounded fire-and-forget queue in front of a real mailer. `send` only
/// enqueues; a worker task drains the queue and delivers. Delivery failures
/// are logged and dropped, best effort with no retry. A full queue likewise
/// drops the message with a warning rather than applying backpressure to
/// the account flows.
#[derive(Clone)]
pub struct QueuedMailer {
    queue: mpsc::Sender<QueuedMail>,
}

impl QueuedMailer {
    /// Spawn the delivery worker over `inner` with the given queue depth.
    pub fn spawn<E>(inner: E, queue_depth: usize) -> Self
    where
        E: Mailer + 'static,
    {
        let (queue, mut receiver) = mpsc::channel::<QueuedMail>(queue_depth);
        let inner = Arc::new(inner);

        tokio::spawn(async move {
            while let Some(mail) = receiver.recv().await {
                if let Err(error) = inner
                    .send(&mail.recipient, mail.template, &mail.subject, mail.context)
                    .await
                {
                    tracing::warn!(%error, template = %mail.template, "email delivery failed");
                }
            }
        });

        Self { queue }
    }
}

#[async_trait::async_trait]
impl Mailer for QueuedMailer {
    async fn send(
        &self,
        recipient: &Email,
        template: MailTemplate,
        subject: &str,
        context: Value,
    ) -> Result<(), String> {
        self.queue
            .try_send(QueuedMail {
                recipient: recipient.clone(),
                template,
                subject: subject.to_owned(),
                context,
            })
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => "mail queue is full".to_owned(),
                mpsc::error::TrySendError::Closed(_) => "mail worker is gone".to_owned(),
            })
    }
}
