use crate::domain::ports::{Delivery, WebhookChannel};
use crate::domain::registration::RegistrationData;
use crate::error::{RegistrationError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy)]
enum Reply {
    Answer(Delivery),
    Fail,
}

/// A webhook channel that keeps submissions in memory instead of sending them.
///
/// Uses `Arc<RwLock<Vec<RegistrationData>>>` so clones share the same log.
/// Backs `--dry-run` and stands in for the spreadsheet in tests.
#[derive(Clone)]
pub struct RecordingChannel {
    submissions: Arc<RwLock<Vec<RegistrationData>>>,
    reply: Reply,
    delay: Option<Duration>,
}

impl RecordingChannel {
    /// A channel that records every submission and answers with `delivery`.
    pub fn new(delivery: Delivery) -> Self {
        Self {
            submissions: Arc::default(),
            reply: Reply::Answer(delivery),
            delay: None,
        }
    }

    /// A channel that records every submission and then reports a network failure.
    pub fn failing() -> Self {
        Self {
            reply: Reply::Fail,
            ..Self::new(Delivery::Sent)
        }
    }

    /// A channel that waits `delay` before answering.
    pub fn delayed(delay: Duration, delivery: Delivery) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(delivery)
        }
    }

    pub async fn submissions(&self) -> Vec<RegistrationData> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl WebhookChannel for RecordingChannel {
    async fn deliver(&self, data: &RegistrationData) -> Result<Delivery> {
        self.submissions.write().await.push(data.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.reply {
            Reply::Answer(delivery) => Ok(delivery),
            Reply::Fail => Err(RegistrationError::DeliveryError(
                "network unreachable".to_string(),
            )),
        }
    }
}
