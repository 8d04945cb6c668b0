use super::registration::RegistrationData;
use crate::error::Result;
use async_trait::async_trait;

/// What a delivery channel could observe about a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The request left the client; the endpoint's answer is unreadable.
    Sent,
    /// The endpoint confirmed the row was written.
    Confirmed,
    /// The endpoint answered, but not with a success result.
    Rejected,
}

/// A way of getting a registration to the spreadsheet webhook.
#[async_trait]
pub trait WebhookChannel: Send + Sync {
    async fn deliver(&self, data: &RegistrationData) -> Result<Delivery>;
}

pub type WebhookChannelBox = Box<dyn WebhookChannel>;
