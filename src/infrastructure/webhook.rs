use crate::domain::ports::{Delivery, WebhookChannel};
use crate::domain::registration::RegistrationData;
use crate::error::{RegistrationError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Posts the registration as a form to the spreadsheet webhook.
///
/// The endpoint's reply is never inspected: once the request completes at the
/// transport level the registration counts as [`Delivery::Sent`].
#[derive(Debug, Clone)]
pub struct DirectPostChannel {
    client: reqwest::Client,
    url: String,
}

impl DirectPostChannel {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl WebhookChannel for DirectPostChannel {
    async fn deliver(&self, data: &RegistrationData) -> Result<Delivery> {
        let response = self
            .client
            .post(&self.url)
            .form(&data.form_fields())
            .send()
            .await?;
        debug!(status = %response.status(), "Direct submission sent");
        Ok(Delivery::Sent)
    }
}

/// Sends the registration as a query string with a `callback` parameter and
/// reads the endpoint's callback-wrapped answer.
///
/// Each attempt gets its own callback name, derived from the current time.
#[derive(Debug, Clone)]
pub struct CallbackChannel {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct CallbackPayload {
    result: String,
}

impl CallbackChannel {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

pub fn callback_name() -> String {
    format!("trapped_cb_{}", chrono::Utc::now().timestamp_millis())
}

/// Extracts the result from `name({...})`, `name({...});` or a bare JSON body.
pub fn parse_callback_body(callback: &str, body: &str) -> Result<Delivery> {
    let body = body.trim();
    let json = body
        .strip_prefix(callback)
        .and_then(|rest| rest.trim_start().strip_prefix('('))
        .map(|rest| rest.trim_end().trim_end_matches(';').trim_end())
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(body);

    let payload: CallbackPayload = serde_json::from_str(json)?;
    if payload.result == "success" {
        Ok(Delivery::Confirmed)
    } else {
        Ok(Delivery::Rejected)
    }
}

#[async_trait]
impl WebhookChannel for CallbackChannel {
    async fn deliver(&self, data: &RegistrationData) -> Result<Delivery> {
        let callback = callback_name();
        let mut query = data.form_fields();
        query.push(("callback".to_string(), callback.clone()));

        let body = self
            .client
            .get(&self.url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!(%callback, bytes = body.len(), "Callback response received");

        parse_callback_body(&callback, &body).map_err(|e| {
            RegistrationError::DeliveryError(format!("unreadable callback response: {e}"))
        })
    }
}
