use crate::domain::ports::{Delivery, WebhookChannelBox};
use crate::domain::registration::RegistrationData;
use crate::error::RegistrationError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info, warn};

/// How long a delivery channel gets before the submission moves on without it.
pub const FALLBACK_WINDOW: Duration = Duration::from_secs(5);

/// Which delivery channels a submission goes through.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStrategy {
    /// A single fire-and-forget POST.
    Direct,
    /// A POST alongside a callback-confirmed GET, both bounded by [`FALLBACK_WINDOW`].
    #[default]
    #[serde(alias = "dual-channel")]
    Dual,
}

impl FromStr for SubmissionStrategy {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(SubmissionStrategy::Direct),
            "dual" | "dual-channel" => Ok(SubmissionStrategy::Dual),
            _ => Err(RegistrationError::InvalidStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for SubmissionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStrategy::Direct => f.write_str("direct"),
            SubmissionStrategy::Dual => f.write_str("dual"),
        }
    }
}

/// The message shown to the user once a submission has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Registered,
    Unverified,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Registered => "Registration successful!",
            Notice::Unverified => "Registration complete, unverified",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::Registered => "Your team has been registered for the event.",
            Notice::Unverified => {
                "Your registration was sent but the spreadsheet did not confirm it."
            }
        }
    }
}

/// Result of a submission. `proceed` is always `true`: delivery problems never
/// keep the user from their ID cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub delivered: bool,
    pub proceed: bool,
    pub notice: Notice,
}

impl SubmissionOutcome {
    fn new(delivered: bool) -> Self {
        Self {
            delivered,
            proceed: true,
            notice: if delivered {
                Notice::Registered
            } else {
                Notice::Unverified
            },
        }
    }
}

/// Delivers finalized registrations to the spreadsheet webhook.
///
/// Every channel error is logged and absorbed into the returned
/// [`SubmissionOutcome`]; `submit` itself cannot fail.
pub struct SubmissionDispatcher {
    direct: WebhookChannelBox,
    fallback: Option<WebhookChannelBox>,
    window: Duration,
}

impl SubmissionDispatcher {
    /// A dispatcher that only issues the direct request.
    pub fn direct(direct: WebhookChannelBox) -> Self {
        Self {
            direct,
            fallback: None,
            window: FALLBACK_WINDOW,
        }
    }

    /// A dispatcher that pairs the direct request with the callback fallback.
    pub fn dual_channel(direct: WebhookChannelBox, fallback: WebhookChannelBox) -> Self {
        Self {
            direct,
            fallback: Some(fallback),
            window: FALLBACK_WINDOW,
        }
    }

    /// Overrides the window each channel gets before it is abandoned.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn strategy(&self) -> SubmissionStrategy {
        if self.fallback.is_some() {
            SubmissionStrategy::Dual
        } else {
            SubmissionStrategy::Direct
        }
    }

    /// Submits through every configured channel, each bounded by the window.
    ///
    /// In dual mode the fallback runs alongside the direct request, so the
    /// caller never waits much longer than the window.
    pub async fn submit(&self, data: &RegistrationData) -> SubmissionOutcome {
        info!(
            team = %data.team_name,
            members = data.members.len(),
            strategy = %self.strategy(),
            "Submitting registration"
        );

        let Some(fallback) = &self.fallback else {
            return SubmissionOutcome::new(self.send_direct(data).await);
        };

        let (_, confirmed) = tokio::join!(
            self.send_direct(data),
            self.confirm(fallback, data)
        );
        SubmissionOutcome::new(confirmed)
    }

    async fn send_direct(&self, data: &RegistrationData) -> bool {
        match tokio::time::timeout(self.window, self.direct.deliver(data)).await {
            Ok(Ok(delivery)) => {
                info!(?delivery, "Form submission attempted");
                delivery != Delivery::Rejected
            }
            Ok(Err(e)) => {
                error!(error = %e, "Error submitting to spreadsheet");
                false
            }
            Err(_) => {
                warn!(
                    window_ms = self.window.as_millis() as u64,
                    "Direct submission timed out"
                );
                false
            }
        }
    }

    async fn confirm(&self, fallback: &WebhookChannelBox, data: &RegistrationData) -> bool {
        match tokio::time::timeout(self.window, fallback.deliver(data)).await {
            Ok(Ok(Delivery::Confirmed)) => {
                info!("Spreadsheet confirmed the registration");
                true
            }
            Ok(Ok(delivery)) => {
                warn!(?delivery, "Fallback submission was not confirmed");
                false
            }
            Ok(Err(e)) => {
                error!(error = %e, "Fallback submission failed");
                false
            }
            Err(_) => {
                warn!(
                    window_ms = self.window.as_millis() as u64,
                    "Fallback confirmation timed out"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::TeamMember;
    use crate::infrastructure::in_memory::RecordingChannel;

    fn registration() -> RegistrationData {
        RegistrationData {
            team_name: "Solo".to_string(),
            members: vec![TeamMember {
                full_name: "Asha".to_string(),
                roll_no: "2105001".to_string(),
                email: "asha@kiit.ac.in".to_string(),
                branch: "cse".to_string(),
                is_team_lead: true,
                ..TeamMember::default()
            }],
        }
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("direct".parse::<SubmissionStrategy>().unwrap(), SubmissionStrategy::Direct);
        assert_eq!("Dual".parse::<SubmissionStrategy>().unwrap(), SubmissionStrategy::Dual);
        assert!(matches!(
            "carrier-pigeon".parse::<SubmissionStrategy>(),
            Err(RegistrationError::InvalidStrategy(_))
        ));
        assert_eq!(SubmissionStrategy::default(), SubmissionStrategy::Dual);
    }

    #[tokio::test]
    async fn test_direct_submission_records_payload() {
        let channel = RecordingChannel::new(Delivery::Sent);
        let dispatcher = SubmissionDispatcher::direct(Box::new(channel.clone()));

        let outcome = dispatcher.submit(&registration()).await;

        assert!(outcome.delivered);
        assert!(outcome.proceed);
        assert_eq!(outcome.notice, Notice::Registered);
        assert_eq!(channel.submissions().await, vec![registration()]);
    }

    #[tokio::test]
    async fn test_direct_failure_still_proceeds() {
        let dispatcher = SubmissionDispatcher::direct(Box::new(RecordingChannel::failing()));

        let outcome = dispatcher.submit(&registration()).await;

        assert!(!outcome.delivered);
        assert!(outcome.proceed);
        assert_eq!(outcome.notice, Notice::Unverified);
    }

    #[tokio::test]
    async fn test_dual_channel_confirmation() {
        let direct = RecordingChannel::failing();
        let fallback = RecordingChannel::new(Delivery::Confirmed);
        let dispatcher =
            SubmissionDispatcher::dual_channel(Box::new(direct.clone()), Box::new(fallback.clone()));

        let outcome = dispatcher.submit(&registration()).await;

        assert!(outcome.delivered);
        assert_eq!(outcome.notice, Notice::Registered);
        assert_eq!(direct.submissions().await.len(), 1);
        assert_eq!(fallback.submissions().await.len(), 1);
    }

    #[tokio::test]
    async fn test_dual_channel_timeout_proceeds_unverified() {
        let fallback = RecordingChannel::delayed(Duration::from_secs(30), Delivery::Confirmed);
        let dispatcher = SubmissionDispatcher::dual_channel(
            Box::new(RecordingChannel::new(Delivery::Sent)),
            Box::new(fallback),
        )
        .with_window(Duration::from_millis(50));

        let started = std::time::Instant::now();
        let outcome = dispatcher.submit(&registration()).await;

        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(!outcome.delivered);
        assert!(outcome.proceed);
        assert_eq!(outcome.notice, Notice::Unverified);
    }

    #[tokio::test]
    async fn test_dual_channel_rejection_is_unverified() {
        let dispatcher = SubmissionDispatcher::dual_channel(
            Box::new(RecordingChannel::new(Delivery::Sent)),
            Box::new(RecordingChannel::new(Delivery::Rejected)),
        );

        let outcome = dispatcher.submit(&registration()).await;
        assert!(!outcome.delivered);
        assert!(outcome.proceed);
    }

    #[tokio::test]
    async fn test_hung_direct_channel_is_bounded() {
        let hung = RecordingChannel::delayed(Duration::from_secs(30), Delivery::Sent);
        let dispatcher =
            SubmissionDispatcher::direct(Box::new(hung)).with_window(Duration::from_millis(50));

        let started = std::time::Instant::now();
        let outcome = dispatcher.submit(&registration()).await;

        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(!outcome.delivered);
        assert!(outcome.proceed);
        assert_eq!(outcome.notice, Notice::Unverified);
    }

    #[tokio::test]
    async fn test_fallback_runs_alongside_hung_direct_channel() {
        let hung = RecordingChannel::delayed(Duration::from_secs(30), Delivery::Sent);
        let fallback = RecordingChannel::new(Delivery::Confirmed);
        let dispatcher =
            SubmissionDispatcher::dual_channel(Box::new(hung), Box::new(fallback.clone()))
                .with_window(Duration::from_millis(50));

        let started = std::time::Instant::now();
        let outcome = dispatcher.submit(&registration()).await;

        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(outcome.delivered);
        assert!(outcome.proceed);
        assert_eq!(fallback.submissions().await.len(), 1);
    }
}
