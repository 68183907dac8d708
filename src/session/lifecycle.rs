//! Simulated delivery sequence for a sent message.
//!
//! After a send the user message moves `sending → sent → read` on timers and a
//! canned agent reply is appended after a random delay. Nothing is actually
//! delivered anywhere.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use super::controller::ChatSession;
use crate::config::LifecycleConfig;
use crate::directory::MessageStatus;

/// Delays for the simulated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleTiming {
    /// Delay from send until `sent`.
    pub sent_after: Duration,
    /// Lower bound of the reply delay, measured from send.
    pub reply_min: Duration,
    /// Upper bound of the reply delay, measured from send.
    pub reply_max: Duration,
    /// Delay from the reply until `read`.
    pub read_after: Duration,
}

impl Default for LifecycleTiming {
    fn default() -> Self {
        LifecycleConfig::default().timing()
    }
}

impl LifecycleTiming {
    /// Same delay for every step; handy for deterministic tests.
    #[must_use]
    pub fn fixed(sent_after: Duration, reply_after: Duration, read_after: Duration) -> Self {
        Self {
            sent_after,
            reply_min: reply_after,
            reply_max: reply_after,
            read_after,
        }
    }

    /// Pick a reply delay uniformly from `[reply_min, reply_max]`.
    #[must_use]
    pub fn reply_delay(&self) -> Duration {
        if self.reply_max <= self.reply_min {
            return self.reply_min;
        }
        rand::rng().random_range(self.reply_min..=self.reply_max)
    }
}

/// Text of the simulated agent reply.
#[must_use]
pub fn canned_reply(organization_name: &str) -> String {
    format!(
        "Thank you for contacting {organization_name}! I'm here to help you with any \
         questions or assistance you need. How can I help you today?"
    )
}

/// Drive one message through its sequence unless `token` is cancelled first.
///
/// `read` is only applied once both the `sent` step and the reply have run.
pub(super) async fn run(
    session: ChatSession,
    message_id: String,
    organization_name: String,
    token: CancellationToken,
) {
    let timing = session.timing();
    let reply_delay = timing.reply_delay();

    let sequence = async {
        let sent = async {
            sleep(timing.sent_after).await;
            session
                .set_status(&token, &message_id, MessageStatus::Sent)
                .await;
        };
        let reply = async {
            sleep(reply_delay).await;
            session
                .deliver_reply(&token, canned_reply(&organization_name))
                .await;
        };
        tokio::join!(sent, reply);

        sleep(timing.read_after).await;
        session
            .set_status(&token, &message_id, MessageStatus::Read)
            .await;
    };

    tokio::select! {
        () = token.cancelled() => {
            tracing::debug!(
                session_id = %session.id(),
                message_id = %message_id,
                "Delivery sequence cancelled"
            );
        }
        () = sequence => {
            tracing::debug!(
                session_id = %session.id(),
                message_id = %message_id,
                reply_delay = ?reply_delay,
                "Delivery sequence complete"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_delay_within_bounds() {
        let timing = LifecycleTiming::default();
        for _ in 0..100 {
            let delay = timing.reply_delay();
            assert!(delay >= Duration::from_secs(1));
            assert!(delay <= Duration::from_secs(3));
        }
    }

    #[test]
    fn test_fixed_reply_delay() {
        let timing = LifecycleTiming::fixed(
            Duration::from_millis(10),
            Duration::from_millis(20),
            Duration::from_millis(30),
        );
        assert_eq!(timing.reply_delay(), Duration::from_millis(20));
    }

    #[test]
    fn test_canned_reply_names_organization() {
        let reply = canned_reply("Metropolitan Bank");
        assert!(reply.starts_with("Thank you for contacting Metropolitan Bank!"));
        assert!(reply.ends_with("How can I help you today?"));
    }
}
