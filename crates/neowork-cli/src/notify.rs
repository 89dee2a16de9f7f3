//! Notifier used by the console app: contact messages become log events.

use std::convert::Infallible;

use neowork_core::notify::{ContactMessage, Notifier};
use tracing::info;

/// Records each contact message as an `info` event and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
  type Error = Infallible;

  fn deliver(&self, message: &ContactMessage) -> Result<(), Self::Error> {
    info!(
      company_id = %message.company_id,
      recipient = %message.recipient,
      sent_at = %message.sent_at,
      body = %message.body,
      "contact message delivered"
    );
    Ok(())
  }
}
