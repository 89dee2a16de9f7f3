//! Candidate outreach through a pluggable notification port.
//!
//! Contacting a candidate builds a [`ContactMessage`] and hands it to a
//! [`Notifier`]. No real delivery mechanism ships with this crate; front-ends
//! supply their own (the console app logs the message).

use std::convert::Infallible;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
  Error, Result,
  record::{CompanyId, Handle},
  store::RecordStore,
};

/// A message from a company to a registered candidate.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
  pub company_id:     CompanyId,
  pub company_name:   String,
  pub recipient:      Handle,
  pub recipient_name: String,
  pub body:           String,
  pub sent_at:        DateTime<Utc>,
}

/// Delivery port for [`ContactMessage`]s.
pub trait Notifier {
  type Error: std::error::Error + Send + Sync + 'static;

  fn deliver(&self, message: &ContactMessage) -> Result<(), Self::Error>;
}

/// A notifier that accepts and discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
  type Error = Infallible;

  fn deliver(&self, _message: &ContactMessage) -> Result<(), Self::Error> { Ok(()) }
}

/// Send `body` from `company_id` to the user registered as `handle`.
///
/// Both ends must exist and the body must not be blank. Returns the message
/// that was handed to `notifier`.
pub fn contact_candidate<S, N>(
  store: &S,
  notifier: &N,
  company_id: &CompanyId,
  handle: &Handle,
  body: &str,
) -> Result<ContactMessage>
where
  S: RecordStore,
  N: Notifier,
{
  let company = store
    .get_company(company_id)
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or_else(|| Error::CompanyNotFound(company_id.clone()))?;

  let user = store
    .get_user(handle)
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or_else(|| Error::UserNotFound(handle.clone()))?;

  let body = body.trim();
  if body.is_empty() {
    return Err(Error::EmptyField("message"));
  }

  let message = ContactMessage {
    company_id:     company.company_id,
    company_name:   company.name,
    recipient:      user.handle,
    recipient_name: user.full_name,
    body:           body.to_owned(),
    sent_at:        Utc::now(),
  };

  notifier
    .deliver(&message)
    .map_err(|e| Error::Notify(Box::new(e)))?;

  Ok(message)
}
