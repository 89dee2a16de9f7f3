//! Error types for `neowork-core`.

use thiserror::Error;

use crate::record::{CompanyId, Handle, JobId};

#[derive(Debug, Error)]
pub enum Error {
  #[error("a user with handle '{0}' already exists")]
  DuplicateHandle(Handle),

  #[error("company not found: {0}")]
  CompanyNotFound(CompanyId),

  #[error("job not found: {0}")]
  JobNotFound(JobId),

  #[error("user not found: {0}")]
  UserNotFound(Handle),

  #[error("{0} cannot be empty")]
  EmptyField(&'static str),

  /// One identifier prefix starts with the other, so a company and a job
  /// could be issued the same identifier.
  #[error("company id prefix {company:?} and job id prefix {job:?} overlap")]
  IdPrefixClash { company: String, job: String },

  #[error("notification error: {0}")]
  Notify(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
