//! The `RecordStore` trait.
//!
//! Implemented by storage backends (e.g. `neowork-store-memory`). The matching
//! engine and the console front-end depend on this abstraction, not on any
//! concrete backend.

use crate::record::{
  Company, CompanyId, Handle, Job, JobId, NewCompany, NewJob, NewUser, User,
};

/// Abstraction over a store of users, companies and jobs.
///
/// Records are append-only: nothing is updated or deleted once registered.
/// Every listing returns records in the order they were registered.
pub trait RecordStore {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Register a user. Fails if the handle is already taken; the existing
  /// registration is left untouched.
  fn register_user(&mut self, input: NewUser) -> Result<User, Self::Error>;

  fn get_user(&self, handle: &Handle) -> Result<Option<User>, Self::Error>;

  fn list_users(&self) -> Result<Vec<User>, Self::Error>;

  // ── Companies ─────────────────────────────────────────────────────────

  /// Register a company under the next identifier of the company sequence.
  fn register_company(&mut self, input: NewCompany) -> Result<Company, Self::Error>;

  fn get_company(&self, id: &CompanyId) -> Result<Option<Company>, Self::Error>;

  fn list_companies(&self) -> Result<Vec<Company>, Self::Error>;

  // ── Jobs ──────────────────────────────────────────────────────────────

  /// Create a job for an existing company.
  ///
  /// Fails if `input.company_id` does not resolve; in that case no job is
  /// stored and no job identifier is consumed.
  fn create_job(&mut self, input: NewJob) -> Result<Job, Self::Error>;

  fn get_job(&self, id: &JobId) -> Result<Option<Job>, Self::Error>;

  fn list_jobs(&self) -> Result<Vec<Job>, Self::Error>;

  /// Jobs owned by `company_id`, in creation order.
  fn jobs_for_company(&self, company_id: &CompanyId) -> Result<Vec<Job>, Self::Error> {
    Ok(
      self
        .list_jobs()?
        .into_iter()
        .filter(|j| &j.company_id == company_id)
        .collect(),
    )
  }
}
