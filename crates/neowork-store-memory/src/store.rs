//! [`MemoryStore`] — the in-memory implementation of [`RecordStore`].

use std::collections::HashMap;

use chrono::Utc;
use neowork_core::{
  Error, Result,
  ids::{DEFAULT_WIDTH, IdSequence},
  record::{Company, CompanyId, Handle, Job, JobId, NewCompany, NewJob, NewUser, User},
  store::RecordStore,
};
use tracing::debug;

pub const DEFAULT_COMPANY_PREFIX: &str = "C";
pub const DEFAULT_JOB_PREFIX: &str = "J";

// ─── Table ───────────────────────────────────────────────────────────────────

/// Records in registration order plus a key index into them.
#[derive(Debug)]
struct Table<K, V> {
  rows:  Vec<V>,
  index: HashMap<K, usize>,
}

impl<K: std::hash::Hash + Eq, V: Clone> Table<K, V> {
  fn new() -> Self {
    Self {
      rows:  Vec::new(),
      index: HashMap::new(),
    }
  }

  fn contains(&self, key: &K) -> bool { self.index.contains_key(key) }

  fn get(&self, key: &K) -> Option<V> {
    self.index.get(key).map(|&i| self.rows[i].clone())
  }

  fn insert(&mut self, key: K, row: V) {
    self.index.insert(key, self.rows.len());
    self.rows.push(row);
  }

  fn clear(&mut self) {
    self.rows.clear();
    self.index.clear();
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A record store held entirely in memory.
///
/// Owned by a single caller; writes take `&mut self`.
#[derive(Debug)]
pub struct MemoryStore {
  users:       Table<Handle, User>,
  companies:   Table<CompanyId, Company>,
  jobs:        Table<JobId, Job>,
  company_ids: IdSequence,
  job_ids:     IdSequence,
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::from_parts(
      IdSequence::new(DEFAULT_COMPANY_PREFIX, DEFAULT_WIDTH),
      IdSequence::new(DEFAULT_JOB_PREFIX, DEFAULT_WIDTH),
    )
  }
}

impl MemoryStore {
  /// An empty store issuing `C001`-style company and `J001`-style job IDs.
  pub fn new() -> Self { Self::default() }

  /// An empty store drawing identifiers from the given sequences.
  ///
  /// Fails if either prefix starts with the other (`C` and `C0` would both
  /// be able to issue `C001`).
  pub fn with_sequences(company_ids: IdSequence, job_ids: IdSequence) -> Result<Self> {
    let (company, job) = (company_ids.prefix(), job_ids.prefix());
    if company.starts_with(job) || job.starts_with(company) {
      return Err(Error::IdPrefixClash {
        company: company.to_owned(),
        job:     job.to_owned(),
      });
    }
    Ok(Self::from_parts(company_ids, job_ids))
  }

  fn from_parts(company_ids: IdSequence, job_ids: IdSequence) -> Self {
    Self {
      users: Table::new(),
      companies: Table::new(),
      jobs: Table::new(),
      company_ids,
      job_ids,
    }
  }

  /// Drop every record and restart both identifier sequences.
  pub fn reset(&mut self) {
    self.users.clear();
    self.companies.clear();
    self.jobs.clear();
    self.company_ids.reset();
    self.job_ids.reset();
    debug!("store reset");
  }

  pub fn user_count(&self) -> usize { self.users.rows.len() }

  pub fn company_count(&self) -> usize { self.companies.rows.len() }

  pub fn job_count(&self) -> usize { self.jobs.rows.len() }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for MemoryStore {
  type Error = Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  fn register_user(&mut self, input: NewUser) -> Result<User> {
    if self.users.contains(&input.handle) {
      return Err(Error::DuplicateHandle(input.handle));
    }

    let user = User {
      handle:     input.handle,
      full_name:  input.full_name,
      age:        input.age,
      area:       input.area,
      skills:     input.skills,
      purpose:    input.purpose,
      created_at: Utc::now(),
    };
    self.users.insert(user.handle.clone(), user.clone());

    debug!(handle = %user.handle, skills = %user.skills, "registered user");
    Ok(user)
  }

  fn get_user(&self, handle: &Handle) -> Result<Option<User>> { Ok(self.users.get(handle)) }

  fn list_users(&self) -> Result<Vec<User>> { Ok(self.users.rows.clone()) }

  // ── Companies ─────────────────────────────────────────────────────────────

  fn register_company(&mut self, input: NewCompany) -> Result<Company> {
    let company = Company {
      company_id:  CompanyId::parse(&self.company_ids.next_id())?,
      name:        input.name,
      sector:      input.sector,
      description: input.description,
      created_at:  Utc::now(),
    };
    self
      .companies
      .insert(company.company_id.clone(), company.clone());

    debug!(company_id = %company.company_id, name = %company.name, "registered company");
    Ok(company)
  }

  fn get_company(&self, id: &CompanyId) -> Result<Option<Company>> { Ok(self.companies.get(id)) }

  fn list_companies(&self) -> Result<Vec<Company>> { Ok(self.companies.rows.clone()) }

  // ── Jobs ──────────────────────────────────────────────────────────────────

  fn create_job(&mut self, input: NewJob) -> Result<Job> {
    // Check the owner before drawing an ID so a rejected job leaves no gap.
    if !self.companies.contains(&input.company_id) {
      return Err(Error::CompanyNotFound(input.company_id));
    }

    let job = Job {
      job_id:          JobId::parse(&self.job_ids.next_id())?,
      company_id:      input.company_id,
      title:           input.title,
      description:     input.description,
      required_skills: input.required_skills,
      created_at:      Utc::now(),
    };
    self.jobs.insert(job.job_id.clone(), job.clone());

    debug!(
      job_id = %job.job_id,
      company_id = %job.company_id,
      skills = %job.required_skills,
      "created job"
    );
    Ok(job)
  }

  fn get_job(&self, id: &JobId) -> Result<Option<Job>> { Ok(self.jobs.get(id)) }

  fn list_jobs(&self) -> Result<Vec<Job>> { Ok(self.jobs.rows.clone()) }

  fn jobs_for_company(&self, company_id: &CompanyId) -> Result<Vec<Job>> {
    Ok(
      self
        .jobs
        .rows
        .iter()
        .filter(|j| &j.company_id == company_id)
        .cloned()
        .collect(),
    )
  }
}
