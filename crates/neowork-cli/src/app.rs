//! Menu loop and the operations behind each menu entry.

use std::io::{self, BufRead, Write};

use neowork_core::{
  Error,
  matching::candidates_for_job,
  notify::{Notifier, contact_candidate},
  record::{CompanyId, Handle, JobId, NewCompany, NewJob, NewUser},
  skill::SkillSet,
  store::RecordStore,
};
use tracing::{debug, info, warn};

use crate::{
  menu::MenuChoice,
  prompt::{PromptError, Prompter},
  render,
  settings::Settings,
};

// ─── Action outcome ───────────────────────────────────────────────────────────

/// Why a menu action stopped early.
#[derive(Debug, thiserror::Error)]
enum ActionError {
  /// Reported to the operator; the session goes on.
  #[error(transparent)]
  Domain(#[from] Error),

  /// Stdin ended; the session ends.
  #[error("input closed")]
  Closed,

  #[error(transparent)]
  Io(#[from] io::Error),
}

impl From<PromptError> for ActionError {
  fn from(err: PromptError) -> Self {
    match err {
      PromptError::Closed => Self::Closed,
      PromptError::Io(e) => Self::Io(e),
    }
  }
}

type ActionResult = Result<(), ActionError>;

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state: the store, the outreach port and settings.
pub struct App<S, N> {
  store:    S,
  notifier: N,
  settings: Settings,
}

impl<S, N> App<S, N>
where
  S: RecordStore<Error = Error>,
  N: Notifier,
{
  pub fn new(store: S, notifier: N, settings: Settings) -> Self {
    Self {
      store,
      notifier,
      settings,
    }
  }

  #[cfg(test)]
  pub fn store(&self) -> &S { &self.store }

  /// Show the menu and handle choices until the operator exits or input ends.
  pub fn run<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> io::Result<()> {
    let width = self.settings.banner_width;

    loop {
      render::menu(prompter.out(), width)?;

      let answer = match prompter.line("Choose an option: ") {
        Ok(answer) => answer,
        Err(PromptError::Closed) => break,
        Err(PromptError::Io(e)) => return Err(e),
      };

      let Some(choice) = MenuChoice::parse(&answer) else {
        writeln!(prompter.out(), "Invalid option, try again.")?;
        continue;
      };
      if choice == MenuChoice::Exit {
        break;
      }

      debug!(?choice, "menu choice");
      match self.dispatch(choice, prompter) {
        Ok(()) => {}
        Err(ActionError::Domain(e)) => {
          warn!(error = %e, ?choice, "action rejected");
          writeln!(prompter.out(), "{}", render::error_message(&e))?;
        }
        Err(ActionError::Closed) => break,
        Err(ActionError::Io(e)) => return Err(e),
      }
    }

    writeln!(prompter.out())?;
    writeln!(prompter.out(), "Shutting down. See you soon!")
  }

  fn dispatch<R: BufRead, W: Write>(
    &mut self,
    choice: MenuChoice,
    p: &mut Prompter<R, W>,
  ) -> ActionResult {
    match choice {
      MenuChoice::RegisterUser => self.register_user(p),
      MenuChoice::RegisterCompany => self.register_company(p),
      MenuChoice::CreateJob => self.create_job(p),
      MenuChoice::ViewCandidates => self.view_candidates(p),
      MenuChoice::ContactCandidate => self.contact_candidate(p),
      MenuChoice::ListCompanies => self.list_companies_and_jobs(p),
      MenuChoice::ListUsers => self.list_users(p),
      MenuChoice::Exit => Ok(()),
    }
  }

  // ── Registration ──────────────────────────────────────────────────────────

  fn register_user<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> ActionResult {
    render::title(p.out(), "Register User", self.settings.banner_width)?;

    // Reject a taken handle before asking for the rest of the profile.
    let handle = Handle::parse(&p.required("Handle (unique): ")?)?;
    if self.store.get_user(&handle)?.is_some() {
      return Err(Error::DuplicateHandle(handle).into());
    }

    let full_name = p.required("Full name: ")?;
    let age = p.required("Age: ")?;
    let area = p.required("Area of expertise: ")?;
    let skills = SkillSet::parse(&p.required("Skills (comma-separated): ")?);
    let purpose = p.required("Professional purpose: ")?;

    let user = self.store.register_user(NewUser {
      handle,
      full_name,
      age,
      area,
      skills,
      purpose,
    })?;

    info!(handle = %user.handle, "user registered");
    writeln!(p.out())?;
    writeln!(p.out(), "User '{}' registered.", user.full_name)?;
    Ok(())
  }

  fn register_company<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> ActionResult {
    render::title(p.out(), "Register Company", self.settings.banner_width)?;

    let name = p.required("Company name: ")?;
    let sector = p.required("Sector: ")?;
    let description = p.required("Short description: ")?;

    let company = self.store.register_company(NewCompany {
      name,
      sector,
      description,
    })?;

    info!(company_id = %company.company_id, "company registered");
    writeln!(p.out())?;
    writeln!(
      p.out(),
      "Company '{}' registered. (ID: {})",
      company.name, company.company_id
    )?;
    Ok(())
  }

  // ── Jobs and matching ─────────────────────────────────────────────────────

  fn create_job<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> ActionResult {
    render::title(p.out(), "Create Job", self.settings.banner_width)?;

    let companies = self.store.list_companies()?;
    if companies.is_empty() {
      writeln!(p.out(), "No companies registered. Register one first.")?;
      return Ok(());
    }
    for company in &companies {
      render::company_line(p.out(), company)?;
    }

    let company_id = CompanyId::parse(&p.required("Company ID: ")?)?;
    if self.store.get_company(&company_id)?.is_none() {
      return Err(Error::CompanyNotFound(company_id).into());
    }

    let title = p.required("Job title: ")?;
    let description = p.required("Job description: ")?;
    let required_skills = SkillSet::parse(&p.required("Required skills (comma-separated): ")?);

    let job = self.store.create_job(NewJob {
      company_id,
      title,
      description,
      required_skills,
    })?;

    info!(job_id = %job.job_id, company_id = %job.company_id, "job created");
    writeln!(p.out())?;
    writeln!(p.out(), "Job '{}' created. (ID: {})", job.title, job.job_id)?;
    Ok(())
  }

  fn view_candidates<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> ActionResult {
    let width = self.settings.banner_width;
    render::title(p.out(), "View Candidates (automatic matching)", width)?;

    if self.store.list_users()?.is_empty() {
      writeln!(p.out(), "No users registered.")?;
      return Ok(());
    }
    let jobs = self.store.list_jobs()?;
    if jobs.is_empty() {
      writeln!(p.out(), "No jobs created.")?;
      return Ok(());
    }
    for job in &jobs {
      let company_name = self
        .store
        .get_company(&job.company_id)?
        .map(|c| c.name)
        .unwrap_or_default();
      render::job_line(p.out(), job, &company_name)?;
    }

    let job_id = JobId::parse(&p.required("Job ID to view candidates for: ")?)?;
    let report = candidates_for_job(&self.store, &job_id)?;

    debug!(
      job_id = %job_id,
      candidates = report.candidates.len(),
      "ranked candidates"
    );
    render::candidate_report(p.out(), &report, width)?;
    Ok(())
  }

  // ── Outreach ──────────────────────────────────────────────────────────────

  fn contact_candidate<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> ActionResult {
    render::title(p.out(), "Contact Candidate (simulation)", self.settings.banner_width)?;

    let companies = self.store.list_companies()?;
    if companies.is_empty() {
      writeln!(p.out(), "No companies registered.")?;
      return Ok(());
    }
    let users = self.store.list_users()?;
    if users.is_empty() {
      writeln!(p.out(), "No users registered.")?;
      return Ok(());
    }

    for company in &companies {
      render::company_line(p.out(), company)?;
    }
    let company_id = CompanyId::parse(&p.required("Company ID: ")?)?;
    if self.store.get_company(&company_id)?.is_none() {
      return Err(Error::CompanyNotFound(company_id).into());
    }

    for user in &users {
      render::user_line(p.out(), user)?;
    }
    let handle = Handle::parse(&p.required("Candidate handle: ")?)?;
    if self.store.get_user(&handle)?.is_none() {
      return Err(Error::UserNotFound(handle).into());
    }

    let body = p.required("Message for the candidate: ")?;
    let message = contact_candidate(&self.store, &self.notifier, &company_id, &handle, &body)?;

    writeln!(p.out())?;
    writeln!(
      p.out(),
      "Message sent from '{}' to '{}'.",
      message.company_name, message.recipient_name
    )?;
    writeln!(p.out(), "Content: {}", message.body)?;
    Ok(())
  }

  // ── Listings ──────────────────────────────────────────────────────────────

  fn list_companies_and_jobs<R: BufRead, W: Write>(
    &mut self,
    p: &mut Prompter<R, W>,
  ) -> ActionResult {
    render::title(p.out(), "Companies and Jobs", self.settings.banner_width)?;

    let companies = self.store.list_companies()?;
    if companies.is_empty() {
      writeln!(p.out(), "No companies registered.")?;
      return Ok(());
    }
    for company in &companies {
      let jobs = self.store.jobs_for_company(&company.company_id)?;
      render::company_with_jobs(p.out(), company, &jobs)?;
    }
    Ok(())
  }

  fn list_users<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> ActionResult {
    let width = self.settings.banner_width;
    render::title(p.out(), "Registered Users", width)?;

    let users = self.store.list_users()?;
    if users.is_empty() {
      writeln!(p.out(), "No users registered.")?;
      return Ok(());
    }
    for user in &users {
      render::user_profile(p.out(), user, width)?;
    }
    Ok(())
  }
}
