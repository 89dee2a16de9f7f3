//! Plain-text rendering of menus, records and reports.

use std::io::{self, Write};

use neowork_core::{
  Error,
  matching::CandidateReport,
  record::{Company, Job, User},
};
use strum::IntoEnumIterator as _;

use crate::menu::MenuChoice;

// ─── Layout ───────────────────────────────────────────────────────────────────

/// A heading framed by `=` rules.
pub fn title(out: &mut impl Write, text: &str, width: usize) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "{}", "=".repeat(width))?;
  writeln!(out, "  {text}")?;
  writeln!(out, "{}", "=".repeat(width))
}

pub fn rule(out: &mut impl Write, width: usize) -> io::Result<()> {
  writeln!(out, "{}", "-".repeat(width))
}

pub fn menu(out: &mut impl Write, width: usize) -> io::Result<()> {
  title(out, "NEOWORK - Connecting People and Companies", width)?;
  for choice in MenuChoice::iter() {
    writeln!(out, "{}. {choice}", choice.number())?;
  }
  Ok(())
}

// ─── Records ──────────────────────────────────────────────────────────────────

/// `C001 - Acme (Technology)`
pub fn company_line(out: &mut impl Write, company: &Company) -> io::Result<()> {
  writeln!(
    out,
    "{} - {} ({})",
    company.company_id, company.name, company.sector
  )
}

/// `J001 - Data Analyst (Acme)`
pub fn job_line(out: &mut impl Write, job: &Job, company_name: &str) -> io::Result<()> {
  writeln!(out, "{} - {} ({company_name})", job.job_id, job.title)
}

/// `- ana : Ana Souza (Data)`
pub fn user_line(out: &mut impl Write, user: &User) -> io::Result<()> {
  writeln!(out, "- {} : {} ({})", user.handle, user.full_name, user.area)
}

/// A company followed by its openings.
pub fn company_with_jobs(out: &mut impl Write, company: &Company, jobs: &[Job]) -> io::Result<()> {
  writeln!(out)?;
  writeln!(
    out,
    "{} ({}) - {}",
    company.name, company.sector, company.description
  )?;
  if jobs.is_empty() {
    return writeln!(out, "   No jobs registered.");
  }
  for job in jobs {
    writeln!(out, "   [{}] {} - {}", job.job_id, job.title, job.required_skills)?;
  }
  Ok(())
}

/// Name, area, skills and purpose of a user.
pub fn user_profile(out: &mut impl Write, user: &User, width: usize) -> io::Result<()> {
  writeln!(out, "{} ({})", user.full_name, user.area)?;
  writeln!(out, "   Skills: {}", user.skills)?;
  writeln!(out, "   Purpose: {}", user.purpose)?;
  rule(out, width)
}

// ─── Reports ──────────────────────────────────────────────────────────────────

pub fn candidate_report(
  out: &mut impl Write,
  report: &CandidateReport,
  width: usize,
) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "Company: {}", report.company_name)?;
  writeln!(out, "Job: {}", report.job.title)?;
  writeln!(out, "Required skills: {}", report.job.required_skills)?;
  rule(out, width)?;

  if report.candidates.is_empty() {
    return writeln!(out, "No candidates with compatible skills.");
  }

  for candidate in &report.candidates {
    let user = &candidate.user;
    writeln!(
      out,
      "{} ({}) - Compatibility: {:.1}%",
      user.full_name, user.area, candidate.score
    )?;
    writeln!(out, "   Skills: {}", user.skills)?;
    writeln!(out, "   Purpose: {}", user.purpose)?;
    rule(out, width)?;
  }
  Ok(())
}

// ─── Errors ───────────────────────────────────────────────────────────────────

/// The operator-facing wording of a recoverable error.
pub fn error_message(err: &Error) -> String {
  match err {
    Error::DuplicateHandle(_) => "A user with that handle already exists.".into(),
    Error::CompanyNotFound(_) => "Company not found.".into(),
    Error::JobNotFound(_) => "Job not found.".into(),
    Error::UserNotFound(_) => "Candidate not found.".into(),
    Error::EmptyField(field) => format!("The {field} cannot be empty."),
    other => format!("Error: {other}"),
  }
}
