//! Records held by the store: users, companies and jobs.
//!
//! Records are immutable once registered. Identifiers are normalised on
//! construction, so two spellings of the same handle or ID compare equal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, skill::SkillSet};

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// The unique, lower-cased identifier of a registered individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
  /// Trim and lower-case `raw`. Fails on blank input.
  pub fn parse(raw: &str) -> Result<Self> {
    let handle = raw.trim().to_lowercase();
    if handle.is_empty() {
      return Err(Error::EmptyField("handle"));
    }
    Ok(Self(handle))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

/// A company identifier such as `C001`. Parsed case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyId(String);

impl CompanyId {
  /// Trim and upper-case `raw`. Fails on blank input.
  pub fn parse(raw: &str) -> Result<Self> {
    let id = raw.trim().to_uppercase();
    if id.is_empty() {
      return Err(Error::EmptyField("company id"));
    }
    Ok(Self(id))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

/// A job identifier such as `J001`. Parsed case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

impl JobId {
  /// Trim and upper-case `raw`. Fails on blank input.
  pub fn parse(raw: &str) -> Result<Self> {
    let id = raw.trim().to_uppercase();
    if id.is_empty() {
      return Err(Error::EmptyField("job id"));
    }
    Ok(Self(id))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

macro_rules! string_id_conversions {
  ($($ty:ident),*) => {
    $(
      impl TryFrom<String> for $ty {
        type Error = Error;
        fn try_from(raw: String) -> Result<Self> { Self::parse(&raw) }
      }

      impl From<$ty> for String {
        fn from(id: $ty) -> Self { id.0 }
      }

      impl fmt::Display for $ty {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
      }
    )*
  };
}

string_id_conversions!(Handle, CompanyId, JobId);

// ─── User ────────────────────────────────────────────────────────────────────

/// A registered professional profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub handle:     Handle,
  pub full_name:  String,
  /// Free text; not validated as a number.
  pub age:        String,
  pub area:       String,
  pub skills:     SkillSet,
  pub purpose:    String,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::register_user`].
#[derive(Debug, Clone)]
pub struct NewUser {
  pub handle:    Handle,
  pub full_name: String,
  pub age:       String,
  pub area:      String,
  pub skills:    SkillSet,
  pub purpose:   String,
}

// ─── Company ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
  pub company_id:  CompanyId,
  pub name:        String,
  pub sector:      String,
  pub description: String,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::register_company`]. The store
/// assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewCompany {
  pub name:        String,
  pub sector:      String,
  pub description: String,
}

// ─── Job ─────────────────────────────────────────────────────────────────────

/// A posted opening. `company_id` resolved to an existing company when the
/// job was created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
  pub job_id:          JobId,
  pub company_id:      CompanyId,
  pub title:           String,
  pub description:     String,
  pub required_skills: SkillSet,
  pub created_at:      DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::create_job`].
#[derive(Debug, Clone)]
pub struct NewJob {
  pub company_id:      CompanyId,
  pub title:           String,
  pub description:     String,
  pub required_skills: SkillSet,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn handle_is_lowercased_and_trimmed() {
    let h = Handle::parse("  Ada.Lovelace ").unwrap();
    assert_eq!(h.as_str(), "ada.lovelace");
    assert_eq!(h, Handle::parse("ADA.LOVELACE").unwrap());
  }

  #[test]
  fn blank_handle_is_rejected() {
    assert!(matches!(Handle::parse("   "), Err(Error::EmptyField("handle"))));
  }

  #[test]
  fn ids_are_uppercased() {
    assert_eq!(CompanyId::parse(" c001").unwrap().as_str(), "C001");
    assert_eq!(JobId::parse("j012 ").unwrap().to_string(), "J012");
  }

  #[test]
  fn blank_ids_are_rejected() {
    assert!(matches!(CompanyId::parse(""), Err(Error::EmptyField("company id"))));
    assert!(matches!(JobId::parse(" "), Err(Error::EmptyField("job id"))));
  }

  #[test]
  fn ids_serialise_as_plain_strings() {
    let id = CompanyId::parse("c007").unwrap();
    assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("C007"));

    let parsed: Handle = serde_json::from_str("\"Grace\"").unwrap();
    assert_eq!(parsed.as_str(), "grace");
    assert!(serde_json::from_str::<Handle>("\"  \"").is_err());
  }
}
