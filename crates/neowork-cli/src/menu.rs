//! The numbered main menu.

use strum::{Display, EnumIter, FromRepr};

/// One entry of the main menu. The discriminant is the number the operator
/// types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum MenuChoice {
  #[strum(to_string = "Register user")]
  RegisterUser = 1,
  #[strum(to_string = "Register company")]
  RegisterCompany,
  #[strum(to_string = "Create job")]
  CreateJob,
  #[strum(to_string = "View candidates (automatic matching)")]
  ViewCandidates,
  #[strum(to_string = "Contact candidate")]
  ContactCandidate,
  #[strum(to_string = "List companies and jobs")]
  ListCompanies,
  #[strum(to_string = "List users")]
  ListUsers,
  #[strum(to_string = "Exit")]
  Exit,
}

impl MenuChoice {
  pub fn number(self) -> u8 { self as u8 }

  /// Parse the operator's answer, e.g. `" 4 "`. Anything that is not one of
  /// the listed numbers yields `None`.
  pub fn parse(raw: &str) -> Option<Self> {
    raw.trim().parse::<u8>().ok().and_then(Self::from_repr)
  }
}
