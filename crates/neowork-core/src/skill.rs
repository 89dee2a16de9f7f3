//! Skill tags and normalised skill sets.
//!
//! A skill tag is a trimmed, lower-cased string. A [`SkillSet`] holds each tag
//! at most once and remembers the order tags were first given in, so listings
//! echo skills back the way they were entered.

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

/// A normalised, de-duplicated set of skill tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
  tags: Vec<String>,
}

impl SkillSet {
  /// An empty set.
  pub fn new() -> Self { Self::default() }

  /// Parse a comma-separated list such as `"Python, SQL ,,excel"`.
  pub fn parse(raw: &str) -> Self { raw.split(',').collect() }

  /// Add one tag, normalising it first. Blank and duplicate tags are ignored.
  /// Returns `true` if the set grew.
  pub fn insert(&mut self, tag: &str) -> bool {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() || self.tags.contains(&tag) {
      return false;
    }
    self.tags.push(tag);
    true
  }

  pub fn contains(&self, tag: &str) -> bool {
    let tag = tag.trim().to_lowercase();
    self.tags.iter().any(|t| *t == tag)
  }

  pub fn len(&self) -> usize { self.tags.len() }

  pub fn is_empty(&self) -> bool { self.tags.is_empty() }

  /// Tags in first-seen order.
  pub fn iter(&self) -> impl Iterator<Item = &str> { self.tags.iter().map(String::as_str) }

  /// Number of tags present in both sets.
  pub fn intersection_len(&self, other: &SkillSet) -> usize {
    let theirs: HashSet<&str> = other.iter().collect();
    self.iter().filter(|t| theirs.contains(t)).count()
  }

  /// Number of distinct tags present in either set.
  pub fn union_len(&self, other: &SkillSet) -> usize {
    self.len() + other.len() - self.intersection_len(other)
  }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    let mut set = Self::new();
    for tag in iter {
      set.insert(tag.as_ref());
    }
    set
  }
}

impl From<Vec<String>> for SkillSet {
  fn from(tags: Vec<String>) -> Self { tags.into_iter().collect() }
}

impl From<SkillSet> for Vec<String> {
  fn from(set: SkillSet) -> Self { set.tags }
}

impl fmt::Display for SkillSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.tags.join(", "))
  }
}
