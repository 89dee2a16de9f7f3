//! Sequential identifier generation.
//!
//! Each record kind draws from its own [`IdSequence`], producing identifiers
//! like `C001`, `C002`, … . Numbers are never handed out twice by the same
//! sequence unless it is explicitly [`reset`](IdSequence::reset).

use serde::{Deserialize, Serialize};

/// Default zero-padding width of the numeric suffix.
pub const DEFAULT_WIDTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
  prefix: String,
  width:  usize,
  next:   u64,
}

impl IdSequence {
  /// A sequence starting at 1. The prefix is upper-cased so generated IDs
  /// round-trip through case-insensitive parsing.
  pub fn new(prefix: &str, width: usize) -> Self {
    Self {
      prefix: prefix.trim().to_uppercase(),
      width,
      next: 1,
    }
  }

  pub fn prefix(&self) -> &str { &self.prefix }

  /// The identifier the next call to [`next_id`](Self::next_id) will return.
  pub fn peek(&self) -> String { self.format(self.next) }

  /// Hand out the next identifier and advance the counter.
  pub fn next_id(&mut self) -> String {
    let id = self.format(self.next);
    self.next += 1;
    id
  }

  /// Restart numbering at 1.
  pub fn reset(&mut self) { self.next = 1; }

  fn format(&self, n: u64) -> String {
    format!("{}{:0width$}", self.prefix, n, width = self.width)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_padded_and_monotonic() {
    let mut seq = IdSequence::new("C", DEFAULT_WIDTH);
    assert_eq!(seq.next_id(), "C001");
    assert_eq!(seq.next_id(), "C002");
    assert_eq!(seq.peek(), "C003");
    assert_eq!(seq.next_id(), "C003");
  }

  #[test]
  fn prefix_is_normalised() {
    let mut seq = IdSequence::new(" j ", 2);
    assert_eq!(seq.prefix(), "J");
    assert_eq!(seq.next_id(), "J01");
  }

  #[test]
  fn overflowing_width_prints_full_number() {
    let mut seq = IdSequence::new("C", 1);
    for _ in 0..9 {
      seq.next_id();
    }
    assert_eq!(seq.next_id(), "C10");
  }

  #[test]
  fn reset_restarts_at_one() {
    let mut seq = IdSequence::new("J", DEFAULT_WIDTH);
    seq.next_id();
    seq.next_id();
    seq.reset();
    assert_eq!(seq.next_id(), "J001");
  }
}
