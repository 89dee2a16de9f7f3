//! Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
  /// The input stream ended before an answer was given.
  #[error("input closed")]
  Closed,

  #[error("i/o error: {0}")]
  Io(#[from] io::Error),
}

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
  input:  R,
  output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
  pub fn new(input: R, output: W) -> Self { Self { input, output } }

  /// The writer prompts and results are printed to.
  pub fn out(&mut self) -> &mut W { &mut self.output }

  #[cfg(test)]
  pub fn into_output(self) -> W { self.output }

  /// Print `label` and read one trimmed line, which may be empty.
  ///
  /// Bytes that are not valid UTF-8 become `U+FFFD` instead of failing.
  pub fn line(&mut self, label: &str) -> Result<String, PromptError> {
    write!(self.output, "{label}")?;
    self.output.flush()?;

    let mut buf = Vec::new();
    if self.input.read_until(b'\n', &mut buf)? == 0 {
      return Err(PromptError::Closed);
    }
    Ok(String::from_utf8_lossy(&buf).trim().to_owned())
  }

  /// Like [`line`](Self::line), but asks again until the answer is not blank.
  pub fn required(&mut self, label: &str) -> Result<String, PromptError> {
    loop {
      let answer = self.line(label)?;
      if !answer.is_empty() {
        return Ok(answer);
      }
      writeln!(self.output, "This field cannot be empty.")?;
    }
  }
}
