//! Runtime settings, layered from an optional TOML file and `NEOWORK_*`
//! environment variables.

use std::path::Path;

use anyhow::Context as _;
use neowork_core::ids::DEFAULT_WIDTH;
use neowork_store_memory::{DEFAULT_COMPANY_PREFIX, DEFAULT_JOB_PREFIX};
use serde::Deserialize;

/// Settings for one console session. Missing keys take their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub company_id_prefix: String,
  pub job_id_prefix:     String,
  /// Zero-padding width of generated identifiers.
  pub id_width:          usize,
  /// Width of the rules drawn under headings and between listing entries.
  pub banner_width:      usize,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      company_id_prefix: DEFAULT_COMPANY_PREFIX.to_owned(),
      job_id_prefix:     DEFAULT_JOB_PREFIX.to_owned(),
      id_width:          DEFAULT_WIDTH,
      banner_width:      65,
    }
  }
}

impl Settings {
  /// Read `path` if it exists, then overlay the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("NEOWORK"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    settings
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}
