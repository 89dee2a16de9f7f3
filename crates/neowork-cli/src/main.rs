//! `neowork` — console app connecting people and companies by skill overlap.
//!
//! # Usage
//!
//! ```text
//! neowork
//! neowork --config neowork.toml -v
//! neowork --company-prefix E --job-prefix V
//! ```
//!
//! All records live in memory and are lost on exit. Choosing "Exit" or
//! closing stdin prints a farewell; Ctrl-C ends the process at once through
//! the default signal handling, without a farewell, losing nothing beyond
//! those in-memory records.

mod app;
mod menu;
mod notify;
mod prompt;
mod render;
mod settings;


use std::{io, path::PathBuf};

use anyhow::Context as _;
use app::App;
use clap::{ArgAction, Parser};
use neowork_core::ids::IdSequence;
use neowork_store_memory::MemoryStore;
use notify::TracingNotifier;
use prompt::Prompter;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "neowork",
  version,
  about = "Connect people and companies by skill overlap",
  after_help = "Records are kept in memory only. Ctrl-C quits immediately without a farewell."
)]
struct Args {
  /// Path to an optional TOML settings file.
  #[arg(short, long, value_name = "FILE", default_value = "neowork.toml")]
  config: PathBuf,

  /// Prefix of generated company IDs (default: C).
  #[arg(long)]
  company_prefix: Option<String>,

  /// Prefix of generated job IDs (default: J).
  #[arg(long)]
  job_prefix: Option<String>,

  /// Zero-padding width of generated IDs (default: 3).
  #[arg(long)]
  id_width: Option<usize>,

  /// Log more to stderr (-v info, -vv debug). `RUST_LOG` takes precedence.
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  init_tracing(args.verbose);

  let mut settings = Settings::load(&args.config)?;

  // CLI flags override the config file and environment.
  if let Some(prefix) = args.company_prefix {
    settings.company_id_prefix = prefix;
  }
  if let Some(prefix) = args.job_prefix {
    settings.job_id_prefix = prefix;
  }
  if let Some(width) = args.id_width {
    settings.id_width = width;
  }
  tracing::debug!(?settings, "settings loaded");

  let store = MemoryStore::with_sequences(
    IdSequence::new(&settings.company_id_prefix, settings.id_width),
    IdSequence::new(&settings.job_id_prefix, settings.id_width),
  )
  .context("invalid identifier settings")?;

  let mut app = App::new(store, TracingNotifier, settings);
  let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
  app.run(&mut prompter).context("console session failed")?;

  Ok(())
}

/// Log to stderr so events never interleave with the menu on stdout.
fn init_tracing(verbose: u8) {
  let default = match verbose {
    0 => LevelFilter::WARN,
    1 => LevelFilter::INFO,
    _ => LevelFilter::DEBUG,
  };
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();
}
