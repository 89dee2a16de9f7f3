//! In-memory backend for the neowork record store.
//!
//! Everything lives in process memory and is gone when the process exits.

mod store;

pub use store::{DEFAULT_COMPANY_PREFIX, DEFAULT_JOB_PREFIX, MemoryStore};
