//! Core types and trait definitions for neowork.
//!
//! This crate has no I/O. Storage backends implement [`store::RecordStore`];
//! front-ends drive the store and call into [`matching`] and [`notify`].

pub mod error;
pub mod ids;
pub mod matching;
pub mod notify;
pub mod record;
pub mod skill;
pub mod store;

pub use error::{Error, Result};
