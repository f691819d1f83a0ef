//! Typed model of the HTTP Archive (HAR) 1.2 format.
//!
//! The [`har`] module holds the schema along with thin `serde_json`
//! helpers for reading and writing documents.

pub mod error;
pub mod har;

pub use error::{Error, Result};
