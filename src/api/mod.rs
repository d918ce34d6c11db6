//! Host-facing API
//!
//! Thin dispatch over the [`ConfigStore`](crate::store::ConfigStore). Nothing
//! here ever returns an error to the host.

pub mod backend;
pub mod outcome;

pub use backend::{Backend, CommitPolicy};
pub use outcome::Outcome;
