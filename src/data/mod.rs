//! Data persistence layer for Marksheet
//!
//! This module provides SQLite-based storage for student records.

mod models;
mod store;

pub use models::{AddError, Student, MAX_SCORE, MIN_SCORE};
pub use store::{Store, StoreError};
