//! Shared test helpers: app fixtures on temporary databases, synthetic
//! key events, and TestBackend rendering utilities.

pub mod terminal;
