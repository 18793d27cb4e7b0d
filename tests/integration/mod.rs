//! Integration tests for the marks manager.
//!
//! Each test drives a full [`marksheet::App`] with key events and asserts
//! on the rendered buffer or the resulting student list.

#[path = "../common/mod.rs"]
pub mod common;

pub mod roster_render;
