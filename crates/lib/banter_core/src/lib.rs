//! # banter_core
//!
//! Core relay logic for Banter.

pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod generate;
pub mod relay;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
