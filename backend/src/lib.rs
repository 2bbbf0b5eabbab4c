//! String Service Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
/// Business logic
pub mod services;
/// Application state shared by request handlers
pub mod state;

pub use api::build_router;
