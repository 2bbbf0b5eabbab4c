//! Service layer for business logic
//!
//! This module contains service abstractions that separate business logic
//! from endpoints and HTTP handlers, making the code more modular and testable.

pub mod strings;

pub use strings::{BasicStringService, StringService, StringServiceError};
