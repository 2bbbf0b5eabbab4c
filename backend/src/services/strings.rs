//! String service
//!
//! Pure string operations with no side effects. Endpoints are built on top of
//! the [`StringService`] trait, never on the concrete type.

use thiserror::Error;

/// Errors returned by string operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringServiceError {
    /// The input string was empty
    #[error("Empty String")]
    EmptyInput,
}

/// Operations offered by the string service
pub trait StringService: Send + Sync {
    /// Convert `s` to uppercase
    ///
    /// # Returns
    /// * `Ok(String)` - The uppercased input
    /// * `Err(StringServiceError::EmptyInput)` - If `s` is empty
    fn uppercase(&self, s: &str) -> Result<String, StringServiceError>;

    /// Length of `s` in bytes of its UTF-8 encoding
    fn count(&self, s: &str) -> usize;
}

/// Stateless [`StringService`] implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStringService;

impl StringService for BasicStringService {
    fn uppercase(&self, s: &str) -> Result<String, StringServiceError> {
        if s.is_empty() {
            return Err(StringServiceError::EmptyInput);
        }
        Ok(s.to_uppercase())
    }

    fn count(&self, s: &str) -> usize {
        s.len()
    }
}
