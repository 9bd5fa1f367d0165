//! Configuration validation
//!
//! Checks a monitor configuration for out-of-range values before use.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::validate_spec;
