//! Monitor configuration and CLI argument types
//!
//! A [`MonitorSpec`] carries the business cut-offs used by threshold
//! selection and drift monitoring. Every field has a default, so an empty
//! file is a valid configuration.

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    parse_args, CalibrateArgs, Cli, Command, DriftArgs, EvaluateArgs, OutputFormat, ValidateArgs,
};
pub use loader::{load_spec, parse_spec, ConfigFormat};
pub use schema::MonitorSpec;
pub use validate::{validate_spec, ValidationError};
