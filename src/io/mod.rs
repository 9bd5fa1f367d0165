//! File formats for model metadata, scored samples and feature batches
//!
//! Everything is JSON. Bin edge sentinels are written as `"-inf"` and
//! `"inf"` since JSON has no infinity literal.

mod load;
mod metadata;
mod save;

pub use load::{load_batch, load_metadata, load_scored_samples, parse_batch};
pub use metadata::ModelMetadata;
pub use save::{save_json, save_metadata};
