//! Churnguard: cost-based decision thresholds and drift monitoring for churn models
//!
//! Two components sit between a probability model and the retention team:
//!
//! - [`eval::threshold`] picks the probability cut-off that minimises the
//!   expected business cost of missed churners and wasted retention offers.
//! - [`eval::drift`] compares incoming feature batches with the distribution
//!   captured at training time using the Population Stability Index.
//!
//! ```no_run
//! use churnguard::eval::{compute_drift, CostModel, ScoredSample, SeverityThresholds};
//! use churnguard::io::{load_batch, load_metadata};
//!
//! let samples = vec![
//!     ScoredSample::new("c1", true, 0.82),
//!     ScoredSample::new("c2", false, 0.14),
//! ];
//! let result = churnguard::eval::select(&samples, &CostModel::churn_economics(500.0, 50.0), 100)?;
//! println!("contact customers scoring >= {:.3}", result.threshold);
//!
//! let metadata = load_metadata("model.json")?;
//! let report = compute_drift(&metadata.reference, &load_batch("batch.json")?, &SeverityThresholds::default())?;
//! println!("severe drift: {}", report.any_severe);
//! # Ok::<(), churnguard::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod io;
pub mod report;

pub use error::{Error, Result};
