//! Retraining advisory
//!
//! Turns a [`DriftReport`](crate::eval::drift::DriftReport) into a
//! recommendation. Scheduling the retrain itself is left to the caller.

mod advice;
mod policy;


pub use advice::RetrainAdvice;
pub use policy::RetrainPolicy;
