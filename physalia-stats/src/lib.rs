//! Statistical methods for the Physalia sequence-comparison workspace.
//!
//! - **Descriptive statistics** — mean, population variance and standard deviation
//! - **Normalization** — percent-of-maximum and z-score transforms for
//!   similarity maps produced by the windowed aligner

pub mod descriptive;
pub mod normalization;

pub use descriptive::{mean, std_dev, variance};
pub use normalization::{percent_of_max, zscores};
