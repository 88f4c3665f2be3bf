//! # Review Inference
//!
//! Sample reviews from a tab-separated corpus and classify them with hosted
//! Hugging Face inference endpoints.
#![forbid(unsafe_code)]

/// Errors
pub mod error;

/// Configuration
pub mod config;

/// Datasets
pub mod datasets;

/// Hosted models
pub mod models;

/// Pipelines
pub mod pipelines;

/// Inference client
pub mod inference;

/// Sessions and view state
pub mod session;

/// Utilities
pub mod utils;

/// CLI commands
pub mod cli;

pub use error::{Error, Resource, Result};
