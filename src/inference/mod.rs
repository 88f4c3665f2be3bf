/// HTTP transport seam
pub mod transport;

/// Request construction and response validation
pub mod client;

/// Runs a pipeline task end to end
pub mod analyzer;

pub use analyzer::Analyzer;
pub use client::{Client, InferenceRequest};
pub use transport::{HttpResponse, HttpTransport, Transport};
