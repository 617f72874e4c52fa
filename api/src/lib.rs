//! Client for the clinic content API.
//!
//! Every read endpoint answers with the same envelope, `{ success, data }`, where
//! `data` is either one record or a list of records. The wire records in
//! [`records`] are deliberately loose (every field optional) so that a partially
//! filled CMS entry still decodes; turning them into display models is the UI
//! crate's job.

mod client;
mod endpoint;
mod envelope;
mod error;
pub mod feedback;
pub mod records;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use envelope::{Envelope, Payload};
pub use error::{ApiError, FailureKind};
pub use feedback::{FeedbackSubmission, ValidationError};

/// Base URL used when the deployment does not configure one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
