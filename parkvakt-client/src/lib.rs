//! # parkvakt-client
//!
//! The HTTP collaborator: fetches a park's live-status document and
//! extracts operating-attraction wait times from it. Everything here is
//! stateless; retry policy is simply "next tick".

pub mod error;
pub mod extract;
pub mod live_api;

pub use error::ClientError;
pub use extract::extract_observations;
pub use live_api::{LiveApiClient, LiveDataSource, LiveResponse};
