//! REST API client module for the DALU backend.
//!
//! `ApiClient` is the single authenticated request path every screen
//! goes through; `ApiError` is the caller-visible failure taxonomy.

pub mod client;
pub mod error;

pub use client::{ApiClient, Navigator};
pub use error::ApiError;
