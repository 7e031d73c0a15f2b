//! dalu-cli - a terminal client for the DALU small-business bookkeeping API.
//!
//! The crate centers on [`api::ApiClient`]: every backend call attaches
//! the stored bearer token, normalizes application errors into typed
//! failures, and invalidates the session on a 401 before anything else
//! can happen. The rest is thin: a persisted session store, typed
//! payload models, and one command handler per backend screen.

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod utils;
