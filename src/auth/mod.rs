//! Session and credential management.
//!
//! This module provides:
//! - `Session` / `SessionData`: the token + identity + tenant record
//! - `SessionStore`: injectable storage capability (file-backed in
//!   production, in-memory in tests)
//! - `CredentialStore`: optional remember-me storage via the OS keychain
//!
//! Sessions persist across runs and carry no expiry timestamp; the API
//! client invalidates them when the backend answers 401.

pub mod credentials;
pub mod session;
pub mod store;

pub use credentials::CredentialStore;
pub use session::{Session, SessionData, KEY_ACCESS_TOKEN, KEY_EMPRESA_ID, KEY_USUARIO};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
