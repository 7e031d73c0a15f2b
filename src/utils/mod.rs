//! Utility functions for display formatting.

pub mod format;

pub use format::{format_fecha, format_money, format_optional, truncate};
