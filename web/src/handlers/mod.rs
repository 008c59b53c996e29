//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by domain.

pub mod books;
pub mod health;
pub mod reports;

// Re-export common handler utilities
pub use health::health_check;
