//! Shared configuration and bootstrap utilities for the Bangla LMS server
//!
//! This crate provides functionality used across server modules:
//! - Configuration types loaded from the process environment
//! - Logging initialization

pub mod config;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, Environment, JwtConfig, LogFormat, LoggingConfig};
