//! Tool configuration
//!
//! Configuration comes from two places with a fixed precedence: connection
//! settings arrive through command-line flags and their backing environment
//! variables, while an optional settings file customizes the extracted
//! metrics and report output location, and may carry fallback connection
//! settings for fixed installations. Everything is an explicit value handed
//! to constructors; nothing reads the environment after startup.

mod config;

pub use config::{Config, Connection};
