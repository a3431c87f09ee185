//! # Core Module
//!
//! Configuration shared by the library and the bot binary.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.7.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Owner ids and reply prefixes in config
//! - 1.0.0: Initial creation with config module

pub mod config;

pub use config::Config;
