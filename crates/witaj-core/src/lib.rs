//! # witaj-core
//!
//! Core types, traits, configuration, and error handling for the witaj backend.

pub mod config;
pub mod error;
pub mod greeting;
pub mod lang;
pub mod traits;

pub use config::shellexpand;
