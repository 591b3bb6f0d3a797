//! Core types and utilities for the oracle price-feed agent
//!
//! This crate provides shared types used across all components:
//! - Price observation and feed status types
//! - The pair registry (name -> upstream feed identifier)
//! - Feed configuration
//! - Error taxonomy

pub mod config;
pub mod errors;
pub mod registry;
pub mod types;

pub use config::*;
pub use errors::*;
pub use registry::*;
pub use types::*;
