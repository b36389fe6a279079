//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Platform color-scheme detection
//! - Durable preference storage
//! - Logging setup
//! - Error types

pub mod error;
pub mod logging;
pub mod platform;
pub mod preferences;
