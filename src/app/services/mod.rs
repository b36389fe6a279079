//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Paragraph colorization
//! - Digest fetching
//! - Digest presentation

pub mod colorizer;
pub mod digest_fetcher;
pub mod presenter;
