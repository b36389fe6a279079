//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Digest activations and fetch outcomes
//! - Theme initialization and persistence

pub mod digest;
pub mod theme;
