//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Digest sections and fetch outcomes
//! - Link palette and theme state
//! - Application settings
//! - Message types for the event system

pub mod digest;
pub mod messages;
pub mod palette;
pub mod settings;
pub mod theme;

pub use digest::{ActivationId, DigestSection, FetchOutcome};
pub use messages::Message;
pub use palette::{LinkColor, Palette};
pub use settings::AppSettings;
pub use theme::ThemeState;
