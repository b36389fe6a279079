//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (DigestSection, FetchOutcome, Palette, Settings, Messages)
//! - `controllers/` - Orchestration (DigestController, ThemeController)
//! - `services/` - Business operations (colorizer, digest fetcher, presenter)
//! - `infrastructure/` - External integrations (preferences, platform, logging, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::digest::DigestController;
pub use controllers::theme::{ThemeController, ThemeTarget};
pub use domain::{ActivationId, AppSettings, DigestSection, FetchOutcome, LinkColor, Message, Palette, ThemeState};
pub use infrastructure::error::{AppError, FetchError};
pub use infrastructure::platform::detect_system_dark_mode;
pub use infrastructure::preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use services::colorizer::{Segment, colorize, colorize_with};
pub use services::digest_fetcher::DigestFetcher;
pub use services::presenter::{
    CategoryIcon, followed_link, link_targets, present_category, render_digest, summary_sentences,
};
