//! NewsDigest: a native viewer for the daily per-category news digest.

pub mod app;
pub mod ui;
