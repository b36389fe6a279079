use super::digest::{ActivationId, FetchOutcome};

/// All messages that can be sent through the FLTK channel.
/// Menu callbacks and the fetch worker send these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileQuit,
    WindowClose,

    // View
    ToggleDarkMode,

    // Digest
    Refresh,
    DigestClicked,
    DigestResolved(ActivationId, FetchOutcome),
}
