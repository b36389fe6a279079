use serde::{Deserialize, Serialize};

/// One category's aggregated news content for one fetch snapshot.
///
/// `category` is used as a rendering key; uniqueness within a snapshot is the
/// service's responsibility and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestSection {
    pub category: String,
    pub paragraph: String,
}

impl DigestSection {
    pub fn new(category: impl Into<String>, paragraph: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            paragraph: paragraph.into(),
        }
    }
}

/// Observable state of one fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loading,
    Ready(Vec<DigestSection>),
    Failed(String),
}

impl FetchOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchOutcome::Loading)
    }

    /// Sections to render; empty unless the fetch succeeded.
    pub fn sections(&self) -> &[DigestSection] {
        match self {
            FetchOutcome::Ready(sections) => sections,
            _ => &[],
        }
    }
}

/// Identifies one activation of the digest view (initial load or a refresh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivationId(pub u64);
