use crate::app::domain::ThemeState;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::preferences::PreferenceStore;

/// Preference key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Anything carrying the root light/dark marker.
pub trait ThemeTarget {
    fn set_dark(&mut self, dark: bool);
}

/// Where the initial state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
    Default,
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    state: ThemeState,
    source: ThemeSource,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the initial state: stored value, then OS preference, then light.
    ///
    /// `system_prefers_dark` is only consulted when nothing is stored. Nothing
    /// is written to the store here.
    pub fn initialize(store: S, system_prefers_dark: impl FnOnce() -> bool) -> Self {
        let (state, source) = match store.get(THEME_KEY) {
            Some(stored) => {
                let state = ThemeState::parse(&stored).unwrap_or_else(|| {
                    tracing::warn!(value = %stored, "unrecognized stored theme, rendering light");
                    ThemeState::Light
                });
                (state, ThemeSource::Stored)
            }
            None if system_prefers_dark() => (ThemeState::Dark, ThemeSource::System),
            None => (ThemeState::Light, ThemeSource::Default),
        };
        tracing::info!(theme = %state, ?source, "theme initialized");
        Self { store, state, source }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn is_dark(&self) -> bool {
        self.state.is_dark()
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn apply(&self, target: &mut impl ThemeTarget) {
        target.set_dark(self.is_dark());
    }

    /// Flip the theme, mark `target` and persist the new state.
    ///
    /// The marker and the in-memory state change even if the write fails; the
    /// error is returned so the caller can report it.
    pub fn toggle(&mut self, target: &mut impl ThemeTarget) -> Result<ThemeState> {
        self.state = self.state.toggled();
        self.source = ThemeSource::Stored;
        tracing::info!(theme = %self.state, "theme toggled");
        self.apply(target);
        self.store.set(THEME_KEY, self.state.as_str())?;
        Ok(self.state)
    }
}
