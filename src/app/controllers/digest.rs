use crate::app::domain::{ActivationId, FetchOutcome};

/// Fetch state of the digest panel across activations.
///
/// Each activation owns exactly one fetch. A result is accepted only for the
/// current activation and only while it is still loading, so late or
/// duplicate deliveries are ignored writes.
#[derive(Debug)]
pub struct DigestController {
    next_id: u64,
    current: Option<ActivationId>,
    outcome: FetchOutcome,
}

impl Default for DigestController {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestController {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            current: None,
            outcome: FetchOutcome::Loading,
        }
    }

    /// Start a fresh activation; the caller dispatches its fetch.
    pub fn activate(&mut self) -> ActivationId {
        let id = ActivationId(self.next_id);
        self.next_id += 1;
        if let Some(previous) = self.current.replace(id) {
            tracing::debug!(previous = previous.0, "superseding activation");
        }
        self.outcome = FetchOutcome::Loading;
        tracing::info!(activation = id.0, "digest activation started");
        id
    }

    /// Tear the panel down. Results still in flight will be dropped.
    pub fn deactivate(&mut self) {
        self.current = None;
    }

    /// Apply a fetch result. Returns false when it was ignored.
    pub fn resolve(&mut self, id: ActivationId, outcome: FetchOutcome) -> bool {
        if self.current != Some(id) {
            tracing::debug!(activation = id.0, "dropping result for stale activation");
            return false;
        }
        if !self.outcome.is_loading() {
            tracing::warn!(activation = id.0, "activation already resolved");
            return false;
        }
        if outcome.is_loading() {
            return false;
        }
        self.outcome = outcome;
        true
    }

    pub fn current(&self) -> Option<ActivationId> {
        self.current
    }

    pub fn outcome(&self) -> &FetchOutcome {
        &self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::DigestSection;

    fn ready() -> FetchOutcome {
        FetchOutcome::Ready(vec![DigestSection::new("Tech", "Something happened.")])
    }

    #[test]
    fn test_activation_starts_loading() {
        let mut controller = DigestController::new();
        let id = controller.activate();
        assert_eq!(controller.current(), Some(id));
        assert!(controller.outcome().is_loading());
    }

    #[test]
    fn test_single_terminal_transition() {
        let mut controller = DigestController::new();
        let id = controller.activate();
        assert!(controller.resolve(id, ready()));
        assert!(!controller.resolve(id, FetchOutcome::Failed("late".to_string())));
        assert_eq!(controller.outcome(), &ready());
    }

    #[test]
    fn test_stale_activation_is_ignored() {
        let mut controller = DigestController::new();
        let first = controller.activate();
        let second = controller.activate();
        assert_ne!(first, second);

        assert!(!controller.resolve(first, ready()));
        assert!(controller.outcome().is_loading());

        assert!(controller.resolve(second, FetchOutcome::Failed("boom".to_string())));
        assert_eq!(controller.outcome(), &FetchOutcome::Failed("boom".to_string()));
    }

    #[test]
    fn test_result_after_teardown_is_ignored() {
        let mut controller = DigestController::new();
        let id = controller.activate();
        controller.deactivate();
        assert!(!controller.resolve(id, ready()));
        assert_eq!(controller.current(), None);
    }

    #[test]
    fn test_new_activation_forgets_previous_outcome() {
        let mut controller = DigestController::new();
        let id = controller.activate();
        controller.resolve(id, ready());
        controller.activate();
        assert!(controller.outcome().is_loading());
        assert!(controller.outcome().sections().is_empty());
    }

    #[test]
    fn test_empty_ready_is_terminal() {
        let mut controller = DigestController::new();
        let id = controller.activate();
        assert!(controller.resolve(id, FetchOutcome::Ready(Vec::new())));
        assert_eq!(controller.outcome(), &FetchOutcome::Ready(Vec::new()));
    }
}
