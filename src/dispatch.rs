//! Routing-intent de-duplication.
//!
//! Both the guard and the resolver hand their intents to an
//! [`IntentDispatcher`] instead of calling the surface directly. An intent
//! whose target is the location already on screen is dropped: the surface
//! would show no change, and a launching URL delivered twice (cold-start query
//! plus running listener) must not stack two identical history entries.

use crate::error::{NavigationError, NavigationResult};
use crate::intent::{IntentKind, NavigationIntent};
use crate::surface::RoutingSurface;
use crate::{error_log, trace_log};

/// What happened to a dispatched intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The surface performed the navigation
    Issued,
    /// The surface already shows the target
    Duplicate,
}

/// Submits intents to a routing surface, dropping no-op duplicates.
#[derive(Debug, Default)]
pub struct IntentDispatcher {
    last: Option<NavigationIntent>,
    issued: usize,
    skipped: usize,
}

impl IntentDispatcher {
    /// Create a dispatcher with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit `intent` to `surface`.
    ///
    /// Surface errors are logged and returned; nothing is retried.
    pub fn dispatch<S: RoutingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        intent: &NavigationIntent,
    ) -> Result<DispatchOutcome, NavigationError> {
        if surface.location().is_at(&intent.target) {
            trace_log!("Skipping {}: already showing '{}'", intent, intent.target);
            self.skipped += 1;
            return Ok(DispatchOutcome::Duplicate);
        }

        let result = match intent.kind {
            IntentKind::Push => surface.push(&intent.target),
            IntentKind::Replace => surface.replace(&intent.target),
        };

        match result {
            Ok(_) => {
                self.last = Some(intent.clone());
                self.issued += 1;
                Ok(DispatchOutcome::Issued)
            }
            Err(err) => {
                error_log!("Routing surface rejected {}: {}", intent, err);
                Err(err)
            }
        }
    }

    /// Dispatch and fold the outcome into a [`NavigationResult`].
    pub fn submit<S: RoutingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        intent: &NavigationIntent,
    ) -> NavigationResult {
        match self.dispatch(surface, intent) {
            Ok(DispatchOutcome::Issued) => NavigationResult::Issued {
                path: intent.target.clone(),
            },
            Ok(DispatchOutcome::Duplicate) => NavigationResult::Skipped {
                path: intent.target.clone(),
            },
            Err(err) => NavigationResult::Failed(err),
        }
    }

    /// The most recent intent that reached the surface.
    pub fn last_issued(&self) -> Option<&NavigationIntent> {
        self.last.as_ref()
    }

    /// Number of intents that reached the surface.
    pub fn issued_count(&self) -> usize {
        self.issued
    }

    /// Number of intents dropped as duplicates.
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RouterState;

    #[test]
    fn test_issues_new_target() {
        let mut surface = RouterState::at("/welcome");
        let mut dispatcher = IntentDispatcher::new();

        let outcome = dispatcher
            .dispatch(&mut surface, &NavigationIntent::push("property-detail/42"))
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Issued);
        assert_eq!(surface.current_path(), "property-detail/42");
        assert_eq!(
            dispatcher.last_issued(),
            Some(&NavigationIntent::push("property-detail/42"))
        );
    }

    #[test]
    fn test_back_to_back_replace_collapses() {
        let mut surface = RouterState::new();
        let mut dispatcher = IntentDispatcher::new();
        let intent = NavigationIntent::replace("/welcome");

        assert!(dispatcher.submit(&mut surface, &intent).is_issued());
        assert!(dispatcher.submit(&mut surface, &intent).is_skipped());
        assert_eq!(dispatcher.issued_count(), 1);
        assert_eq!(dispatcher.skipped_count(), 1);
    }

    #[test]
    fn test_repeated_push_does_not_stack_history() {
        let mut surface = RouterState::at("/(tabs)/home");
        let mut dispatcher = IntentDispatcher::new();
        let intent = NavigationIntent::push("property-detail/7");

        dispatcher.submit(&mut surface, &intent);
        dispatcher.submit(&mut surface, &intent);

        assert_eq!(surface.depth(), 2);
    }

    #[test]
    fn test_surface_error_is_returned() {
        let mut surface = RouterState::new();
        let mut dispatcher = IntentDispatcher::new();

        let result = dispatcher.submit(&mut surface, &NavigationIntent::push("bad path"));

        assert!(result.is_failed());
        assert!(dispatcher.last_issued().is_none());
    }
}
