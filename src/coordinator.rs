//! Ties the guard, the resolver and a routing surface together.
//!
//! [`NavigationCoordinator`] is the single place events enter the navigation
//! core. Every handler runs to completion before the next one starts, so the
//! guard always sees a consistent `(auth, location)` pair.
//!
//! Ordering when a link arrives:
//!
//! 1. the resolver's push is dispatched,
//! 2. the guard is told a deep link navigated,
//! 3. the guard evaluates the new location and corrects it if needed.
//!
//! # Example
//!
//! ```
//! use homi_navigator::{AuthState, NavigationConfig, NavigationCoordinator, RouterState};
//! use homi_navigator::links::LinkEvent;
//!
//! let mut nav = NavigationCoordinator::new(RouterState::new(), NavigationConfig::default());
//! assert!(nav.should_show_loading());
//!
//! nav.set_auth_state(AuthState::signed_out());
//! assert_eq!(nav.surface().current_path(), "/welcome");
//!
//! nav.handle_link(LinkEvent::Activated("homi://property-detail/42".into()));
//! assert_eq!(nav.surface().current_path(), "/welcome");
//! ```

use crate::auth::AuthState;
use crate::config::NavigationConfig;
use crate::deep_link::DeepLinkResolver;
use crate::dispatch::IntentDispatcher;
use crate::error::NavigationResult;
use crate::guards::{GuardDecision, NavigationGuard};
use crate::links::{LinkEvent, LinkReceiver};
use crate::surface::RoutingSurface;
use crate::{debug_log, warn_log};

/// Outcome of handling one link event.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkHandled {
    /// What happened to the link's own push
    pub link: NavigationResult,
    /// What the guard did on the resulting location
    pub guard: NavigationResult,
}

/// Single entry point for auth changes, route changes and link events.
pub struct NavigationCoordinator<S: RoutingSurface> {
    surface: S,
    config: NavigationConfig,
    guard: NavigationGuard,
    resolver: DeepLinkResolver,
    dispatcher: IntentDispatcher,
    auth: AuthState,
}

impl<S: RoutingSurface> NavigationCoordinator<S> {
    /// Create a coordinator in the restoring state.
    pub fn new(surface: S, config: NavigationConfig) -> Self {
        Self {
            guard: config.build_guard(),
            resolver: config.build_resolver(),
            surface,
            config,
            dispatcher: IntentDispatcher::new(),
            auth: AuthState::restoring(),
        }
    }

    /// The routing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for hosts that navigate on their own (tabs, back
    /// button). Call [`route_changed`](Self::route_changed) afterwards.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The guard.
    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    /// The latest auth snapshot.
    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// The configuration this coordinator was built from.
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// The dispatcher, for its counters.
    pub fn dispatcher(&self) -> &IntentDispatcher {
        &self.dispatcher
    }

    /// Whether the loading placeholder should replace the screen tree.
    pub fn should_show_loading(&self) -> bool {
        self.guard.should_show_loading()
    }

    /// A new auth snapshot was published.
    pub fn set_auth_state(&mut self, auth: AuthState) -> NavigationResult {
        self.auth = auth;
        if self.guard.observe_auth(&self.auth) {
            debug_log!("Auth epoch boundary; guard latch reset");
        }
        self.evaluate_guard()
    }

    /// The surface's location changed for a reason the coordinator did not
    /// cause.
    pub fn route_changed(&mut self) -> NavigationResult {
        self.evaluate_guard()
    }

    /// Resolve and dispatch one link, then let the guard correct it.
    pub fn handle_link(&mut self, event: LinkEvent) -> LinkHandled {
        let Some(intent) = self.resolver.resolve(&event) else {
            return LinkHandled {
                link: NavigationResult::Ignored,
                guard: NavigationResult::Ignored,
            };
        };

        let link = self.dispatcher.submit(&mut self.surface, &intent);
        if !link.is_issued() {
            return LinkHandled {
                link,
                guard: NavigationResult::Ignored,
            };
        }

        self.guard.note_deep_link();
        let guard = self.evaluate_guard();
        LinkHandled { link, guard }
    }

    /// Handle every link event that is ready. Returns how many were handled.
    pub fn pump_links(&mut self, receiver: &mut LinkReceiver) -> usize {
        let events = receiver.drain_ready();
        let count = events.len();
        for event in events {
            self.handle_link(event);
        }
        count
    }

    /// Replace the guard with a fresh one, as if the app had just started,
    /// and evaluate it against the current snapshot.
    pub fn remount_guard(&mut self) -> NavigationResult {
        debug_log!("Remounting navigation guard");
        self.guard = self.config.build_guard();
        self.evaluate_guard()
    }

    fn evaluate_guard(&mut self) -> NavigationResult {
        let location = self.surface.location();
        let decision = self.guard.evaluate(&self.auth, &location);
        let GuardDecision::Redirect(intent) = decision else {
            return NavigationResult::Ignored;
        };

        let result = self.dispatcher.submit(&mut self.surface, &intent);
        if result.is_issued() || result.is_skipped() {
            self.guard.commit_redirect();
        } else {
            warn_log!(
                "Guard redirect to '{}' not applied; next change re-evaluates",
                intent.target
            );
        }
        result
    }
}

impl<S: RoutingSurface + std::fmt::Debug> std::fmt::Debug for NavigationCoordinator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationCoordinator")
            .field("surface", &self.surface)
            .field("guard", &self.guard)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}
