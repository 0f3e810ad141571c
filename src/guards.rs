//! The authentication navigation guard.
//!
//! [`NavigationGuard`] decides, each time the auth snapshot or the route
//! location changes, whether the user is looking at a screen consistent with
//! their session. It is a small state machine:
//!
//! ```text
//!            isLoading=false                 isAuthenticated flips
//! RESTORING ─────────────────▶ ACTIVE(epoch n) ─────────────────────▶ ACTIVE(epoch n+1)
//!                               │ latch: NOT_YET_REDIRECTED
//!                               │   └─ redirect issued ─▶ REDIRECTED
//! ```
//!
//! - While restoring, the guard never redirects and asks for the loading
//!   placeholder instead.
//! - Within one epoch at most one redirect is issued; later evaluations are
//!   suppressed by the latch. [`NavigationGuard::evaluate`] only proposes a
//!   redirect. The latch is set by [`NavigationGuard::commit_redirect`] once
//!   the routing surface accepted it.
//! - An epoch boundary is an explicit transition inside the guard: the
//!   previous latch is dropped and a fresh one starts at
//!   `NOT_YET_REDIRECTED`.
//!
//! # Rules (latch not yet set)
//!
//! | Session         | Top-level segment | Decision                 |
//! |-----------------|-------------------|--------------------------|
//! | authenticated   | public            | `replace(home)`          |
//! | unauthenticated | protected         | `replace(welcome)`       |
//! | any             | none (first paint)| `replace(home/welcome)`  |
//! | any             | anything else     | stay                     |
//!
//! A segment classified both public and protected is protected.
//!
//! # Deep links
//!
//! A deep link pushes its screen without consulting the latch. The
//! coordinator then calls [`NavigationGuard::note_deep_link`], which lets the
//! next evaluation bypass the latch once, so an unauthenticated user who
//! followed a link to a protected screen is still sent to the welcome screen.
//!
//! # Example
//!
//! ```
//! use homi_navigator::{AuthState, GuardDecision, NavigationGuard, RouteLocation};
//!
//! let mut guard = NavigationGuard::default();
//! let location = RouteLocation::new(["(tabs)", "home"]);
//!
//! assert_eq!(guard.evaluate(&AuthState::restoring(), &location), GuardDecision::ShowLoading);
//!
//! let decision = guard.evaluate(&AuthState::signed_out(), &location);
//! assert_eq!(decision.intent().map(|i| i.target.as_str()), Some("/welcome"));
//! ```

use crate::auth::AuthState;
use crate::intent::NavigationIntent;
use crate::screen::{RouteAccess, RouteClassification};
use crate::state::RouteLocation;
use crate::{debug_log, info_log, trace_log};

/// Default redirect target for authenticated sessions.
pub const HOME_PATH: &str = "/(tabs)/home";

/// Default redirect target for unauthenticated sessions.
pub const WELCOME_PATH: &str = "/welcome";

// ============================================================================
// Latch and phase
// ============================================================================

/// One-redirect-per-epoch latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardLatch {
    epoch: u64,
    redirected: bool,
}

impl GuardLatch {
    fn fresh(epoch: u64) -> Self {
        Self {
            epoch,
            redirected: false,
        }
    }

    /// Epoch this latch belongs to. Epochs start at 1.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether this epoch's redirect has been spent.
    pub fn is_redirected(&self) -> bool {
        self.redirected
    }
}

/// Where the guard is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPhase {
    /// Session restoration in progress
    Restoring,
    /// Session known; `authenticated` is constant for the whole epoch
    Active {
        authenticated: bool,
        latch: GuardLatch,
    },
}

/// Result of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Still restoring; show the loading placeholder
    ShowLoading,
    /// Navigate away from an inconsistent screen
    Redirect(NavigationIntent),
    /// The current screen is consistent with the session
    Stay,
    /// This epoch's redirect was already issued
    Suppressed,
}

impl GuardDecision {
    /// The redirect, if this decision carries one.
    pub fn intent(&self) -> Option<&NavigationIntent> {
        match self {
            GuardDecision::Redirect(intent) => Some(intent),
            _ => None,
        }
    }

    /// Check if this decision redirects.
    pub fn is_redirect(&self) -> bool {
        matches!(self, GuardDecision::Redirect(_))
    }
}

// ============================================================================
// NavigationGuard
// ============================================================================

/// Keeps the rendered screen consistent with the authentication state.
///
/// Owns its latch exclusively. Creating a new guard (remounting) starts over
/// from [`GuardPhase::Restoring`], exactly as at cold start.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    classification: RouteClassification,
    home_path: String,
    welcome_path: String,
    phase: GuardPhase,
    epochs: u64,
    deep_link_pending: bool,
}

impl NavigationGuard {
    /// Create a guard over `classification` with the default targets.
    pub fn new(classification: RouteClassification) -> Self {
        Self {
            classification,
            home_path: HOME_PATH.to_string(),
            welcome_path: WELCOME_PATH.to_string(),
            phase: GuardPhase::Restoring,
            epochs: 0,
            deep_link_pending: false,
        }
    }

    /// Override the redirect targets.
    #[must_use]
    pub fn with_targets(mut self, home: impl Into<String>, welcome: impl Into<String>) -> Self {
        self.home_path = home.into();
        self.welcome_path = welcome.into();
        self
    }

    /// Current phase.
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    /// Current epoch, or `None` while restoring.
    pub fn epoch(&self) -> Option<u64> {
        match self.phase {
            GuardPhase::Restoring => None,
            GuardPhase::Active { latch, .. } => Some(latch.epoch()),
        }
    }

    /// Whether the screen tree should be replaced by the loading placeholder.
    pub fn should_show_loading(&self) -> bool {
        matches!(self.phase, GuardPhase::Restoring)
    }

    /// The table this guard classifies segments with.
    pub fn classification(&self) -> &RouteClassification {
        &self.classification
    }

    /// Record that a deep link just navigated.
    ///
    /// The next active evaluation ignores the latch once.
    pub fn note_deep_link(&mut self) {
        self.deep_link_pending = true;
    }

    /// Apply an auth snapshot, opening a new epoch when the session flips.
    ///
    /// Returns `true` if an epoch boundary was crossed.
    pub fn observe_auth(&mut self, auth: &AuthState) -> bool {
        if auth.is_loading() {
            if !matches!(self.phase, GuardPhase::Restoring) {
                debug_log!("Session restoration restarted; guard back to restoring");
            }
            self.phase = GuardPhase::Restoring;
            return false;
        }

        let authenticated = auth.is_authenticated();
        match self.phase {
            GuardPhase::Active {
                authenticated: current,
                ..
            } if current == authenticated => false,
            _ => {
                self.begin_epoch(authenticated);
                true
            }
        }
    }

    fn begin_epoch(&mut self, authenticated: bool) {
        self.epochs += 1;
        debug_log!(
            "Guard epoch {} begins (authenticated: {})",
            self.epochs,
            authenticated
        );
        self.phase = GuardPhase::Active {
            authenticated,
            latch: GuardLatch::fresh(self.epochs),
        };
    }

    /// Evaluate the guard against a consistent `(auth, location)` pair.
    pub fn evaluate(&mut self, auth: &AuthState, location: &RouteLocation) -> GuardDecision {
        self.observe_auth(auth);

        let GuardPhase::Active {
            authenticated,
            latch,
        } = self.phase
        else {
            trace_log!("Guard restoring; no redirect for '{}'", location);
            return GuardDecision::ShowLoading;
        };

        debug_log!(
            "Guard evaluating '{}' (authenticated: {}, epoch: {})",
            location,
            authenticated,
            latch.epoch()
        );

        let bypass = std::mem::take(&mut self.deep_link_pending);
        if latch.is_redirected() && !bypass {
            trace_log!(
                "Guard latch set for epoch {}; ignoring '{}'",
                latch.epoch(),
                location
            );
            return GuardDecision::Suppressed;
        }

        let Some(intent) = self.decide(authenticated, location) else {
            return GuardDecision::Stay;
        };

        debug_log!("Guard wants redirect from '{}': {}", location, intent);
        GuardDecision::Redirect(intent)
    }

    /// Spend this epoch's redirect.
    ///
    /// Call once the intent from [`GuardDecision::Redirect`] has reached the
    /// surface (or the surface already showed its target). A redirect the
    /// surface rejected is not committed, so the next evaluation offers it
    /// again.
    pub fn commit_redirect(&mut self) {
        if let GuardPhase::Active { latch, .. } = &mut self.phase {
            latch.redirected = true;
            info_log!("Guard redirect committed for epoch {}", latch.epoch);
        }
    }

    fn decide(&self, authenticated: bool, location: &RouteLocation) -> Option<NavigationIntent> {
        let Some(segment) = location.top_level() else {
            let target = if authenticated {
                &self.home_path
            } else {
                &self.welcome_path
            };
            return Some(NavigationIntent::replace(target.as_str()));
        };

        match (self.classification.classify(segment), authenticated) {
            (RouteAccess::Public, true) => Some(NavigationIntent::replace(self.home_path.as_str())),
            (RouteAccess::Protected, false) => {
                Some(NavigationIntent::replace(self.welcome_path.as_str()))
            }
            _ => None,
        }
    }
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self::new(RouteClassification::standard())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::UserIdentity;

    fn signed_in() -> AuthState {
        AuthState::signed_in(UserIdentity::new("u-1"))
    }

    fn at(segments: &[&str]) -> RouteLocation {
        RouteLocation::new(segments.iter().copied())
    }

    // --- Restoring ---

    #[test]
    fn test_no_redirect_while_restoring() {
        let mut guard = NavigationGuard::default();
        for location in [at(&[]), at(&["login"]), at(&["(tabs)", "home"]), at(&["x"])] {
            assert_eq!(
                guard.evaluate(&AuthState::restoring(), &location),
                GuardDecision::ShowLoading
            );
        }
        assert!(guard.should_show_loading());
        assert_eq!(guard.epoch(), None);
    }

    #[test]
    fn test_leaving_restoring_opens_first_epoch() {
        let mut guard = NavigationGuard::default();
        guard.evaluate(&AuthState::restoring(), &at(&[]));
        assert!(guard.observe_auth(&AuthState::signed_out()));
        assert_eq!(guard.epoch(), Some(1));
        assert!(!guard.should_show_loading());
    }

    // --- Rules ---

    #[test]
    fn test_authenticated_on_public_goes_home() {
        let mut guard = NavigationGuard::default();
        let decision = guard.evaluate(&signed_in(), &at(&["login"]));
        assert_eq!(decision, GuardDecision::Redirect(NavigationIntent::replace(HOME_PATH)));
    }

    #[test]
    fn test_unauthenticated_on_protected_goes_welcome() {
        let mut guard = NavigationGuard::default();
        let decision = guard.evaluate(&AuthState::signed_out(), &at(&["(tabs)", "home"]));
        assert_eq!(
            decision,
            GuardDecision::Redirect(NavigationIntent::replace(WELCOME_PATH))
        );
    }

    #[test]
    fn test_guest_counts_as_authenticated() {
        let mut guard = NavigationGuard::default();
        let decision = guard.evaluate(&AuthState::guest(), &at(&["(tabs)", "favorites"]));
        assert_eq!(decision, GuardDecision::Stay);
    }

    #[test]
    fn test_first_paint_redirects_by_session() {
        let mut guard = NavigationGuard::default();
        let decision = guard.evaluate(&signed_in(), &RouteLocation::empty());
        assert_eq!(decision.intent().map(|i| i.target.as_str()), Some(HOME_PATH));

        let mut guard = NavigationGuard::default();
        let decision = guard.evaluate(&AuthState::signed_out(), &RouteLocation::empty());
        assert_eq!(decision.intent().map(|i| i.target.as_str()), Some(WELCOME_PATH));
    }

    #[test]
    fn test_neutral_segment_is_left_alone() {
        let mut guard = NavigationGuard::default();
        assert_eq!(
            guard.evaluate(&AuthState::signed_out(), &at(&["+not-found"])),
            GuardDecision::Stay
        );
        assert_eq!(
            guard.evaluate(&AuthState::signed_out(), &at(&["mystery"])),
            GuardDecision::Stay
        );
    }

    #[test]
    fn test_conflicting_segment_protected_precedence() {
        let table = RouteClassification::builder()
            .public("both")
            .protected("both")
            .build();

        let mut guard = NavigationGuard::new(table.clone());
        let decision = guard.evaluate(&AuthState::signed_out(), &at(&["both"]));
        assert_eq!(decision.intent().map(|i| i.target.as_str()), Some(WELCOME_PATH));

        let mut guard = NavigationGuard::new(table);
        assert_eq!(guard.evaluate(&signed_in(), &at(&["both"])), GuardDecision::Stay);
    }

    #[test]
    fn test_custom_targets() {
        let mut guard = NavigationGuard::default().with_targets("/feed", "/start");
        let decision = guard.evaluate(&AuthState::signed_out(), &at(&["profile"]));
        assert_eq!(decision.intent().map(|i| i.target.as_str()), Some("/start"));
    }

    // --- Latch ---

    #[test]
    fn test_latch_suppresses_second_redirect_in_epoch() {
        let mut guard = NavigationGuard::default();
        let auth = AuthState::signed_out();

        assert!(guard.evaluate(&auth, &at(&["profile"])).is_redirect());
        guard.commit_redirect();
        assert_eq!(
            guard.evaluate(&auth, &at(&["drafts"])),
            GuardDecision::Suppressed
        );
        assert_eq!(guard.epoch(), Some(1));
    }

    #[test]
    fn test_uncommitted_redirect_is_offered_again() {
        let mut guard = NavigationGuard::default();
        let auth = AuthState::signed_out();

        assert!(guard.evaluate(&auth, &at(&["profile"])).is_redirect());
        // Surface rejected it; nothing committed
        let decision = guard.evaluate(&auth, &at(&["drafts"]));
        assert_eq!(
            decision,
            GuardDecision::Redirect(NavigationIntent::replace(WELCOME_PATH))
        );

        guard.commit_redirect();
        assert_eq!(
            guard.evaluate(&auth, &at(&["profile"])),
            GuardDecision::Suppressed
        );
    }

    #[test]
    fn test_commit_while_restoring_is_a_no_op() {
        let mut guard = NavigationGuard::default();
        guard.commit_redirect();
        assert_eq!(guard.phase(), GuardPhase::Restoring);

        guard.observe_auth(&AuthState::signed_out());
        assert!(guard.evaluate(&AuthState::signed_out(), &at(&["profile"])).is_redirect());
    }

    #[test]
    fn test_auth_flip_resets_latch() {
        let mut guard = NavigationGuard::default();

        assert!(guard.evaluate(&signed_in(), &at(&["login"])).is_redirect());
        guard.commit_redirect();
        assert!(guard.observe_auth(&AuthState::signed_out()));
        assert!(guard.observe_auth(&signed_in()));
        assert_eq!(guard.epoch(), Some(3));
        assert!(guard.evaluate(&signed_in(), &at(&["register"])).is_redirect());
    }

    #[test]
    fn test_same_session_snapshot_is_not_a_boundary() {
        let mut guard = NavigationGuard::default();
        guard.evaluate(&signed_in(), &at(&["login"]));
        assert!(!guard.observe_auth(&AuthState::guest()));
        assert_eq!(guard.epoch(), Some(1));
    }

    #[test]
    fn test_deep_link_bypasses_latch_once() {
        let mut guard = NavigationGuard::default();
        let auth = AuthState::signed_out();

        assert!(guard.evaluate(&auth, &RouteLocation::empty()).is_redirect());
        guard.commit_redirect();

        guard.note_deep_link();
        assert!(guard
            .evaluate(&auth, &at(&["property-detail", "42"]))
            .is_redirect());
        guard.commit_redirect();

        assert_eq!(
            guard.evaluate(&auth, &at(&["property-detail", "43"])),
            GuardDecision::Suppressed
        );
    }
}
