//! Test utilities for guard and deep-link tests
//!
//! Provides a routing surface that records every call, plus small fixtures.

#![allow(dead_code)]

use homi_navigator::*;

/// Routing surface that records every push/replace it receives.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    inner: RouterState,
    pub calls: Vec<NavigationIntent>,
    fail_next: bool,
}

impl RecordingSurface {
    /// Surface that has not resolved any screen yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface already showing `path`.
    pub fn at(path: &str) -> Self {
        Self {
            inner: RouterState::at(path),
            calls: Vec::new(),
            fail_next: false,
        }
    }

    /// Reject the next push or replace with a transient failure.
    pub fn fail_next_call(&mut self) {
        self.fail_next = true;
    }

    fn check_failure(&mut self) -> Result<(), NavigationError> {
        if std::mem::take(&mut self.fail_next) {
            return Err(NavigationError::NavigationFailed {
                message: "transient".to_string(),
            });
        }
        Ok(())
    }

    /// Recorded calls rendered as `push(..)` / `replace(..)`.
    pub fn call_log(&self) -> Vec<String> {
        self.calls.iter().map(ToString::to_string).collect()
    }

    /// Recorded replace targets only.
    pub fn replaces(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter(|c| c.is_replace())
            .map(|c| c.target.as_str())
            .collect()
    }

    pub fn current_path(&self) -> &str {
        self.inner.current_path()
    }
}

impl RoutingSurface for RecordingSurface {
    fn push(&mut self, path: &str) -> Result<RouteChangeEvent, NavigationError> {
        self.calls.push(NavigationIntent::push(path));
        self.check_failure()?;
        self.inner.push(path)
    }

    fn replace(&mut self, path: &str) -> Result<RouteChangeEvent, NavigationError> {
        self.calls.push(NavigationIntent::replace(path));
        self.check_failure()?;
        self.inner.replace(path)
    }

    fn location(&self) -> RouteLocation {
        self.inner.location()
    }
}

/// Route crate logs through `env_logger`; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Coordinator over a recording surface with the default configuration.
pub fn coordinator_at(path: Option<&str>) -> NavigationCoordinator<RecordingSurface> {
    init_logging();
    let surface = path.map_or_else(RecordingSurface::new, RecordingSurface::at);
    NavigationCoordinator::new(surface, NavigationConfig::default())
}

/// A signed-in session.
pub fn signed_in() -> AuthState {
    AuthState::signed_in(UserIdentity::new("u-1").with_name("Test User"))
}

/// Route location from literal segments.
pub fn location(segments: &[&str]) -> RouteLocation {
    RouteLocation::new(segments.iter().copied())
}

/// Move the surface the way a tab bar or back button would, then notify.
pub fn user_navigates(
    nav: &mut NavigationCoordinator<RecordingSurface>,
    path: &str,
) -> NavigationResult {
    nav.surface_mut()
        .push(path)
        .expect("test path should be valid");
    nav.route_changed()
}
