//! The push/replace primitive shared by the guard and the deep-link resolver.
//!
//! The navigation core never renders anything. It drives a [`RoutingSurface`]
//! and reads back the [`RouteLocation`] the surface is showing.
//! [`RouterState`](crate::RouterState) is the in-memory implementation used by
//! the GPUI integration and by tests.

use crate::error::NavigationError;
use crate::state::RouteLocation;

/// Direction of a completed navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// A new entry was pushed
    Forward,
    /// The current entry was overwritten
    Replace,
    /// History moved back one entry
    Back,
}

/// Record of a completed route change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChangeEvent {
    /// Path shown before the change
    pub from: Option<String>,
    /// Path shown after the change
    pub to: String,
    /// How the change happened
    pub direction: NavigationDirection,
}

/// Navigation primitive driven by the guard and the resolver.
///
/// Implementations must apply calls in arrival order. A replace that targets
/// the location already shown must be harmless.
pub trait RoutingSurface {
    /// Navigate forward, keeping a back entry.
    fn push(&mut self, path: &str) -> Result<RouteChangeEvent, NavigationError>;

    /// Overwrite the current entry.
    fn replace(&mut self, path: &str) -> Result<RouteChangeEvent, NavigationError>;

    /// The location currently shown.
    fn location(&self) -> RouteLocation;
}

impl<S: RoutingSurface + ?Sized> RoutingSurface for Box<S> {
    fn push(&mut self, path: &str) -> Result<RouteChangeEvent, NavigationError> {
        (**self).push(path)
    }

    fn replace(&mut self, path: &str) -> Result<RouteChangeEvent, NavigationError> {
        (**self).replace(path)
    }

    fn location(&self) -> RouteLocation {
        (**self).location()
    }
}
