//! Route locations and the in-memory history stack

use crate::error::NavigationError;
use crate::surface::{NavigationDirection, RouteChangeEvent, RoutingSurface};
use std::fmt;

/// Split a path into segments, filtering empty segments
///
/// # Examples
///
/// ```
/// use homi_navigator::state::split_path;
///
/// assert_eq!(split_path("/(tabs)/home"), vec!["(tabs)", "home"]);
/// assert_eq!(split_path("property-detail/42/"), vec!["property-detail", "42"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Ordered path segments of the screen currently rendered.
///
/// An empty location means nothing has been resolved yet (first paint).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RouteLocation {
    segments: Vec<String>,
}

impl RouteLocation {
    /// Location before anything has been resolved.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a location from segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a location from a path such as `/(tabs)/home`.
    pub fn from_path(path: &str) -> Self {
        Self {
            segments: split_path(path),
        }
    }

    /// All segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The top-level segment, which determines classification.
    pub fn top_level(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Whether no segment has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether navigating to `path` would show this same location.
    pub fn is_at(&self, path: &str) -> bool {
        let other = split_path(path);
        !other.is_empty() && other == self.segments
    }
}

impl fmt::Display for RouteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

/// In-memory history stack implementing [`RoutingSurface`].
#[derive(Debug, Clone)]
pub struct RouterState {
    /// Navigation history stack
    history: Vec<String>,
    /// Current position in history
    current: usize,
}

impl RouterState {
    /// Create a router whose single entry has not resolved to any screen.
    pub fn new() -> Self {
        Self {
            history: vec![String::new()],
            current: 0,
        }
    }

    /// Create a router already showing `path`.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            history: vec![path.into()],
            current: 0,
        }
    }

    /// Get current path
    pub fn current_path(&self) -> &str {
        &self.history[self.current]
    }

    /// Number of entries up to and including the current one.
    pub fn depth(&self) -> usize {
        self.current + 1
    }

    fn validate(path: &str) -> Result<(), NavigationError> {
        let invalid = split_path(path).is_empty()
            || path
                .chars()
                .any(|c| c.is_whitespace() || c == '?' || c == '#');
        if invalid {
            return Err(NavigationError::InvalidPath {
                path: path.to_string(),
            });
        }
        Ok(())
    }

    /// Go back in history
    pub fn back(&mut self) -> Option<RouteChangeEvent> {
        if self.current > 0 {
            let from = Some(self.current_path().to_string());
            self.current -= 1;
            let to = self.current_path().to_string();

            Some(RouteChangeEvent {
                from,
                to,
                direction: NavigationDirection::Back,
            })
        } else {
            None
        }
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingSurface for RouterState {
    fn push(&mut self, path: &str) -> Result<RouteChangeEvent, NavigationError> {
        Self::validate(path)?;
        let from = Some(self.current_path().to_string());

        // Remove forward history when pushing
        self.history.truncate(self.current + 1);
        self.history.push(path.to_string());
        self.current += 1;

        Ok(RouteChangeEvent {
            from,
            to: path.to_string(),
            direction: NavigationDirection::Forward,
        })
    }

    fn replace(&mut self, path: &str) -> Result<RouteChangeEvent, NavigationError> {
        Self::validate(path)?;
        let from = Some(self.current_path().to_string());

        self.history[self.current] = path.to_string();

        Ok(RouteChangeEvent {
            from,
            to: path.to_string(),
            direction: NavigationDirection::Replace,
        })
    }

    fn location(&self) -> RouteLocation {
        RouteLocation::from_path(self.current_path())
    }
}
