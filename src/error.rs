//! Error and outcome types for navigation and deep-link handling.
//!
//! - [`NavigationResult`]: the outcome of one coordinator step (`Issued`,
//!   `Skipped`, `Ignored`, `Failed`).
//! - [`NavigationError`]: returned by a [`RoutingSurface`](crate::RoutingSurface)
//!   that cannot perform a push or replace.
//! - [`DeepLinkError`]: why an activation URL was discarded.
//! - [`LinkSourceError`]: why the platform could not report the launching URL.
//!
//! None of these are surfaced to the user. The guard and the resolver log
//! them and wait for the next event.
//!
//! # Examples
//!
//! ```
//! use homi_navigator::error::NavigationResult;
//!
//! let result = NavigationResult::Issued { path: "/welcome".into() };
//! assert!(result.is_issued());
//! assert_eq!(result.path(), Some("/welcome"));
//! ```

use std::fmt;

// ============================================================================
// Navigation Result Types
// ============================================================================

/// Outcome of handing an event to the
/// [`NavigationCoordinator`](crate::NavigationCoordinator).
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationResult {
    /// An intent reached the routing surface
    Issued { path: String },
    /// An intent was dropped because the surface already shows `path`
    Skipped { path: String },
    /// Nothing to do (guard no-op, restoring, or discarded link)
    Ignored,
    /// The routing surface rejected the intent
    Failed(NavigationError),
}

impl NavigationResult {
    /// Check if an intent reached the routing surface
    pub fn is_issued(&self) -> bool {
        matches!(self, NavigationResult::Issued { .. })
    }

    /// Check if the intent was de-duplicated
    pub fn is_skipped(&self) -> bool {
        matches!(self, NavigationResult::Skipped { .. })
    }

    /// Check if the event produced no intent at all
    pub fn is_ignored(&self) -> bool {
        matches!(self, NavigationResult::Ignored)
    }

    /// Check if the routing surface failed
    pub fn is_failed(&self) -> bool {
        matches!(self, NavigationResult::Failed(_))
    }

    /// Target path of an issued or skipped intent
    pub fn path(&self) -> Option<&str> {
        match self {
            NavigationResult::Issued { path } | NavigationResult::Skipped { path } => Some(path),
            _ => None,
        }
    }
}

// ============================================================================
// NavigationError
// ============================================================================

/// Failure reported by a routing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The target path cannot be represented as a route location
    InvalidPath { path: String },

    /// The surface refused or failed the navigation
    NavigationFailed { message: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidPath { path } => {
                write!(f, "Invalid route path: '{}'", path)
            }
            NavigationError::NavigationFailed { message } => {
                write!(f, "Navigation failed: {}", message)
            }
        }
    }
}

impl std::error::Error for NavigationError {}

// ============================================================================
// DeepLinkError
// ============================================================================

/// Reason an activation URL did not produce a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLinkError {
    /// The string is not an absolute URL
    Unparseable { url: String, reason: String },

    /// The URL scheme is not one of the accepted prefixes
    UnsupportedScheme { scheme: String },

    /// Nothing left after stripping the scheme and dev-host prefix
    EmptyPath,

    /// The first segment is not a deep-linkable screen
    UnknownScreen { screen: String },

    /// The screen requires a parameter and none was given
    MissingParam { screen: String },
}

impl fmt::Display for DeepLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeepLinkError::Unparseable { url, reason } => {
                write!(f, "Cannot parse '{}': {}", url, reason)
            }
            DeepLinkError::UnsupportedScheme { scheme } => {
                write!(f, "Unsupported link scheme: {}", scheme)
            }
            DeepLinkError::EmptyPath => write!(f, "Link has no path"),
            DeepLinkError::UnknownScreen { screen } => {
                write!(f, "Screen '{}' is not deep-linkable", screen)
            }
            DeepLinkError::MissingParam { screen } => {
                write!(f, "Screen '{}' requires a parameter", screen)
            }
        }
    }
}

impl std::error::Error for DeepLinkError {}

// ============================================================================
// LinkSourceError
// ============================================================================

/// Failure of the platform's "URL that launched this process" query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkSourceError {
    /// The platform refused to reveal the launching URL
    PermissionDenied,

    /// No link handler is registered for this process
    NoHandler,

    /// Any other platform failure
    Failed { message: String },
}

impl fmt::Display for LinkSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkSourceError::PermissionDenied => write!(f, "Permission denied"),
            LinkSourceError::NoHandler => write!(f, "No link handler registered"),
            LinkSourceError::Failed { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for LinkSourceError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_result_issued() {
        let result = NavigationResult::Issued {
            path: "/(tabs)/home".to_string(),
        };
        assert!(result.is_issued());
        assert!(!result.is_skipped());
        assert!(!result.is_ignored());
        assert!(!result.is_failed());
        assert_eq!(result.path(), Some("/(tabs)/home"));
    }

    #[test]
    fn test_navigation_result_ignored_has_no_path() {
        let result = NavigationResult::Ignored;
        assert!(result.is_ignored());
        assert_eq!(result.path(), None);
    }

    #[test]
    fn test_navigation_error_display() {
        let error = NavigationError::InvalidPath {
            path: "bad path".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid route path: 'bad path'");
    }

    #[test]
    fn test_deep_link_error_display() {
        let error = DeepLinkError::UnknownScreen {
            screen: "unknown-screen".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Screen 'unknown-screen' is not deep-linkable"
        );
        assert_eq!(DeepLinkError::EmptyPath.to_string(), "Link has no path");
    }

    #[test]
    fn test_link_source_error_display() {
        assert_eq!(
            LinkSourceError::NoHandler.to_string(),
            "No link handler registered"
        );
    }
}
