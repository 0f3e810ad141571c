//! Screen identifiers and their access classification.
//!
//! Every top-level route segment the app knows about is a [`Screen`] variant,
//! and [`Screen::access`] maps each one to [`RouteAccess`] with an exhaustive
//! `match`. Adding a screen without deciding whether it is protected is a
//! compile error.
//!
//! [`RouteClassification`] is the lookup table the guard actually consults.
//! [`RouteClassification::standard`] is derived from [`Screen::access`];
//! [`RouteClassification::builder`] builds arbitrary tables, including ones
//! that put a segment in both sets (protected wins).
//!
//! # Example
//!
//! ```
//! use homi_navigator::{RouteAccess, RouteClassification, Screen};
//!
//! let table = RouteClassification::standard();
//! assert_eq!(table.classify("(tabs)"), RouteAccess::Protected);
//! assert_eq!(table.classify("login"), RouteAccess::Public);
//! assert_eq!(table.classify("somewhere-else"), RouteAccess::Neutral);
//! assert_eq!(Screen::from_segment("property-detail"), Some(Screen::PropertyDetail));
//! ```

use std::collections::HashSet;
use std::fmt;

/// What the guard requires of a top-level segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteAccess {
    /// Requires an authenticated (or guest) session
    Protected,
    /// Entry screens; an authenticated session is sent home
    Public,
    /// No guard action
    Neutral,
}

/// Top-level screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Tab group (`home`, `favorites`, `post`, ...)
    Tabs,
    PropertyDetail,
    EditProperty,
    Profile,
    Search,
    Drafts,
    Archived,
    EditProfile,
    Welcome,
    Login,
    Register,
    /// Fallback for unmatched routes
    NotFound,
}

impl Screen {
    /// All screens, in declaration order.
    pub const ALL: [Screen; 12] = [
        Screen::Tabs,
        Screen::PropertyDetail,
        Screen::EditProperty,
        Screen::Profile,
        Screen::Search,
        Screen::Drafts,
        Screen::Archived,
        Screen::EditProfile,
        Screen::Welcome,
        Screen::Login,
        Screen::Register,
        Screen::NotFound,
    ];

    /// The route segment this screen is mounted at.
    pub fn segment(self) -> &'static str {
        match self {
            Screen::Tabs => "(tabs)",
            Screen::PropertyDetail => "property-detail",
            Screen::EditProperty => "edit-property",
            Screen::Profile => "profile",
            Screen::Search => "search",
            Screen::Drafts => "drafts",
            Screen::Archived => "archived",
            Screen::EditProfile => "edit-profile",
            Screen::Welcome => "welcome",
            Screen::Login => "login",
            Screen::Register => "register",
            Screen::NotFound => "+not-found",
        }
    }

    /// Look up a screen by its route segment.
    pub fn from_segment(segment: &str) -> Option<Screen> {
        Screen::ALL.into_iter().find(|s| s.segment() == segment)
    }

    /// Access requirement of this screen.
    pub fn access(self) -> RouteAccess {
        match self {
            Screen::Tabs
            | Screen::PropertyDetail
            | Screen::EditProperty
            | Screen::Profile
            | Screen::Search
            | Screen::Drafts
            | Screen::Archived
            | Screen::EditProfile => RouteAccess::Protected,
            Screen::Welcome | Screen::Login | Screen::Register => RouteAccess::Public,
            Screen::NotFound => RouteAccess::Neutral,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

// ============================================================================
// RouteClassification
// ============================================================================

/// Partition of top-level segments into protected and public sets.
///
/// Segments in neither set are neutral. A segment in both sets is a
/// configuration defect and classifies as protected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteClassification {
    protected: HashSet<String>,
    public: HashSet<String>,
}

impl RouteClassification {
    /// The app's fixed table, derived from [`Screen::access`].
    pub fn standard() -> Self {
        let mut builder = Self::builder();
        for screen in Screen::ALL {
            builder = match screen.access() {
                RouteAccess::Protected => builder.protected(screen.segment()),
                RouteAccess::Public => builder.public(screen.segment()),
                RouteAccess::Neutral => builder,
            };
        }
        builder.build()
    }

    /// Start an empty table.
    pub fn builder() -> ClassificationBuilder {
        ClassificationBuilder::default()
    }

    /// Classify a top-level segment.
    pub fn classify(&self, segment: &str) -> RouteAccess {
        if self.protected.contains(segment) {
            RouteAccess::Protected
        } else if self.public.contains(segment) {
            RouteAccess::Public
        } else {
            RouteAccess::Neutral
        }
    }

    /// Segments that appear in both sets.
    pub fn conflicts(&self) -> Vec<&str> {
        let mut conflicts: Vec<&str> = self
            .protected
            .intersection(&self.public)
            .map(String::as_str)
            .collect();
        conflicts.sort_unstable();
        conflicts
    }
}

impl Default for RouteClassification {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for [`RouteClassification`].
#[derive(Debug, Default)]
#[must_use]
pub struct ClassificationBuilder {
    protected: HashSet<String>,
    public: HashSet<String>,
}

impl ClassificationBuilder {
    /// Mark a segment as protected.
    pub fn protected(mut self, segment: impl Into<String>) -> Self {
        self.protected.insert(segment.into());
        self
    }

    /// Mark a segment as public.
    pub fn public(mut self, segment: impl Into<String>) -> Self {
        self.public.insert(segment.into());
        self
    }

    /// Build the table.
    pub fn build(self) -> RouteClassification {
        RouteClassification {
            protected: self.protected,
            public: self.public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_round_trips_for_every_screen() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_segment(screen.segment()), Some(screen));
        }
        assert_eq!(Screen::from_segment("home"), None);
    }

    #[test]
    fn test_standard_table() {
        let table = RouteClassification::standard();
        for segment in [
            "(tabs)",
            "property-detail",
            "edit-property",
            "profile",
            "search",
            "drafts",
            "archived",
            "edit-profile",
        ] {
            assert_eq!(table.classify(segment), RouteAccess::Protected, "{}", segment);
        }
        for segment in ["welcome", "login", "register"] {
            assert_eq!(table.classify(segment), RouteAccess::Public, "{}", segment);
        }
        assert_eq!(table.classify("+not-found"), RouteAccess::Neutral);
        assert_eq!(table.classify("no-such-screen"), RouteAccess::Neutral);
        assert!(table.conflicts().is_empty());
    }

    #[test]
    fn test_conflicting_segment_classifies_protected() {
        let table = RouteClassification::builder()
            .public("both")
            .protected("both")
            .build();
        assert_eq!(table.classify("both"), RouteAccess::Protected);
        assert_eq!(table.conflicts(), vec!["both"]);
    }
}
