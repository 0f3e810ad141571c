//! One-shot navigation instructions.

use std::fmt;

/// How an intent enters the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    /// Add a history entry (deep links)
    Push,
    /// Overwrite the current entry (guard redirects)
    Replace,
}

/// A single navigation instruction produced by the guard or the resolver.
///
/// Intents have no identity. They are created by one evaluation and consumed
/// by the dispatcher in the same event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    /// Target path, e.g. `/(tabs)/home` or `property-detail/42`
    pub target: String,
    /// Push or replace
    pub kind: IntentKind,
}

impl NavigationIntent {
    /// Corrective redirect without a back entry.
    pub fn replace(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: IntentKind::Replace,
        }
    }

    /// Forward navigation that keeps history.
    pub fn push(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: IntentKind::Push,
        }
    }

    /// Whether this intent replaces the current entry.
    pub fn is_replace(&self) -> bool {
        self.kind == IntentKind::Replace
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IntentKind::Push => write!(f, "push({})", self.target),
            IntentKind::Replace => write!(f, "replace({})", self.target),
        }
    }
}
