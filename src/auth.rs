//! Authentication snapshots consumed by the navigation guard.
//!
//! The auth subsystem itself (session restoration, login forms, the REST
//! backend) lives elsewhere. This module only models the snapshot it publishes
//! and keeps the snapshot internally consistent: a session is authenticated
//! exactly when it carries a user or is a guest session.
//!
//! # Example
//!
//! ```
//! use homi_navigator::{AuthState, UserIdentity};
//!
//! let restoring = AuthState::restoring();
//! assert!(restoring.is_loading());
//!
//! let signed_in = restoring.restored(Some(UserIdentity::new("u-1")));
//! assert!(signed_in.is_authenticated());
//!
//! let signed_out = signed_in.logout();
//! assert!(!signed_out.is_authenticated());
//! ```

/// Identity of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Backend user id
    pub id: String,
    /// Display name, if known
    pub name: Option<String>,
    /// Email address, if known
    pub email: Option<String>,
}

impl UserIdentity {
    /// Create an identity with only an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Immutable snapshot of the current session.
///
/// Fields are private so every snapshot satisfies
/// `is_authenticated() == (user().is_some() || is_guest())`.
/// Each login, guest login or logout produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    is_loading: bool,
    user: Option<UserIdentity>,
    is_guest: bool,
}

impl AuthState {
    /// Snapshot at process start, before the stored session is restored.
    pub fn restoring() -> Self {
        Self {
            is_loading: true,
            user: None,
            is_guest: false,
        }
    }

    /// Loaded snapshot with no session.
    pub fn signed_out() -> Self {
        Self {
            is_loading: false,
            user: None,
            is_guest: false,
        }
    }

    /// Loaded snapshot for a signed-in user.
    pub fn signed_in(user: UserIdentity) -> Self {
        Self {
            is_loading: false,
            user: Some(user),
            is_guest: false,
        }
    }

    /// Loaded snapshot for a guest session.
    pub fn guest() -> Self {
        Self {
            is_loading: false,
            user: None,
            is_guest: true,
        }
    }

    /// Finish restoration with whatever session was found.
    pub fn restored(&self, user: Option<UserIdentity>) -> Self {
        match user {
            Some(user) => Self::signed_in(user),
            None => Self::signed_out(),
        }
    }

    /// Snapshot after a successful login.
    pub fn login(&self, user: UserIdentity) -> Self {
        Self::signed_in(user)
    }

    /// Snapshot after choosing to continue as a guest.
    pub fn continue_as_guest(&self) -> Self {
        Self::guest()
    }

    /// Snapshot after logout. A logout also ends a guest session.
    pub fn logout(&self) -> Self {
        Self::signed_out()
    }

    /// Whether the user may see protected screens.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() || self.is_guest
    }

    /// True only while the stored session is being restored.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The signed-in user, if any. Guests have none.
    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    /// Whether this is a guest session.
    pub fn is_guest(&self) -> bool {
        self.is_guest
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::restoring()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restoring_is_unauthenticated() {
        let state = AuthState::restoring();
        assert!(state.is_loading());
        assert!(!state.is_authenticated());
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn test_guest_is_authenticated_without_user() {
        let state = AuthState::restoring().restored(None).continue_as_guest();
        assert!(state.is_authenticated());
        assert!(state.is_guest());
        assert!(state.user().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_login_then_logout() {
        let user = UserIdentity::new("42")
            .with_name("Ana")
            .with_email("ana@example.com");
        let state = AuthState::signed_out().login(user.clone());
        assert!(state.is_authenticated());
        assert_eq!(state.user(), Some(&user));

        let state = state.logout();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn test_authenticated_iff_user_or_guest() {
        let snapshots = [
            AuthState::restoring(),
            AuthState::signed_out(),
            AuthState::guest(),
            AuthState::signed_in(UserIdentity::new("1")),
        ];
        for state in snapshots {
            assert_eq!(
                state.is_authenticated(),
                state.user().is_some() || state.is_guest()
            );
        }
    }
}
