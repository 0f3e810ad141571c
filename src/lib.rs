//! Authentication-gated navigation and deep-link routing for the Homi
//! listings app.
//!
//! Two components decide which screen the user must be looking at:
//!
//! - [`NavigationGuard`] keeps the rendered screen consistent with the
//!   session: no redirect while the session is restoring, at most one
//!   redirect per authentication epoch.
//! - [`DeepLinkResolver`] turns `homi://property-detail/<id>` style URLs into
//!   push intents, whether they launched the app or arrived while running.
//!
//! Both drive the same [`RoutingSurface`] through an [`IntentDispatcher`],
//! and [`NavigationCoordinator`] sequences them so a deep link navigates
//! first and the guard corrects second.
//!
//! The [`context`] and [`widgets`] modules plug the coordinator into GPUI as
//! a global plus an [`AuthGate`](widgets::AuthGate) view.
//!
//! # Example
//!
//! ```
//! use homi_navigator::{AuthState, NavigationConfig, NavigationCoordinator, RouterState, UserIdentity};
//!
//! let mut nav = NavigationCoordinator::new(RouterState::new(), NavigationConfig::default());
//! nav.set_auth_state(AuthState::restoring());
//! assert!(nav.should_show_loading());
//!
//! nav.set_auth_state(AuthState::signed_in(UserIdentity::new("u-1")));
//! assert_eq!(nav.surface().current_path(), "/(tabs)/home");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

pub mod auth;
pub mod config;
pub mod context;
pub mod coordinator;
pub mod deep_link;
pub mod dispatch;
pub mod error;
pub mod guards;
pub mod intent;
pub mod links;
pub mod screen;
pub mod state;
pub mod surface;
pub mod widgets;

pub use auth::{AuthState, UserIdentity};
pub use config::NavigationConfig;
pub use context::{init_navigation, listen_for_links, GlobalNavigation, UseNavigation};
pub use coordinator::{LinkHandled, NavigationCoordinator};
pub use deep_link::{DeepLinkConfig, DeepLinkResolver, DeepLinkTarget};
pub use dispatch::{DispatchOutcome, IntentDispatcher};
pub use error::{DeepLinkError, LinkSourceError, NavigationError, NavigationResult};
pub use guards::{GuardDecision, GuardLatch, GuardPhase, NavigationGuard};
pub use intent::{IntentKind, NavigationIntent};
pub use links::{link_channel, LinkEvent, LinkReceiver, LinkSender, LinkSource};
pub use screen::{RouteAccess, RouteClassification, Screen};
pub use state::{RouteLocation, RouterState};
pub use surface::{NavigationDirection, RouteChangeEvent, RoutingSurface};
pub use widgets::{auth_gate, current_gate_view, gate_view, AuthGate, GatePages, GateView};
