//! GPUI integration for the navigation core.
//!
//! [`GlobalNavigation`] stores a [`NavigationCoordinator`] over an in-memory
//! [`RouterState`] as a GPUI `Global`. The free functions in this module
//! update it through `cx` and refresh all windows afterwards, so the
//! [`AuthGate`](crate::widgets::AuthGate) re-renders with the new location.
//!
//! # Initialization
//!
//! ```ignore
//! use homi_navigator::{context, init_navigation, link_channel, AuthState};
//!
//! let (links, receiver) = link_channel();
//! let forward = links.clone();
//!
//! gpui::Application::new()
//!     .on_open_urls(move |urls| forward.forward_urls(urls))
//!     .run(move |cx| {
//!         init_navigation(cx, |config| config);
//!         // Auth provider finished restoring:
//!         context::set_auth_state(cx, AuthState::signed_out());
//!         // Navigate whenever a link arrives:
//!         context::listen_for_links(cx, receiver);
//!     });
//! ```

use crate::config::NavigationConfig;
use crate::coordinator::{LinkHandled, NavigationCoordinator};
use crate::error::NavigationResult;
use crate::links::{LinkEvent, LinkReceiver};
use crate::state::{RouteLocation, RouterState};
use crate::surface::RoutingSurface;
use crate::{debug_log, warn_log, AuthState};
use gpui::{App, BorrowAppContext, Global};

// ============================================================================
// GlobalNavigation
// ============================================================================

/// Navigation state accessible from any component.
pub struct GlobalNavigation {
    coordinator: NavigationCoordinator<RouterState>,
}

impl GlobalNavigation {
    /// Create navigation state in the restoring phase.
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            coordinator: NavigationCoordinator::new(RouterState::new(), config),
        }
    }

    /// The coordinator.
    pub fn coordinator(&self) -> &NavigationCoordinator<RouterState> {
        &self.coordinator
    }

    /// Mutable coordinator access.
    pub fn coordinator_mut(&mut self) -> &mut NavigationCoordinator<RouterState> {
        &mut self.coordinator
    }

    /// Return the current navigation path.
    pub fn current_path(&self) -> &str {
        self.coordinator.surface().current_path()
    }

    /// Return the current route location.
    pub fn location(&self) -> RouteLocation {
        self.coordinator.surface().location()
    }

    /// Whether the loading placeholder replaces the screen tree.
    pub fn should_show_loading(&self) -> bool {
        self.coordinator.should_show_loading()
    }
}

impl Default for GlobalNavigation {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

impl Global for GlobalNavigation {}

// ============================================================================
// UseNavigation trait
// ============================================================================

/// Trait for accessing the global navigation state from context.
pub trait UseNavigation {
    /// Get reference to the global navigation state.
    fn navigation(&self) -> &GlobalNavigation;

    /// Update the global navigation state.
    fn update_navigation<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalNavigation, &mut App) -> R;
}

impl UseNavigation for App {
    fn navigation(&self) -> &GlobalNavigation {
        self.global::<GlobalNavigation>()
    }

    fn update_navigation<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalNavigation, &mut App) -> R,
    {
        self.update_global(f)
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Install the global navigation state.
///
/// ```ignore
/// init_navigation(cx, |config| config.welcome_path("/welcome"));
/// ```
pub fn init_navigation<F>(cx: &mut App, configure: F)
where
    F: FnOnce(NavigationConfig) -> NavigationConfig,
{
    let config = configure(NavigationConfig::default());
    cx.set_global(GlobalNavigation::new(config));
}

/// Publish a new auth snapshot to the guard.
pub fn set_auth_state(cx: &mut App, auth: AuthState) -> NavigationResult {
    let result = cx.update_navigation(|nav, _cx| nav.coordinator_mut().set_auth_state(auth));
    cx.refresh_windows();
    result
}

/// Handle a URL delivered while running, bypassing the link channel.
pub fn open_url(cx: &mut App, url: impl Into<String>) -> LinkHandled {
    handle_link(cx, LinkEvent::Activated(url.into()))
}

fn handle_link(cx: &mut App, event: LinkEvent) -> LinkHandled {
    let handled = cx.update_navigation(|nav, _cx| nav.coordinator_mut().handle_link(event));
    cx.refresh_windows();
    handled
}

/// Handle link events as they arrive, for as long as the app runs.
///
/// Spawns a foreground task that awaits `receiver`, so a URL forwarded from
/// `on_open_urls` navigates immediately, even while every window is idle.
/// The task ends when all senders are dropped or the app quits.
pub fn listen_for_links(cx: &mut App, mut receiver: LinkReceiver) {
    cx.spawn(async move |cx| {
        while let Some(event) = receiver.next_event().await {
            if cx.update(|cx| handle_link(cx, event)).is_err() {
                break;
            }
        }
        debug_log!("Link listener stopped");
    })
    .detach();
}

/// Handle every link event waiting in `receiver`.
pub fn pump_links(cx: &mut App, receiver: &mut LinkReceiver) -> usize {
    let count = cx.update_navigation(|nav, _cx| nav.coordinator_mut().pump_links(receiver));
    if count > 0 {
        debug_log!("Handled {} link event(s)", count);
        cx.refresh_windows();
    }
    count
}

/// Navigate from UI (tab bar, buttons) and let the guard re-check.
pub fn navigate(cx: &mut App, path: impl Into<String>) -> NavigationResult {
    let path = path.into();
    let result = cx.update_navigation(|nav, _cx| {
        let coordinator = nav.coordinator_mut();
        match coordinator.surface_mut().push(&path) {
            Ok(_) => {
                let guard = coordinator.route_changed();
                if guard.is_ignored() {
                    NavigationResult::Issued { path }
                } else {
                    guard
                }
            }
            Err(err) => {
                warn_log!("Navigation to '{}' failed: {}", path, err);
                NavigationResult::Failed(err)
            }
        }
    });
    cx.refresh_windows();
    result
}

/// Go back one entry and let the guard re-check.
pub fn go_back(cx: &mut App) -> Option<NavigationResult> {
    let result = cx.update_navigation(|nav, _cx| {
        let coordinator = nav.coordinator_mut();
        coordinator.surface_mut().back()?;
        Some(coordinator.route_changed())
    });
    cx.refresh_windows();
    result
}

/// Return the current path from the global navigation state.
pub fn current_path(cx: &App) -> String {
    cx.navigation().current_path().to_string()
}

// ============================================================================
// Tests
// ============================================================================
