//! GPUI views gated on the navigation state.
//!
//! - [`AuthGate`] / [`auth_gate`]: renders the loading page while the session
//!   is restoring, and the app's screen for the current
//!   [`RouteLocation`] afterwards. Place it once at the root of the window.
//! - [`GatePages`]: configurable loading and not-found pages.
//! - [`gate_view`]: the pure choice between those pages and the screen.
//!
//! The gate never navigates. Redirects come from the guard when the auth state
//! or route changes; the gate only reflects the result.

use crate::context::GlobalNavigation;
use crate::state::RouteLocation;
use crate::trace_log;
use gpui::*;

/// Builds the element for a resolved location.
pub type ScreenBuilder = Box<dyn Fn(&RouteLocation, &mut Window, &mut App) -> AnyElement>;

// ============================================================================
// AuthGate
// ============================================================================

/// Root view that hides the screen tree until the session is known.
///
/// # Example
///
/// ```ignore
/// use homi_navigator::{AuthGate, Screen};
///
/// let gate = AuthGate::new(|location, _window, _cx| {
///     match location.top_level().and_then(Screen::from_segment) {
///         Some(Screen::Tabs) => home_tabs().into_any_element(),
///         Some(Screen::PropertyDetail) => property_detail(location).into_any_element(),
///         _ => gpui::div().into_any_element(),
///     }
/// });
/// ```
pub struct AuthGate {
    screen: ScreenBuilder,
    pages: GatePages,
}

impl AuthGate {
    /// Create a gate that renders screens with `screen`.
    pub fn new<F>(screen: F) -> Self
    where
        F: Fn(&RouteLocation, &mut Window, &mut App) -> AnyElement + 'static,
    {
        Self {
            screen: Box::new(screen),
            pages: GatePages::new(),
        }
    }

    /// Use custom loading / not-found pages.
    pub fn pages(mut self, pages: GatePages) -> Self {
        self.pages = pages;
        self
    }
}

impl Render for AuthGate {
    fn render(&mut self, window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        auth_gate(window, cx, &self.screen, &self.pages)
    }
}

/// Functional gate: loading page, not-found page, or the built screen.
pub fn auth_gate(
    window: &mut Window,
    cx: &mut App,
    screen: &dyn Fn(&RouteLocation, &mut Window, &mut App) -> AnyElement,
    pages: &GatePages,
) -> AnyElement {
    let Some(view) = current_gate_view(cx) else {
        return div().child("No navigation configured").into_any_element();
    };

    match view {
        GateView::Loading => pages.render_loading(),
        GateView::NotFound(location) => pages.render_not_found(&location),
        GateView::Screen(location) => screen(&location, window, cx),
    }
}

// ============================================================================
// Gate decision
// ============================================================================

/// What the gate shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView {
    /// Session restoring, or the first-paint redirect has not landed yet
    Loading,
    /// A `+`-prefixed fallback segment such as `+not-found`
    NotFound(RouteLocation),
    /// Hand the location to the app's screen builder
    Screen(RouteLocation),
}

/// Pick the gate's view from the guard's loading flag and the location.
pub fn gate_view(restoring: bool, location: RouteLocation) -> GateView {
    if restoring {
        trace_log!("auth_gate: session restoring, showing loading page");
        return GateView::Loading;
    }

    if location.is_empty() {
        return GateView::Loading;
    }

    if location.top_level().is_some_and(|s| s.starts_with('+')) {
        return GateView::NotFound(location);
    }

    GateView::Screen(location)
}

/// The gate's view for the global navigation state, if installed.
pub fn current_gate_view(cx: &App) -> Option<GateView> {
    let nav = cx.try_global::<GlobalNavigation>()?;
    Some(gate_view(nav.should_show_loading(), nav.location()))
}

// ============================================================================
// Gate pages
// ============================================================================

/// Configurable loading and not-found pages.
///
/// ```ignore
/// GatePages::new()
///     .with_loading(|| gpui::div().child("Restoring session…").into_any_element())
/// ```
pub struct GatePages {
    /// Custom loading page builder
    pub loading: Option<Box<dyn Fn() -> AnyElement>>,
    /// Custom not-found page builder
    #[allow(clippy::type_complexity)]
    pub not_found: Option<Box<dyn Fn(&RouteLocation) -> AnyElement>>,
}

impl GatePages {
    /// Built-in pages
    pub fn new() -> Self {
        Self {
            loading: None,
            not_found: None,
        }
    }

    /// Set custom loading page
    pub fn with_loading<F>(mut self, builder: F) -> Self
    where
        F: Fn() -> AnyElement + 'static,
    {
        self.loading = Some(Box::new(builder));
        self
    }

    /// Set custom not-found page
    pub fn with_not_found<F>(mut self, builder: F) -> Self
    where
        F: Fn(&RouteLocation) -> AnyElement + 'static,
    {
        self.not_found = Some(Box::new(builder));
        self
    }

    /// Render loading page (custom or default)
    pub fn render_loading(&self) -> AnyElement {
        if let Some(builder) = &self.loading {
            builder()
        } else {
            default_loading_page().into_any_element()
        }
    }

    /// Render not-found page (custom or default)
    pub fn render_not_found(&self, location: &RouteLocation) -> AnyElement {
        if let Some(builder) = &self.not_found {
            builder(location)
        } else {
            default_not_found_page(location).into_any_element()
        }
    }
}

impl Default for GatePages {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Built-in pages
// ============================================================================

fn default_loading_page() -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .size_full()
        .bg(rgb(0xffffff))
        .gap_4()
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::MEDIUM)
                .text_color(rgb(0x1a1a1a))
                .child("Homi"),
        )
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x888888))
                .child("Loading..."),
        )
}

fn default_not_found_page(location: &RouteLocation) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .size_full()
        .bg(rgb(0xffffff))
        .p_8()
        .gap_6()
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(0x1a1a1a))
                .child("Page not found"),
        )
        .child(
            div()
                .text_base()
                .text_color(rgb(0x666666))
                .child(format!("Nothing lives at {}", location)),
        )
}
