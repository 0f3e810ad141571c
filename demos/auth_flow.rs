//! Auth Flow Demo
//!
//! Walks through session restoration, login/guest/logout and deep links.
//! Launch with a URL argument to simulate a cold-start link:
//!
//! ```text
//! cargo run --example auth_flow -- homi://property-detail/42
//! ```

#![allow(clippy::needless_pass_by_ref_mut)]

use gpui::prelude::*;
use gpui::{
    div, px, rgb, size, AnyElement, App, AppContext, Application, Bounds, Entity, FontWeight,
    MouseButton, SharedString, TitlebarOptions, Window, WindowBounds, WindowOptions,
};
use homi_navigator::context::{self, current_path, init_navigation, listen_for_links};
use homi_navigator::links::{query_cold_start, StaticLinkSource};
use homi_navigator::{
    link_channel, AuthGate, AuthState, LinkSender, RouteLocation, Screen, UseNavigation,
    UserIdentity,
};

// ============================================================================
// Main
// ============================================================================

fn main() {
    env_logger::init();

    let (links, receiver) = link_channel();
    let source = StaticLinkSource::from_args(std::env::args().skip(1));
    pollster::block_on(query_cold_start(&source, &links));

    let forward = links.clone();
    let app = Application::new();
    app.on_open_urls(move |urls| forward.forward_urls(urls));

    app.run(move |cx: &mut App| {
        init_navigation(cx, |config| config);
        listen_for_links(cx, receiver);

        let bounds = Bounds::centered(None, size(px(1000.), px(700.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Homi Auth Flow Demo".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| AuthFlowApp::new(cx, links)),
        )
        .unwrap();

        cx.activate(true);
    });
}

// ============================================================================
// Root App Component
// ============================================================================

struct AuthFlowApp {
    gate: Entity<AuthGate>,
    links: LinkSender,
}

impl AuthFlowApp {
    fn new(cx: &mut Context<'_, Self>, links: LinkSender) -> Self {
        Self {
            gate: cx.new(|_| AuthGate::new(screen)),
            links,
        }
    }
}

impl Render for AuthFlowApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        let path = current_path(cx);
        let loading = cx.navigation().should_show_loading();
        let epoch = cx.navigation().coordinator().guard().epoch();

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(rgb(0x1e_1e_1e))
            .text_color(rgb(0xff_ff_ff))
            .child(render_header(&path, loading, epoch))
            .child(
                div()
                    .flex()
                    .flex_1()
                    .child(render_sidebar(cx))
                    .child(div().flex_1().bg(rgb(0xff_ff_ff)).child(self.gate.clone())),
            )
    }
}

fn render_header(path: &str, loading: bool, epoch: Option<u64>) -> impl IntoElement {
    let status = match (loading, epoch) {
        (true, _) | (false, None) => "restoring".to_string(),
        (false, Some(epoch)) => format!("epoch {epoch}"),
    };

    div()
        .flex()
        .items_center()
        .justify_between()
        .p_4()
        .bg(rgb(0x2d_2d_2d))
        .border_b_1()
        .border_color(rgb(0x3e_3e_3e))
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .child("Homi Auth Flow"),
        )
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x88_88_88))
                .child(format!("Path: {path}  ·  Guard: {status}")),
        )
}

fn render_sidebar(cx: &mut Context<'_, AuthFlowApp>) -> impl IntoElement {
    div()
        .w(px(260.))
        .bg(rgb(0x25_25_26))
        .border_r_1()
        .border_color(rgb(0x3e_3e_3e))
        .p_4()
        .flex()
        .flex_col()
        .gap_2()
        .child(section_label("Session"))
        .child(action_button(cx, "Restore: signed out", Action::RestoreSignedOut))
        .child(action_button(cx, "Log in", Action::Login))
        .child(action_button(cx, "Continue as guest", Action::Guest))
        .child(action_button(cx, "Log out", Action::Logout))
        .child(div().h_px().bg(rgb(0x3e_3e_3e)).my_2())
        .child(section_label("Navigation"))
        .child(action_button(cx, "Search", Action::Navigate("/search")))
        .child(action_button(cx, "Login screen", Action::Navigate("/login")))
        .child(action_button(cx, "Back", Action::Back))
        .child(div().h_px().bg(rgb(0x3e_3e_3e)).my_2())
        .child(section_label("Deep links"))
        .child(action_button(
            cx,
            "homi://property-detail/42",
            Action::Link("homi://property-detail/42"),
        ))
        .child(action_button(
            cx,
            "homi://unknown/1",
            Action::Link("homi://unknown/1"),
        ))
}

#[derive(Clone, Copy)]
enum Action {
    RestoreSignedOut,
    Login,
    Guest,
    Logout,
    Navigate(&'static str),
    Back,
    Link(&'static str),
}

fn section_label(text: &str) -> impl IntoElement {
    div()
        .text_sm()
        .font_weight(FontWeight::BOLD)
        .text_color(rgb(0xcc_cc_cc))
        .mb_1()
        .child(text.to_string())
}

fn action_button(
    cx: &mut Context<'_, AuthFlowApp>,
    label: &str,
    action: Action,
) -> impl IntoElement {
    let label = label.to_string();

    div()
        .id(SharedString::from(format!("action-{label}")))
        .px_3()
        .py_2()
        .rounded_md()
        .text_sm()
        .bg(rgb(0x3e_3e_3e))
        .cursor_pointer()
        .hover(|this| this.bg(rgb(0x4e_4e_4e)))
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |view, _event, _window, cx| {
                match action {
                    Action::RestoreSignedOut => {
                        context::set_auth_state(cx, AuthState::signed_out());
                    }
                    Action::Login => {
                        let user = UserIdentity::new("demo").with_name("Demo User");
                        let auth = cx.navigation().coordinator().auth().login(user);
                        context::set_auth_state(cx, auth);
                    }
                    Action::Guest => {
                        let auth = cx.navigation().coordinator().auth().continue_as_guest();
                        context::set_auth_state(cx, auth);
                    }
                    Action::Logout => {
                        let auth = cx.navigation().coordinator().auth().logout();
                        context::set_auth_state(cx, auth);
                    }
                    Action::Navigate(path) => {
                        context::navigate(cx, path);
                    }
                    Action::Back => {
                        context::go_back(cx);
                    }
                    Action::Link(url) => {
                        view.links.activated(url);
                    }
                }
                cx.notify();
            }),
        )
        .child(label)
}

// ============================================================================
// Screens
// ============================================================================

fn screen(location: &RouteLocation, _window: &mut Window, _cx: &mut App) -> AnyElement {
    let title = match location.top_level().and_then(Screen::from_segment) {
        Some(Screen::Tabs) => "Home".to_string(),
        Some(Screen::PropertyDetail) => match location.segments().get(1) {
            Some(id) => format!("Property #{id}"),
            None => "Property".to_string(),
        },
        Some(other) => other.to_string(),
        None => location.to_string(),
    };

    div()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .size_full()
        .text_color(rgb(0x1a_1a_1a))
        .child(div().text_2xl().font_weight(FontWeight::BOLD).child(title))
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x66_66_66))
                .child(location.to_string()),
        )
        .into_any_element()
}
