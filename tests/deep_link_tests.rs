//! Deep links through the coordinator: resolution, ordering with the guard,
//! and cold-start delivery.

mod common;

use common::*;
use homi_navigator::links::{query_cold_start, StaticLinkSource};
use homi_navigator::*;

// ---- Deep link then guard correction ----

#[test]
fn test_link_to_protected_screen_while_signed_out_is_corrected() {
    let mut nav = coordinator_at(Some("/welcome"));
    nav.set_auth_state(AuthState::signed_out());
    assert!(nav.surface().calls.is_empty());

    let handled = nav.handle_link(LinkEvent::Activated("homi://property-detail/42".into()));

    assert_eq!(
        nav.surface().call_log(),
        vec!["push(property-detail/42)", "replace(/welcome)"]
    );
    assert!(handled.link.is_issued());
    assert_eq!(handled.guard.path(), Some("/welcome"));
}

#[test]
fn test_link_is_corrected_even_after_epoch_redirect() {
    let mut nav = coordinator_at(Some("/(tabs)/home"));
    nav.set_auth_state(AuthState::signed_out());
    assert_eq!(nav.surface().replaces(), vec!["/welcome"]);

    nav.handle_link(LinkEvent::Activated("homi://property-detail/42".into()));

    assert_eq!(nav.surface().replaces(), vec!["/welcome", "/welcome"]);
    assert_eq!(nav.surface().current_path(), "/welcome");
}

#[test]
fn test_link_stands_for_authenticated_user() {
    let mut nav = coordinator_at(Some("/(tabs)/home"));
    nav.set_auth_state(signed_in());

    let handled = nav.handle_link(LinkEvent::Activated("homi://property-detail/42".into()));

    assert!(handled.link.is_issued());
    assert!(handled.guard.is_ignored());
    assert_eq!(nav.surface().call_log(), vec!["push(property-detail/42)"]);
    assert_eq!(nav.surface().current_path(), "property-detail/42");
}

#[test]
fn test_guest_may_follow_links() {
    let mut nav = coordinator_at(Some("/(tabs)/home"));
    nav.set_auth_state(AuthState::guest());
    nav.handle_link(LinkEvent::Activated("homi://property-detail/8".into()));
    assert_eq!(nav.surface().current_path(), "property-detail/8");
}

#[test]
fn test_repeated_link_is_deduplicated() {
    let mut nav = coordinator_at(Some("/(tabs)/home"));
    nav.set_auth_state(signed_in());

    nav.handle_link(LinkEvent::Activated("homi://property-detail/42".into()));
    let second = nav.handle_link(LinkEvent::Activated("homi://property-detail/42".into()));

    assert!(second.link.is_skipped());
    assert_eq!(nav.surface().calls.len(), 1);
    assert_eq!(nav.dispatcher().skipped_count(), 1);
}

// ---- Malformed and unknown links ----

#[test]
fn test_unknown_or_malformed_links_do_nothing() {
    let mut nav = coordinator_at(Some("/(tabs)/home"));
    nav.set_auth_state(signed_in());

    for url in [
        "homi://unknown-screen/42",
        "not a url",
        "homi://property-detail",
        "homi://",
        "ftp://property-detail/42",
    ] {
        let handled = nav.handle_link(LinkEvent::Activated(url.into()));
        assert!(handled.link.is_ignored(), "{url} should be ignored");
    }

    assert!(nav.surface().calls.is_empty());
    assert_eq!(nav.surface().current_path(), "/(tabs)/home");
}

#[test]
fn test_dev_host_prefix_is_stripped() {
    let mut nav = coordinator_at(Some("/(tabs)/home"));
    nav.set_auth_state(signed_in());

    nav.handle_link(LinkEvent::Activated(
        "exp://192.168.1.20:8081/--/property-detail/42".into(),
    ));

    assert_eq!(nav.surface().call_log(), vec!["push(property-detail/42)"]);
}

#[test]
fn test_custom_link_config() {
    let deep_links = DeepLinkConfig::empty()
        .with_scheme("listings")
        .with_screen(Screen::Profile);
    let config = NavigationConfig::default().deep_links(deep_links);
    let mut nav = NavigationCoordinator::new(RecordingSurface::at("/(tabs)/home"), config);
    nav.set_auth_state(signed_in());

    assert!(nav
        .handle_link(LinkEvent::Activated("homi://property-detail/1".into()))
        .link
        .is_ignored());
    assert!(nav
        .handle_link(LinkEvent::Activated("listings://profile/me".into()))
        .link
        .is_issued());
    assert_eq!(nav.surface().current_path(), "profile/me");
}

// ---- Cold start ----

#[test]
fn test_cold_start_link_before_session_restored() {
    let (sender, mut receiver) = link_channel();
    let source = StaticLinkSource::url("homi://property-detail/42");
    assert!(pollster::block_on(query_cold_start(&source, &sender)));

    let mut nav = coordinator_at(None);
    assert_eq!(nav.pump_links(&mut receiver), 1);
    assert!(nav.should_show_loading());
    assert_eq!(nav.surface().call_log(), vec!["push(property-detail/42)"]);

    nav.set_auth_state(signed_in());
    assert_eq!(nav.surface().calls.len(), 1);
    assert_eq!(nav.surface().current_path(), "property-detail/42");
}

#[test]
fn test_cold_start_link_then_signed_out() {
    let (sender, mut receiver) = link_channel();
    let source = StaticLinkSource::url("homi://property-detail/42");
    pollster::block_on(query_cold_start(&source, &sender));

    let mut nav = coordinator_at(None);
    nav.pump_links(&mut receiver);
    nav.set_auth_state(AuthState::signed_out());

    assert_eq!(
        nav.surface().call_log(),
        vec!["push(property-detail/42)", "replace(/welcome)"]
    );
}

#[tokio::test]
async fn test_cold_start_failure_degrades_to_no_op() {
    let (sender, mut receiver) = link_channel();
    let source = StaticLinkSource::failing(LinkSourceError::PermissionDenied);
    assert!(!query_cold_start(&source, &sender).await);

    let mut nav = coordinator_at(None);
    assert_eq!(nav.pump_links(&mut receiver), 0);
    nav.set_auth_state(AuthState::signed_out());
    assert_eq!(nav.surface().call_log(), vec!["replace(/welcome)"]);
}

#[tokio::test]
async fn test_cold_start_and_running_links_share_one_path() {
    let (sender, mut receiver) = link_channel();
    query_cold_start(&StaticLinkSource::url("homi://property-detail/1"), &sender).await;
    sender.activated("homi://property-detail/2");

    let mut nav = coordinator_at(Some("/(tabs)/home"));
    nav.set_auth_state(AuthState::guest());
    assert_eq!(nav.pump_links(&mut receiver), 2);

    assert_eq!(
        nav.surface().call_log(),
        vec!["push(property-detail/1)", "push(property-detail/2)"]
    );
}
