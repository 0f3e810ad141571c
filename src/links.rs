//! Unified delivery of activation URLs.
//!
//! The platform reports links two ways: an event when a URL arrives while the
//! process is running, and a one-shot query for the URL that launched the
//! process. Both are funneled into one [`futures::channel::mpsc`] channel so
//! the resolver handles every link the same way.
//!
//! ```text
//! on_open_urls ──▶ LinkSender::activated ─┐
//!                                          ├──▶ LinkReceiver ──▶ DeepLinkResolver
//! LinkSource::initial_url ─▶ query_cold_start ┘
//! ```
//!
//! # Example
//!
//! ```
//! use homi_navigator::links::{link_channel, LinkEvent};
//!
//! let (sender, mut receiver) = link_channel();
//! sender.activated("homi://property-detail/42");
//! assert_eq!(
//!     receiver.drain_ready(),
//!     vec![LinkEvent::Activated("homi://property-detail/42".into())]
//! );
//! ```

use crate::error::LinkSourceError;
use crate::{debug_log, warn_log};
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::{FutureExt, StreamExt};
use std::future::Future;

/// An activation URL and how it was delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// The URL that launched the process
    ColdStart(String),
    /// A URL delivered while the process was running
    Activated(String),
}

impl LinkEvent {
    /// The raw URL.
    pub fn url(&self) -> &str {
        match self {
            LinkEvent::ColdStart(url) | LinkEvent::Activated(url) => url,
        }
    }
}

/// Create a connected sender/receiver pair.
pub fn link_channel() -> (LinkSender, LinkReceiver) {
    let (tx, rx) = unbounded();
    (LinkSender { tx }, LinkReceiver { rx })
}

/// Producer half. Cheap to clone and `Send`, so it can be moved into
/// platform callbacks.
#[derive(Debug, Clone)]
pub struct LinkSender {
    tx: UnboundedSender<LinkEvent>,
}

impl LinkSender {
    /// Deliver a URL that arrived while running.
    ///
    /// Returns `false` if the receiver is gone.
    pub fn activated(&self, url: impl Into<String>) -> bool {
        self.send(LinkEvent::Activated(url.into()))
    }

    /// Deliver a batch of URLs, e.g. from GPUI's `Application::on_open_urls`.
    pub fn forward_urls(&self, urls: Vec<String>) {
        for url in urls {
            self.activated(url);
        }
    }

    /// Deliver any event.
    pub fn send(&self, event: LinkEvent) -> bool {
        match self.tx.unbounded_send(event) {
            Ok(()) => true,
            Err(err) => {
                let event = err.into_inner();
                warn_log!("Link receiver closed; dropping '{}'", event.url());
                false
            }
        }
    }
}

/// Consumer half, drained by the coordinator.
#[derive(Debug)]
pub struct LinkReceiver {
    rx: UnboundedReceiver<LinkEvent>,
}

impl LinkReceiver {
    /// Take every event that is ready now, without waiting.
    pub fn drain_ready(&mut self) -> Vec<LinkEvent> {
        let mut events = Vec::new();
        while let Some(Some(event)) = self.rx.next().now_or_never() {
            events.push(event);
        }
        events
    }

    /// Wait for the next event. `None` once every sender is dropped.
    pub async fn next_event(&mut self) -> Option<LinkEvent> {
        self.rx.next().await
    }
}

// ============================================================================
// Cold start
// ============================================================================

/// Platform query for the URL that launched the process.
pub trait LinkSource {
    /// Resolve the launching URL, if there was one.
    fn initial_url(&self) -> impl Future<Output = Result<Option<String>, LinkSourceError>>;
}

/// Query `source` once and deliver the launching URL, if any.
///
/// Failures are logged and swallowed; start-up is never blocked on them.
/// Returns `true` if an event was delivered.
pub async fn query_cold_start<L: LinkSource>(source: &L, sender: &LinkSender) -> bool {
    match source.initial_url().await {
        Ok(Some(url)) => {
            debug_log!("Cold-start link: '{}'", url);
            sender.send(LinkEvent::ColdStart(url))
        }
        Ok(None) => false,
        Err(err) => {
            warn_log!("Cold-start link query failed: {}", err);
            false
        }
    }
}

/// A [`LinkSource`] with a fixed answer.
///
/// Desktop hosts learn the launching URL from the command line; use
/// [`StaticLinkSource::from_args`] there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLinkSource {
    answer: Result<Option<String>, LinkSourceError>,
}

impl StaticLinkSource {
    /// Launched by `url`.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            answer: Ok(Some(url.into())),
        }
    }

    /// Launched without a URL.
    pub fn none() -> Self {
        Self { answer: Ok(None) }
    }

    /// The query fails with `err`.
    pub fn failing(err: LinkSourceError) -> Self {
        Self { answer: Err(err) }
    }

    /// First argument that looks like a URL (`scheme://...`).
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            answer: Ok(args.into_iter().find(|arg| arg.contains("://"))),
        }
    }
}

impl LinkSource for StaticLinkSource {
    async fn initial_url(&self) -> Result<Option<String>, LinkSourceError> {
        self.answer.clone()
    }
}
