//! Deep-link parsing and resolution.
//!
//! Activation URLs have the shape `scheme://[--/]<screen>/<param>`:
//!
//! 1. The URL is parsed with the [`url`] crate. Anything that is not an
//!    absolute URL is rejected.
//! 2. The scheme must be one of [`DeepLinkConfig::schemes`].
//! 3. For custom schemes the authority is the first path segment
//!    (`homi://property-detail/42`). For `http`/`https` universal links it is
//!    the domain and is dropped.
//! 4. A leading development-host segment (`--`) is stripped, together with
//!    the dev-server authority in front of it, so `homi://--/property-detail/7`
//!    and `exp://192.168.0.5:8081/--/property-detail/7` both reduce to
//!    `property-detail/7`. A `--` anywhere else is an ordinary segment.
//! 5. The first remaining segment is the screen name, the second the
//!    parameter. Query and fragment are ignored.
//!
//! A [`DeepLinkTarget`] becomes a push intent only if its screen is
//! registered as linkable and the parameter is present. Everything else is
//! discarded by [`DeepLinkResolver`] with a log line, never an error.
//!
//! # Example
//!
//! ```
//! use homi_navigator::deep_link::{parse_deep_link, DeepLinkConfig};
//!
//! let config = DeepLinkConfig::default();
//! let target = parse_deep_link("homi://--/property-detail/7", &config).unwrap();
//! assert_eq!(target.screen_name, "property-detail");
//! assert_eq!(target.param.as_deref(), Some("7"));
//!
//! let intent = config.intent_for(&target).unwrap();
//! assert_eq!(intent.target, "property-detail/7");
//! ```

use crate::error::DeepLinkError;
use crate::intent::NavigationIntent;
use crate::links::LinkEvent;
use crate::screen::Screen;
use crate::state::split_path;
use crate::{debug_log, warn_log};
use std::collections::BTreeSet;
use url::Url;

/// Segment emitted by development hosts in front of the real path.
pub const DEV_PREFIX: &str = "--";

// ============================================================================
// DeepLinkTarget
// ============================================================================

/// Screen and parameter extracted from an activation URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkTarget {
    /// First path segment after normalization
    pub screen_name: String,
    /// Second path segment, if present
    pub param: Option<String>,
}

// ============================================================================
// DeepLinkConfig
// ============================================================================

/// Accepted URL prefixes and the screens they may open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkConfig {
    schemes: BTreeSet<String>,
    dev_prefix: String,
    screens: Vec<Screen>,
}

impl DeepLinkConfig {
    /// Config with no accepted schemes and no linkable screens.
    pub fn empty() -> Self {
        Self {
            schemes: BTreeSet::new(),
            dev_prefix: DEV_PREFIX.to_string(),
            screens: Vec::new(),
        }
    }

    /// Accept links with this scheme (case-insensitive).
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.schemes.insert(scheme.into().to_ascii_lowercase());
        self
    }

    /// Allow links to open this screen. Linkable screens require a parameter.
    #[must_use]
    pub fn with_screen(mut self, screen: Screen) -> Self {
        if !self.screens.contains(&screen) {
            self.screens.push(screen);
        }
        self
    }

    /// Replace the development-host segment.
    #[must_use]
    pub fn with_dev_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.dev_prefix = prefix.into();
        self
    }

    /// Accepted schemes.
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }

    /// Whether `scheme` is accepted.
    pub fn accepts_scheme(&self, scheme: &str) -> bool {
        self.schemes.contains(&scheme.to_ascii_lowercase())
    }

    /// Screens links may open.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Turn a parsed target into a push intent.
    pub fn intent_for(&self, target: &DeepLinkTarget) -> Result<NavigationIntent, DeepLinkError> {
        let screen = Screen::from_segment(&target.screen_name)
            .filter(|screen| self.screens.contains(screen))
            .ok_or_else(|| DeepLinkError::UnknownScreen {
                screen: target.screen_name.clone(),
            })?;

        match target.param.as_deref() {
            Some(param) if !param.is_empty() => Ok(NavigationIntent::push(format!(
                "{}/{}",
                screen.segment(),
                param
            ))),
            _ => Err(DeepLinkError::MissingParam {
                screen: target.screen_name.clone(),
            }),
        }
    }
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self::empty()
            .with_scheme("homi")
            .with_scheme("exp")
            .with_scheme("exp+homi")
            .with_screen(Screen::PropertyDetail)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse an activation URL into a [`DeepLinkTarget`].
pub fn parse_deep_link(raw: &str, config: &DeepLinkConfig) -> Result<DeepLinkTarget, DeepLinkError> {
    let url = Url::parse(raw.trim()).map_err(|err| DeepLinkError::Unparseable {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;

    if !config.accepts_scheme(url.scheme()) {
        return Err(DeepLinkError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
        });
    }

    let mut segments = Vec::new();
    if !matches!(url.scheme(), "http" | "https") {
        if let Some(host) = url.host_str().filter(|h| !h.is_empty()) {
            segments.push(host.to_string());
        }
    }
    let host_segments = segments.len();
    segments.extend(split_path(url.path()));

    // `--` only counts in leading position: first segment, or right behind a
    // dev-server authority such as `192.168.0.5:8081`.
    let is_dev = |index: usize| segments.get(index) == Some(&config.dev_prefix);
    let strip = if is_dev(0) {
        Some(0)
    } else if host_segments == 1 && is_dev(1) && is_dev_server(&url) {
        Some(1)
    } else {
        None
    };
    if let Some(dev) = strip {
        segments.drain(..=dev);
    }

    let mut segments = segments.into_iter();
    let screen_name = segments.next().ok_or(DeepLinkError::EmptyPath)?;
    Ok(DeepLinkTarget {
        screen_name,
        param: segments.next(),
    })
}

/// Whether the URL's host is a network authority rather than a screen name.
fn is_dev_server(url: &Url) -> bool {
    url.port().is_some()
        || url
            .host_str()
            .is_some_and(|host| host == "localhost" || host.contains('.') || host.contains(':'))
}

// ============================================================================
// DeepLinkResolver
// ============================================================================

/// Converts activation URLs into push intents, discarding anything invalid.
#[derive(Debug, Clone, Default)]
pub struct DeepLinkResolver {
    config: DeepLinkConfig,
}

impl DeepLinkResolver {
    /// Create a resolver for `config`.
    pub fn new(config: DeepLinkConfig) -> Self {
        Self { config }
    }

    /// The resolver's configuration.
    pub fn config(&self) -> &DeepLinkConfig {
        &self.config
    }

    /// Resolve a URL delivered while the process is running.
    ///
    /// Never fails: malformed or unrecognized links yield `None`.
    pub fn on_activation(&self, url: &str) -> Option<NavigationIntent> {
        debug_log!("Deep link received: '{}'", url);
        let resolved = parse_deep_link(url, &self.config)
            .and_then(|target| self.config.intent_for(&target));

        match resolved {
            Ok(intent) => Some(intent),
            Err(err @ (DeepLinkError::UnknownScreen { .. } | DeepLinkError::MissingParam { .. })) => {
                debug_log!("Ignoring deep link '{}': {}", url, err);
                None
            }
            Err(err) => {
                warn_log!("Discarding deep link '{}': {}", url, err);
                None
            }
        }
    }

    /// Resolve any link event. Cold-start and running deliveries share one path.
    pub fn resolve(&self, event: &LinkEvent) -> Option<NavigationIntent> {
        self.on_activation(event.url())
    }
}

// ============================================================================
// Tests
// ============================================================================
