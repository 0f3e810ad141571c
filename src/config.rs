//! Navigation configuration.
//!
//! ```
//! use homi_navigator::{NavigationConfig, RouteClassification};
//! use homi_navigator::deep_link::DeepLinkConfig;
//!
//! let config = NavigationConfig::default()
//!     .home_path("/(tabs)/home")
//!     .welcome_path("/welcome")
//!     .classification(RouteClassification::standard())
//!     .deep_links(DeepLinkConfig::default().with_scheme("homi-staging"));
//!
//! assert!(config.deep_link_config().accepts_scheme("homi-staging"));
//! ```

use crate::deep_link::{DeepLinkConfig, DeepLinkResolver};
use crate::guards::{NavigationGuard, HOME_PATH, WELCOME_PATH};
use crate::screen::RouteClassification;

/// Everything the guard and the resolver need to know about the app.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct NavigationConfig {
    home: String,
    welcome: String,
    classification: RouteClassification,
    deep_links: DeepLinkConfig,
}

impl NavigationConfig {
    /// Where authenticated sessions are sent.
    pub fn home_path(mut self, path: impl Into<String>) -> Self {
        self.home = path.into();
        self
    }

    /// Where unauthenticated sessions are sent.
    pub fn welcome_path(mut self, path: impl Into<String>) -> Self {
        self.welcome = path.into();
        self
    }

    /// Segment classification table.
    pub fn classification(mut self, classification: RouteClassification) -> Self {
        self.classification = classification;
        self
    }

    /// Deep-link schemes and linkable screens.
    pub fn deep_links(mut self, deep_links: DeepLinkConfig) -> Self {
        self.deep_links = deep_links;
        self
    }

    /// Configured home path.
    pub fn home(&self) -> &str {
        &self.home
    }

    /// Configured welcome path.
    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    /// Configured deep-link settings.
    pub fn deep_link_config(&self) -> &DeepLinkConfig {
        &self.deep_links
    }

    /// Build a fresh guard (restoring phase, no epoch yet).
    pub fn build_guard(&self) -> NavigationGuard {
        NavigationGuard::new(self.classification.clone())
            .with_targets(self.home.as_str(), self.welcome.as_str())
    }

    /// Build a resolver.
    pub fn build_resolver(&self) -> DeepLinkResolver {
        DeepLinkResolver::new(self.deep_links.clone())
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            home: HOME_PATH.to_string(),
            welcome: WELCOME_PATH.to_string(),
            classification: RouteClassification::standard(),
            deep_links: DeepLinkConfig::default(),
        }
    }
}
