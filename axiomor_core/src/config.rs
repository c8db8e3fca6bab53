//! Configuration file support.
//!
//! Loads optional `axiomor.toml` from the site root. Every field has a
//! default, so an empty file (or none) reproduces the stock home page.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::composer::PageComposer;
use crate::error::{Result, SiteError};

/// File name looked up by [`SiteConfig::discover`].
pub const CONFIG_FILE: &str = "axiomor.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMeta,
    /// Home page section limits and featured picks
    pub home: PageComposer,
    pub popup: PopupConfig,
    pub scroll: ScrollConfig,
}

/// Branding shown in the shell and hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub name: String,
    /// Pill above the hero title
    pub badge: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "Axiomor".into(),
            badge: "Updated for 2026".into(),
        }
    }
}

/// Promotional popup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub enabled: bool,
    /// Milliseconds between page mount and disclosure
    pub delay_ms: u64,
    pub offer: PromoOffer,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: 3000,
            offer: PromoOffer::default(),
        }
    }
}

/// The product advertised in the popup.
///
/// `url` is a third-party checkout link; its affiliate query string is
/// rendered exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoOffer {
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
    pub url: String,
    pub cta_label: String,
    pub decline_label: String,
}

impl Default for PromoOffer {
    fn default() -> Self {
        Self {
            title: "Genie Timeline Pro 10".into(),
            description: "Real-time automatic backups, version history, disaster recovery, \
                          encryption, and easy restore. Protect your personal and system data \
                          continuously with minimal performance impact."
                .into(),
            image: "/genie-timeline-10.png".into(),
            image_alt: "Genie Timeline Pro 10".into(),
            url: "https://store.zoolz.com/order/checkout.php?PRODS=4727905&QTY=1&AFFILIATE=250666&CART=1"
                .into(),
            cta_label: "Get It Now".into(),
            decline_label: "No Thanks".into(),
        }
    }
}

/// Navigation-intent scroll settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Milliseconds to let the page render before scrolling
    pub delay_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { delay_ms: 100 }
    }
}

impl SiteConfig {
    /// Load `axiomor.toml` from `root`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn discover(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific path, failing on IO or parse errors.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        toml::from_str(&content).map_err(|source| SiteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
