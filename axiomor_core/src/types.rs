//! Record types supplied by the static data provider.
//!
//! Everything here is plain data: serializable, cheap to clone into Leptos
//! components, and `Default`-able so tests can build partial records with
//! `..Default::default()`.
//!
//! # Example
//!
//! ```rust
//! use axiomor_core::types::{ProviderCategory, ProviderRecord};
//!
//! let provider = ProviderRecord {
//!     id: "kinsta".into(),
//!     name: "Kinsta".into(),
//!     category: ProviderCategory::Hosting,
//!     rating: 4.9,
//!     ..Default::default()
//! };
//! assert_eq!(provider.rating_label(), "4.9");
//! ```

use serde::{Deserialize, Serialize};

/// What a provider sells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderCategory {
    /// Domain registrar
    Domain,
    /// Web host
    #[default]
    Hosting,
}

impl ProviderCategory {
    /// Human label used in tables and cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Domain => "Domain Registrar",
            Self::Hosting => "Web Hosting",
        }
    }
}

/// One comparable hosting/domain company.
///
/// Only `id` and `name` carry meaning for the composer; the rest is
/// consumed by presentation as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderRecord {
    /// Unique identifier
    pub id: String,
    /// Display name, also the key for name-matched picks
    pub name: String,
    /// Registrar or host
    pub category: ProviderCategory,
    /// Editorial score out of 5
    pub rating: f32,
    /// Introductory price, preformatted (e.g. `"$2.99/mo"`)
    pub price: String,
    /// Renewal price, preformatted
    pub renewal_price: String,
    /// One-line positioning
    pub best_for: String,
    /// Review summary paragraph
    pub summary: String,
    /// Headline features
    pub features: Vec<String>,
    /// Review pros
    pub pros: Vec<String>,
    /// Review cons
    pub cons: Vec<String>,
    /// Measured uptime
    pub uptime: String,
    /// Support channels
    pub support: String,
    /// Outbound link, passed through untouched
    pub website: String,
    /// Optional award ribbon ("Best Overall")
    pub badge: Option<String>,
}

impl ProviderRecord {
    /// Rating with one decimal place.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// Number of filled stars (rounded, clamped to 0..=5).
    pub fn filled_stars(&self) -> usize {
        self.rating.round().clamp(0.0, 5.0) as usize
    }
}

/// One blog post teaser.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPostRecord {
    /// Unique identifier
    pub id: String,
    /// URL slug under `/blog/`
    pub slug: String,
    /// Post title
    pub title: String,
    /// Teaser paragraph
    pub excerpt: String,
    /// Category tag
    pub category: String,
    /// Byline
    pub author: String,
    /// ISO date
    pub date: String,
    /// e.g. `"6 min read"`
    pub read_time: String,
    /// Article paragraphs
    pub body: Vec<String>,
}

impl BlogPostRecord {
    /// Site-relative link to the full post.
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_clamped() {
        let mut p = ProviderRecord {
            rating: 4.6,
            ..Default::default()
        };
        assert_eq!(p.filled_stars(), 5);
        p.rating = 4.4;
        assert_eq!(p.filled_stars(), 4);
        p.rating = 9.0;
        assert_eq!(p.filled_stars(), 5);
        p.rating = -1.0;
        assert_eq!(p.filled_stars(), 0);
    }

    #[test]
    fn category_deserializes_lowercase() {
        let cat: ProviderCategory = serde_json::from_str("\"domain\"").expect("parse");
        assert_eq!(cat, ProviderCategory::Domain);
        assert_eq!(cat.label(), "Domain Registrar");
    }

    #[test]
    fn blog_href_uses_slug() {
        let post = BlogPostRecord {
            slug: "renewals".into(),
            ..Default::default()
        };
        assert_eq!(post.href(), "/blog/renewals");
    }
}
