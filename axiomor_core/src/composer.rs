//! Page composer: bounded, ordered display subsets of the catalog.
//!
//! Every operation is total. Asking for more records than exist returns
//! what exists; a pick that matches nothing is dropped.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::{BlogPostRecord, ProviderRecord};

/// A single featured-review selection rule.
///
/// In TOML: `{ position = 8 }` or `{ name = "Kinsta" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pick {
    /// Provider at a fixed index in the catalog
    Position(usize),
    /// First provider whose name matches exactly
    Name(String),
}

impl Pick {
    /// Pick by position.
    pub fn at(index: usize) -> Self {
        Self::Position(index)
    }

    /// Pick by exact name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    fn resolve<'a>(&self, providers: &'a [ProviderRecord]) -> Option<&'a ProviderRecord> {
        match self {
            Self::Position(index) => providers.get(*index),
            Self::Name(name) => providers.iter().find(|p| &p.name == name),
        }
    }
}

/// First `n` providers in catalog order.
pub fn select_top_providers(providers: &[ProviderRecord], n: usize) -> &[ProviderRecord] {
    &providers[..n.min(providers.len())]
}

/// Providers matching `picks`, in pick order.
///
/// Picks that resolve to nothing are omitted. Two picks resolving to the
/// same record both appear.
pub fn select_featured_review_set<'a>(
    providers: &'a [ProviderRecord],
    picks: &[Pick],
) -> Vec<&'a ProviderRecord> {
    picks.iter().filter_map(|pick| pick.resolve(providers)).collect()
}

/// First `n` blog posts in catalog order.
pub fn select_top_blog_posts(posts: &[BlogPostRecord], n: usize) -> &[BlogPostRecord] {
    &posts[..n.min(posts.len())]
}

/// The records one home-page render pass shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplaySelection {
    /// Rows of the comparison table: the whole collection, in order
    pub comparison: Vec<ProviderRecord>,
    /// Leading rows of `comparison` shown as top picks
    pub top_providers: Vec<ProviderRecord>,
    /// Detailed review cards; the first one is emphasized
    pub featured_reviews: Vec<ProviderRecord>,
    /// Blog highlight cards
    pub blog_highlights: Vec<BlogPostRecord>,
}

/// Section limits and featured picks for the home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageComposer {
    /// Comparison rows emphasized as top picks
    pub top_picks: usize,
    /// Blog highlight cards
    pub blog_limit: usize,
    /// Featured review rules, in display order
    pub featured: Vec<Pick>,
}

impl Default for PageComposer {
    fn default() -> Self {
        Self {
            top_picks: 3,
            blog_limit: 3,
            featured: vec![
                Pick::at(0),
                Pick::at(8),
                Pick::at(10),
                Pick::named("Kinsta"),
            ],
        }
    }
}

impl PageComposer {
    /// Derive a fresh selection from the current catalog snapshot.
    pub fn compose(&self, catalog: &Catalog) -> DisplaySelection {
        DisplaySelection {
            comparison: catalog.providers.clone(),
            top_providers: select_top_providers(&catalog.providers, self.top_picks).to_vec(),
            featured_reviews: select_featured_review_set(&catalog.providers, &self.featured)
                .into_iter()
                .cloned()
                .collect(),
            blog_highlights: select_top_blog_posts(&catalog.blog_posts, self.blog_limit).to_vec(),
        }
    }
}
