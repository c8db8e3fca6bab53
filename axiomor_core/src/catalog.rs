//! Static data provider.
//!
//! A [`Catalog`] is an immutable snapshot of the provider and blog-post
//! collections. The built-in snapshot is embedded at compile time; the CLI
//! can swap in another JSON file with the same shape.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::{Result, SiteError};
use crate::types::{BlogPostRecord, ProviderRecord};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Ordered provider and blog-post collections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Providers in editorial order
    pub providers: Vec<ProviderRecord>,
    /// Blog posts, newest first
    pub blog_posts: Vec<BlogPostRecord>,
}

impl Catalog {
    /// The catalog shipped with the site.
    ///
    /// A broken embedded file degrades to an empty catalog; every section
    /// then simply renders nothing.
    pub fn builtin() -> Self {
        match Self::from_json_str(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("built-in catalog is malformed: {}", e);
                Self::default()
            }
        }
    }

    /// Parse a catalog from JSON, dropping records with a repeated id.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(catalog.dedup())
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        let catalog = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            providers = catalog.providers.len(),
            posts = catalog.blog_posts.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Provider at a fixed position, if the collection is that long.
    pub fn provider_at(&self, index: usize) -> Option<&ProviderRecord> {
        self.providers.get(index)
    }

    /// First provider whose name matches exactly.
    pub fn provider_named(&self, name: &str) -> Option<&ProviderRecord> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Blog post served at `/blog/<slug>`.
    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPostRecord> {
        self.blog_posts.iter().find(|p| p.slug == slug)
    }

    fn dedup(mut self) -> Self {
        let mut seen = HashSet::new();
        self.providers.retain(|p| {
            let fresh = seen.insert(p.id.clone());
            if !fresh {
                warn!(id = %p.id, "dropping provider with duplicate id");
            }
            fresh
        });

        let mut seen = HashSet::new();
        self.blog_posts.retain(|post| {
            let fresh = seen.insert(post.id.clone());
            if !fresh {
                warn!(id = %post.id, "dropping blog post with duplicate id");
            }
            fresh
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.providers.len(), 13);
        assert_eq!(catalog.blog_posts.len(), 5);
        assert_eq!(catalog.provider_at(0).map(|p| p.name.as_str()), Some("Namecheap"));
        assert_eq!(catalog.provider_at(8).map(|p| p.name.as_str()), Some("Bluehost"));
        assert_eq!(catalog.provider_at(10).map(|p| p.name.as_str()), Some("SiteGround"));
        assert_eq!(catalog.provider_at(12).map(|p| p.name.as_str()), Some("Kinsta"));
    }

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.providers.iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), catalog.providers.len());
    }

    #[test]
    fn duplicate_ids_keep_first_record() {
        let json = r#"{
            "providers": [
                {"id": "a", "name": "First"},
                {"id": "a", "name": "Second"},
                {"id": "b", "name": "Third"}
            ],
            "blog_posts": [{"id": "p"}, {"id": "p"}]
        }"#;
        let catalog = Catalog::from_json_str(json).expect("parse");
        let names: Vec<_> = catalog.providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["First", "Third"]);
        assert_eq!(catalog.blog_posts.len(), 1);
    }

    #[test]
    fn provider_named_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.provider_named("Kinsta").is_some());
        assert!(catalog.provider_named("kinsta").is_none());
    }

    #[test]
    fn every_builtin_post_resolves_by_slug() {
        let catalog = Catalog::builtin();
        for post in &catalog.blog_posts {
            let found = catalog.post_by_slug(&post.slug).map(|p| p.id.as_str());
            assert_eq!(found, Some(post.id.as_str()));
            assert!(!post.body.is_empty(), "{} has no body", post.slug);
        }
        assert!(catalog.post_by_slug("no-such-post").is_none());
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).expect("create");
        write!(file, r#"{{"providers": [{{"id": "x", "name": "X"}}]}}"#).expect("write");

        let catalog = Catalog::load(&path).expect("load");
        assert_eq!(catalog.providers.len(), 1);
        assert!(catalog.blog_posts.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = Catalog::load(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }

    #[test]
    fn load_invalid_json_is_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{ not json").expect("write");
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, SiteError::CatalogParse(_)));
    }
}
