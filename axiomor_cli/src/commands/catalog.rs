//! `axiomor catalog` - list providers and posts.

use anyhow::{Context, Result};
use axiomor_core::Catalog;

use crate::cli::{CatalogArgs, Sources};

pub fn run(sources: &Sources, args: &CatalogArgs) -> Result<()> {
    let catalog = sources.catalog()?;
    if args.json {
        let json = serde_json::to_string_pretty(&catalog).context("serializing catalog")?;
        println!("{json}");
    } else {
        print!("{}", format_catalog(&catalog));
    }
    Ok(())
}

fn format_catalog(catalog: &Catalog) -> String {
    let mut out = format!("Providers ({})\n", catalog.providers.len());
    for (idx, p) in catalog.providers.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}  {:<16} {:<8} {:<4} {}\n",
            idx,
            p.name,
            p.category.label(),
            p.rating_label(),
            p.price
        ));
    }
    out.push_str(&format!("Posts ({})\n", catalog.blog_posts.len()));
    for (idx, post) in catalog.blog_posts.iter().enumerate() {
        out.push_str(&format!("  {:>2}  {}  {}\n", idx, post.href(), post.title));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_providers_with_positions() {
        let text = format_catalog(&Catalog::builtin());
        assert!(text.starts_with("Providers (13)\n"));
        assert!(text.contains("Namecheap"));
        assert!(text.contains("Posts (5)"));
        assert!(text.contains("/blog/"));
    }

    #[test]
    fn empty_catalog() {
        let text = format_catalog(&Catalog::default());
        assert_eq!(text, "Providers (0)\nPosts (0)\n");
    }
}
