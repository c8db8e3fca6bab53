//! `axiomor render` - static HTML export.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use axiomor_site::{render_about, render_blog, render_home, render_post};
use tracing::info;

use crate::cli::{RenderArgs, Sources};

pub fn run(sources: &Sources, args: &RenderArgs) -> Result<()> {
    let config = sources.config()?;
    let catalog = sources.catalog()?;

    let mut pages = vec![
        ("index.html".to_string(), render_home(&catalog, &config, args.popup_preview)),
        ("blog/index.html".to_string(), render_blog(&catalog, &config)),
        ("about/index.html".to_string(), render_about(&config)),
    ];
    pages.extend(catalog.blog_posts.iter().filter_map(|post| {
        render_post(&catalog, &config, &post.slug)
            .map(|html| (format!("blog/{}/index.html", post.slug), html))
    }));

    for (rel, html) in &pages {
        write_page(&args.out, rel, html)?;
    }

    info!(
        "Rendered {} pages ({} providers, {} posts) to {}",
        pages.len(),
        catalog.providers.len(),
        catalog.blog_posts.len(),
        args.out.display()
    );
    println!("{}", args.out.display());
    Ok(())
}

fn write_page(out: &Path, rel: &str, html: &str) -> Result<()> {
    let path = out.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&path, html).with_context(|| format!("writing {}", path.display()))
}
