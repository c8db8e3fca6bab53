//! Argument definitions.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axiomor_core::{Catalog, DismissReason, SiteConfig};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "axiomor")]
#[command(about = "Render and preview the Axiomor provider comparison site")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(flatten)]
    pub sources: Sources,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the static site (home, blog, about) as HTML
    Render(RenderArgs),
    /// List the provider and blog catalog
    Catalog(CatalogArgs),
    /// Run the popup and scroll controllers against a real clock
    Preview(PreviewArgs),
}

/// Where config and catalog come from.
#[derive(Args, Debug, Clone, Default)]
pub struct Sources {
    /// Config file (default: ./axiomor.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog JSON file (default: built-in catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

impl Sources {
    pub fn config(&self) -> Result<SiteConfig> {
        match &self.config {
            Some(path) => SiteConfig::load(path)
                .with_context(|| format!("loading config {}", path.display())),
            None => Ok(SiteConfig::discover(Path::new("."))),
        }
    }

    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("loading catalog {}", path.display())),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output directory
    #[arg(long, short)]
    pub out: PathBuf,

    /// Render the promotional popup open on the home page
    #[arg(long)]
    pub popup_preview: bool,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Override the popup delay from config
    #[arg(long)]
    pub popup_delay_ms: Option<u64>,

    /// Dismiss the popup this many ms after mount
    #[arg(long)]
    pub dismiss_after_ms: Option<u64>,

    /// Which control dismisses the popup
    #[arg(long, value_enum, default_value_t = DismissWith::Close)]
    pub dismiss_with: DismissWith,

    /// Tear the page view down this many ms after mount
    #[arg(long)]
    pub teardown_after_ms: Option<u64>,

    /// Navigate to the home page with a scroll intent for this section id
    #[arg(long)]
    pub scroll_to: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissWith {
    Close,
    Decline,
    Offer,
}

impl From<DismissWith> for DismissReason {
    fn from(value: DismissWith) -> Self {
        match value {
            DismissWith::Close => DismissReason::Close,
            DismissWith::Decline => DismissReason::Decline,
            DismissWith::Offer => DismissReason::Offer,
        }
    }
}
