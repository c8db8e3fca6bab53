//! # axiomor-site
//!
//! Leptos components and static HTML rendering for the Axiomor provider
//! comparison site.
//!
//! The same components back two front ends:
//!
//! - **Static export** - [`render_home`], [`render_blog`] and
//!   [`render_about`] produce complete HTML documents (used by the
//!   `axiomor render` command)
//! - **Browser app** - the `landing` crate mounts [`pages::HomeSections`] and
//!   [`components::AdPopup`] client-side and drives the popup from the
//!   page-view controller in `axiomor-core`
//!
//! ## Quick Start
//!
//! ```rust
//! use axiomor_core::{Catalog, SiteConfig};
//! use axiomor_site::render_home;
//!
//! let html = render_home(&Catalog::builtin(), &SiteConfig::default(), false);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Detailed Provider Reviews"));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos UI components
//! - [`pages`] - page bodies built from components
//! - [`styles`] - CSS constants

pub mod components;
pub mod pages;
pub mod styles;

use axiomor_core::{Catalog, SiteConfig};
use components::{AdPopup, BlogIndex, BlogPost, Layout, SiteDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pages::{AboutContent, HomeSections};

/// Render the home page.
///
/// The static page captures the popup's initial `Hidden` state, so the
/// overlay is left out unless `popup_preview` asks for it (useful for
/// reviewing the offer copy).
pub fn render_home(catalog: &Catalog, config: &SiteConfig, popup_preview: bool) -> String {
    Owner::new().with(|| home_html(catalog, config, popup_preview))
}

fn home_html(catalog: &Catalog, config: &SiteConfig, popup_preview: bool) -> String {
    let selection = config.home.compose(catalog);
    let site_name = config.site.name.clone();
    let title = format!("{} - Best Domain & Hosting Providers Compared", site_name);
    let popup = (popup_preview && config.popup.enabled).then(|| {
        let noop = Callback::new(|_: ()| {});
        view! {
            <AdPopup
                offer=config.popup.offer.clone()
                on_close=noop
                on_decline=noop
                on_offer=noop
            />
        }
    });
    let config = config.clone();

    let doc = view! {
        <SiteDocument
            title=title
            description="Independent reviews and side-by-side comparisons of domain registrars and web hosts.".to_string()
        >
            <Layout site_name=site_name>
                <HomeSections selection=selection config=config />
            </Layout>
            {popup}
        </SiteDocument>
    };

    finish(doc.to_html())
}

/// Render the `/blog` index with every post.
pub fn render_blog(catalog: &Catalog, config: &SiteConfig) -> String {
    let site_name = config.site.name.clone();
    let title = format!("Guides & Resources - {}", site_name);
    let posts = catalog.blog_posts.clone();
    Owner::new().with(move || {
        let doc = view! {
            <SiteDocument title=title>
                <Layout site_name=site_name>
                    <BlogIndex posts=posts />
                </Layout>
            </SiteDocument>
        };
        finish(doc.to_html())
    })
}

/// Render `/blog/<slug>`, or `None` if no post has that slug.
pub fn render_post(catalog: &Catalog, config: &SiteConfig, slug: &str) -> Option<String> {
    let post = catalog.post_by_slug(slug)?.clone();
    let site_name = config.site.name.clone();
    let title = format!("{} - {}", post.title, site_name);
    let description = post.excerpt.clone();
    Some(Owner::new().with(move || {
        let doc = view! {
            <SiteDocument title=title description=description>
                <Layout site_name=site_name>
                    <BlogPost post=post />
                </Layout>
            </SiteDocument>
        };
        finish(doc.to_html())
    }))
}

/// Render the `/about` ("How We Review") page.
pub fn render_about(config: &SiteConfig) -> String {
    let site_name = config.site.name.clone();
    let title = format!("How We Review - {}", site_name);
    Owner::new().with(move || {
        let about_name = site_name.clone();
        let doc = view! {
            <SiteDocument title=title>
                <Layout site_name=site_name>
                    <AboutContent site_name=about_name />
                </Layout>
            </SiteDocument>
        };
        finish(doc.to_html())
    })
}

// Leptos doesn't include DOCTYPE, so we add it
fn finish(html: String) -> String {
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axiomor_core::types::{BlogPostRecord, ProviderRecord};
    use axiomor_core::Pick;
    use pretty_assertions::assert_eq;

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not rendered"))
    }

    #[test]
    fn renders_home_document() {
        let html = render_home(&Catalog::builtin(), &SiteConfig::default(), false);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Axiomor"));
        assert!(html.contains("Updated for 2026"));
        for id in axiomor_core::sections::HOME {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
        }
    }

    #[test]
    fn sections_render_in_order() {
        let html = render_home(&Catalog::builtin(), &SiteConfig::default(), false);
        let offsets: Vec<_> = axiomor_core::sections::HOME
            .iter()
            .map(|id| position(&html, &format!("id=\"{id}\"")))
            .collect();
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        assert_eq!(offsets, sorted);
    }

    #[test]
    fn featured_reviews_follow_pick_order() {
        let html = render_home(&Catalog::builtin(), &SiteConfig::default(), false);
        let cards: Vec<_> = ["namecheap", "bluehost", "siteground", "kinsta"]
            .iter()
            .map(|id| position(&html, &format!("data-provider=\"{id}\"")))
            .collect();
        assert!(cards.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("provider-card featured"));
        assert_eq!(html.matches("provider-card featured").count(), 1);
    }

    #[test]
    fn comparison_table_lists_every_provider() {
        let html = render_home(&Catalog::builtin(), &SiteConfig::default(), false);
        assert!(html.contains("Top 3 Providers"));
        assert_eq!(html.matches("class=\"compare-rank\"").count(), 13);
        assert_eq!(html.matches("class=\"top-pick\"").count(), 3);
        assert_eq!(html.matches("Top Pick<").count(), 3);
        assert!(html.contains("Cloudflare Registrar"));
        assert!(html.contains("A2 Hosting"));
    }

    #[test]
    fn top_picks_follow_config() {
        let mut config = SiteConfig::default();
        config.home.top_picks = 1;
        let html = render_home(&Catalog::builtin(), &config, false);
        assert!(html.contains("Top 1 Providers"));
        assert_eq!(html.matches("class=\"compare-rank\"").count(), 13);
        assert_eq!(html.matches("class=\"top-pick\"").count(), 1);
    }

    #[test]
    fn blog_highlights_are_bounded() {
        let html = render_home(&Catalog::builtin(), &SiteConfig::default(), false);
        assert_eq!(html.matches("class=\"blog-card\"").count(), 3);
        assert!(html.contains("href=\"/blog\""));
    }

    #[test]
    fn popup_absent_by_default() {
        let html = render_home(&Catalog::builtin(), &SiteConfig::default(), false);
        assert!(!html.contains("Close popup"));
        assert!(!html.contains("Genie Timeline Pro 10"));
    }

    #[test]
    fn popup_preview_renders_offer() {
        let html = render_home(&Catalog::builtin(), &SiteConfig::default(), true);
        assert!(html.contains("Close popup"));
        assert!(html.contains("Genie Timeline Pro 10"));
        assert!(html.contains("Get It Now"));
        assert!(html.contains("No Thanks"));
        assert!(html.contains("PRODS=4727905"));
        assert!(html.contains("AFFILIATE=250666"));
    }

    #[test]
    fn popup_preview_respects_disabled() {
        let mut config = SiteConfig::default();
        config.popup.enabled = false;
        let html = render_home(&Catalog::builtin(), &config, true);
        assert!(!html.contains("Close popup"));
    }

    #[test]
    fn missing_picks_shrink_reviews() {
        let catalog = Catalog {
            providers: vec![
                ProviderRecord {
                    id: "only".into(),
                    name: "Only Host".into(),
                    ..Default::default()
                },
            ],
            blog_posts: vec![],
        };
        let mut config = SiteConfig::default();
        config.home.featured = vec![Pick::named("Kinsta"), Pick::at(0), Pick::at(5)];

        let html = render_home(&catalog, &config, false);
        assert_eq!(html.matches("data-provider=").count(), 1);
        assert!(html.contains("Top 1 Providers"));
        assert_eq!(html.matches("class=\"blog-card\"").count(), 0);
    }

    #[test]
    fn renders_blog_index() {
        let mut catalog = Catalog::builtin();
        catalog.blog_posts.push(BlogPostRecord {
            id: "extra".into(),
            slug: "extra-post".into(),
            title: "Extra Post".into(),
            ..Default::default()
        });
        let html = render_blog(&catalog, &SiteConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("class=\"blog-card\"").count(), 6);
        assert!(html.contains("/blog/extra-post"));
    }

    #[test]
    fn blog_cards_link_to_rendered_posts() {
        let catalog = Catalog::builtin();
        let config = SiteConfig::default();
        let home = render_home(&catalog, &config, false);
        for post in &catalog.blog_posts[..3] {
            assert!(home.contains(&format!("href=\"{}\"", post.href())));
            let page = render_post(&catalog, &config, &post.slug)
                .unwrap_or_else(|| panic!("no page for {}", post.slug));
            assert!(page.starts_with("<!DOCTYPE html>"));
            assert!(page.contains(&post.title));
            let opening = post.body[0].split('.').next().unwrap_or_default();
            assert!(page.contains(opening), "{opening:?} missing");
        }
    }

    #[test]
    fn unknown_post_slug_renders_nothing() {
        assert_eq!(
            render_post(&Catalog::builtin(), &SiteConfig::default(), "no-such-post"),
            None
        );
    }

    #[test]
    fn review_cards_list_features() {
        let html = render_home(&Catalog::builtin(), &SiteConfig::default(), false);
        assert!(html.contains("class=\"provider-features\""));
        assert!(html.contains("Free WHOIS privacy"));
    }

    #[test]
    fn renders_about_page() {
        let mut config = SiteConfig::default();
        config.site.name = "HostCompare".into();
        let html = render_about(&config);
        assert!(html.contains("How We Review"));
        assert!(html.contains("HostCompare"));
    }
}
