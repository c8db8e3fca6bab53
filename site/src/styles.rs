//! CSS for the site.
//!
//! The static renderer inlines [`SITE_CSS`]; the browser app links the same
//! sheet from `index.html`.

/// Content Security Policy for statically rendered pages.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline'; script-src 'self'";

/// Complete stylesheet - light editorial theme with a blue brand accent.
pub const SITE_CSS: &str = r#"
:root {
    --brand-50: #eff6ff;
    --brand-100: #dbeafe;
    --brand-400: #60a5fa;
    --brand-600: #2563eb;
    --brand-700: #1d4ed8;
    --brand-900: #1e3a8a;
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-900: #111827;
    --radius: 12px;
    --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { margin: 0; font-family: var(--font); color: var(--gray-900); background: #fff; line-height: 1.5; }
a { color: inherit; text-decoration: none; }
img { max-width: 100%; }

.container { max-width: 1280px; margin: 0 auto; padding: 0 24px; }
.container-narrow { max-width: 1024px; margin: 0 auto; padding: 0 24px; }
.section { padding: 64px 0; }
.section-muted { background: var(--gray-50); }
.section-dark { background: var(--gray-900); color: #fff; }
.section-brand { background: var(--brand-600); color: #fff; padding: 80px 0; text-align: center; }
.section-header { text-align: center; margin-bottom: 48px; }
.section-title { font-size: 30px; font-weight: 700; margin: 0; }
.section-description { margin-top: 16px; font-size: 18px; color: var(--gray-600); }

/* Buttons */
.btn { display: inline-flex; align-items: center; justify-content: center; gap: 8px; padding: 10px 18px; border-radius: 8px; font-weight: 600; font-size: 14px; border: 1px solid transparent; cursor: pointer; transition: background 0.15s; }
.btn-lg { padding: 14px 28px; font-size: 16px; }
.btn-primary { background: var(--brand-600); color: #fff; }
.btn-primary:hover { background: var(--brand-700); }
.btn-secondary { background: #fff; color: var(--brand-700); border-color: var(--gray-300); }
.btn-outline { background: transparent; color: var(--gray-700); border-color: var(--gray-300); }
.btn-outline:hover { background: var(--gray-50); }

/* Nav + footer */
.site-nav { position: sticky; top: 0; z-index: 40; background: rgba(255,255,255,0.95); border-bottom: 1px solid var(--gray-100); }
.site-nav-inner { display: flex; align-items: center; justify-content: space-between; height: 64px; }
.site-brand { font-weight: 800; font-size: 20px; color: var(--brand-600); }
.site-nav-links { display: flex; gap: 24px; font-size: 14px; color: var(--gray-600); }
.site-nav-links a:hover, .site-nav-links button:hover { color: var(--brand-600); }
.site-nav-links button { background: none; border: 0; font: inherit; color: inherit; cursor: pointer; padding: 0; }
.site-footer { background: var(--gray-900); color: var(--gray-400); padding: 40px 0; font-size: 14px; }
.site-footer-inner { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 16px; }
.site-footer a:hover { color: #fff; }
.disclosure { margin-top: 16px; font-size: 12px; color: var(--gray-500); }

/* Hero */
.hero { position: relative; overflow: hidden; padding: 96px 0 112px; text-align: center; }
.hero-badge { display: inline-flex; border-radius: 999px; padding: 4px 12px; font-size: 14px; font-weight: 500; color: var(--brand-600); background: var(--brand-50); border: 1px solid var(--brand-100); margin-bottom: 24px; }
.hero-title { font-size: 56px; font-weight: 800; letter-spacing: -0.02em; margin: 0 0 24px; }
.hero-title-accent { color: var(--brand-600); }
.hero-description { max-width: 672px; margin: 16px auto 40px; font-size: 20px; color: var(--gray-500); }
.hero-actions { display: flex; justify-content: center; gap: 16px; }
.hero-blob { position: absolute; top: 0; left: 50%; width: 800px; height: 800px; transform: translate(-50%, -50%); background: var(--brand-50); border-radius: 50%; filter: blur(64px); opacity: 0.5; z-index: -1; }

/* Comparison table */
.compare-table-wrap { overflow-x: auto; background: #fff; border-radius: var(--radius); box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.compare-table { width: 100%; border-collapse: collapse; font-size: 14px; }
.compare-table th { text-align: left; padding: 14px 16px; background: var(--gray-100); color: var(--gray-600); font-weight: 600; }
.compare-table td { padding: 16px; border-top: 1px solid var(--gray-100); vertical-align: middle; }
.compare-table tr.top-pick td { background: var(--brand-50); }
.compare-name { font-weight: 700; }
.top-pick-label { display: inline-block; margin-left: 8px; padding: 2px 8px; border-radius: 999px; background: var(--brand-600); color: #fff; font-size: 11px; font-weight: 600; }
.compare-rank { display: inline-block; width: 24px; height: 24px; border-radius: 50%; background: var(--brand-600); color: #fff; text-align: center; font-size: 12px; line-height: 24px; margin-right: 8px; }

/* Provider review cards */
.review-list { display: flex; flex-direction: column; gap: 32px; }
.provider-card { background: #fff; border: 1px solid var(--gray-100); border-radius: var(--radius); padding: 32px; box-shadow: 0 1px 3px rgba(0,0,0,0.06); }
.provider-card.featured { border: 2px solid var(--brand-600); box-shadow: 0 10px 25px rgba(37,99,235,0.12); }
.provider-card-header { display: flex; justify-content: space-between; align-items: flex-start; gap: 16px; flex-wrap: wrap; }
.provider-name { font-size: 24px; font-weight: 700; margin: 0; }
.provider-category { font-size: 13px; color: var(--gray-500); }
.provider-badge { display: inline-block; background: var(--brand-600); color: #fff; font-size: 12px; font-weight: 600; border-radius: 999px; padding: 2px 10px; margin-bottom: 8px; }
.rating { color: #f59e0b; font-size: 16px; letter-spacing: 2px; }
.rating-value { color: var(--gray-700); font-weight: 600; margin-left: 6px; letter-spacing: 0; }
.provider-summary { color: var(--gray-600); margin: 16px 0; }
.provider-features { list-style: none; padding: 0; margin: 0 0 16px; display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 8px; font-size: 14px; }
.provider-features li { display: flex; align-items: center; gap: 6px; }
.provider-facts { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; padding: 16px 0; border-top: 1px solid var(--gray-100); border-bottom: 1px solid var(--gray-100); font-size: 14px; }
.fact-label { display: block; color: var(--gray-500); font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em; }
.pros-cons { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin: 20px 0; font-size: 14px; }
.pros-cons ul { list-style: none; margin: 8px 0 0; padding: 0; }
.pros-cons li { display: flex; gap: 8px; align-items: flex-start; margin-bottom: 6px; }
.pros li svg { color: #16a34a; flex-shrink: 0; }
.cons li svg { color: #dc2626; flex-shrink: 0; }

/* Blog */
.blog-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; margin-bottom: 40px; }
.blog-card { display: flex; flex-direction: column; background: #fff; border: 1px solid var(--gray-100); border-radius: var(--radius); padding: 24px; transition: box-shadow 0.15s; }
.blog-card:hover { box-shadow: 0 10px 25px rgba(0,0,0,0.08); }
.blog-tag { align-self: flex-start; font-size: 12px; font-weight: 600; color: var(--brand-700); background: var(--brand-50); border-radius: 999px; padding: 2px 10px; }
.blog-title { font-size: 18px; font-weight: 700; margin: 12px 0 8px; }
.blog-excerpt { color: var(--gray-600); font-size: 14px; flex: 1; }
.blog-meta { margin-top: 16px; font-size: 12px; color: var(--gray-500); }
.center { text-align: center; }

/* Pillars */
.pillars { display: grid; grid-template-columns: repeat(3, 1fr); gap: 48px; text-align: center; }
.pillar-icon { display: flex; align-items: center; justify-content: center; width: 64px; height: 64px; margin: 0 auto 24px; border-radius: 50%; background: var(--brand-900); color: var(--brand-400); }
.pillar-title { font-size: 20px; font-weight: 700; margin: 0 0 16px; }
.pillar-text { color: var(--gray-400); }

/* CTA */
.cta-title { font-size: 30px; font-weight: 700; margin: 0 0 24px; }
.cta-text { font-size: 20px; color: var(--brand-100); margin: 0 0 40px; }

/* Page header (blog, about) */
.page-header { padding: 64px 0 32px; text-align: center; }
.page-title { font-size: 40px; font-weight: 800; margin: 0; }
.page-description { color: var(--gray-500); font-size: 18px; }
.prose { max-width: 720px; margin: 0 auto; color: var(--gray-700); font-size: 17px; }
.prose h2 { font-size: 22px; margin-top: 40px; }
.post-lede { font-size: 19px; color: var(--gray-900); }
.back-link { display: inline-block; margin-bottom: 16px; font-size: 14px; }

/* Ad popup */
.popup-backdrop { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.5); backdrop-filter: blur(4px); }
.popup { position: relative; width: 100%; max-width: 448px; margin: 0 16px; background: #fff; border-radius: 16px; overflow: hidden; box-shadow: 0 25px 50px rgba(0,0,0,0.25); }
.popup-close { position: absolute; top: 12px; right: 12px; z-index: 10; padding: 4px; border: 0; border-radius: 50%; background: var(--gray-100); color: var(--gray-600); cursor: pointer; }
.popup-close:hover { background: var(--gray-300); }
.popup-media { display: flex; align-items: center; justify-content: center; padding: 24px; background: var(--gray-900); }
.popup-media img { width: 224px; height: auto; }
.popup-body { padding: 24px; }
.popup-title { font-size: 20px; font-weight: 700; margin: 0 0 8px; }
.popup-text { font-size: 14px; color: var(--gray-600); margin: 0 0 16px; }
.popup-actions { display: flex; gap: 12px; }
.popup-actions > * { flex: 1; }

@media (max-width: 768px) {
    .hero-title { font-size: 36px; }
    .blog-grid, .pillars, .pros-cons { grid-template-columns: 1fr; }
    .provider-facts { grid-template-columns: repeat(2, 1fr); }
    .site-nav-links { gap: 12px; }
}
"#;
