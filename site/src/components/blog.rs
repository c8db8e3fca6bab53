//! Blog teaser cards, the home highlights strip and the full index

use axiomor_core::sections;
use axiomor_core::types::BlogPostRecord;
use leptos::prelude::*;

use super::{Icon, ICON_ARROW_RIGHT};

#[component]
pub fn BlogCard(post: BlogPostRecord) -> impl IntoView {
    view! {
        <a href=post.href() class="blog-card" data-post=post.id.clone()>
            <span class="blog-tag">{post.category.clone()}</span>
            <h3 class="blog-title">{post.title.clone()}</h3>
            <p class="blog-excerpt">{post.excerpt.clone()}</p>
            <div class="blog-meta">{post.date.clone()}" · "{post.read_time.clone()}</div>
        </a>
    }
}

fn blog_grid(posts: Vec<BlogPostRecord>) -> impl IntoView {
    view! {
        <div class="blog-grid">
            {posts.into_iter().map(|post| view! { <BlogCard post=post /> }).collect::<Vec<_>>()}
        </div>
    }
}

/// "Latest Guides & Resources" strip on the home page.
#[component]
pub fn GuidesSection(posts: Vec<BlogPostRecord>) -> impl IntoView {
    view! {
        <section id=sections::GUIDES class="section section-muted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Latest Guides & Resources"</h2>
                    <p class="section-description">
                        "Expert advice to help you build, grow, and manage your online presence."
                    </p>
                </div>
                {blog_grid(posts)}
                <div class="center">
                    <a href="/blog" class="btn btn-outline btn-lg">
                        "View All Guides"
                        <Icon path=ICON_ARROW_RIGHT size="16" />
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Every post, for `/blog`.
#[component]
pub fn BlogIndex(posts: Vec<BlogPostRecord>) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Guides & Resources"</h1>
                <p class="page-description">
                    "Plain-language guides on domains, hosting, and getting a site online."
                </p>
            </div>
        </section>
        <section class="section">
            <div class="container">{blog_grid(posts)}</div>
        </section>
    }
}

/// Full article at `/blog/<slug>`.
#[component]
pub fn BlogPost(post: BlogPostRecord) -> impl IntoView {
    view! {
        <article class="section" data-post=post.id.clone()>
            <div class="prose">
                <a href="/blog" class="back-link">"All guides"</a>
                <span class="blog-tag">{post.category.clone()}</span>
                <h1 class="page-title">{post.title.clone()}</h1>
                <div class="blog-meta">
                    {post.author.clone()}" · "{post.date.clone()}" · "{post.read_time.clone()}
                </div>
                <p class="post-lede">{post.excerpt.clone()}</p>
                {post.body.into_iter().map(|para| view! { <p>{para}</p> }).collect::<Vec<_>>()}
            </div>
        </article>
    }
}
