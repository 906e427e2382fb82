//! Feed renderer
//!
//! Renders published posts to sitemap.xml and RSS 2.0 documents.

use urlencoding::encode;

use crate::domain::entities::Post;

/// Length of the body excerpt used when a post has no meta description
pub const RSS_EXCERPT_CHARS: usize = 200;

/// Site-level fields shared by the sitemap and the feed
#[derive(Debug, Clone)]
pub struct SiteInfo {
    /// Base URL without trailing slash
    pub url: String,
    pub title: String,
    pub description: String,
}

impl SiteInfo {
    pub fn post_url(&self, post: &Post) -> String {
        format!("{}/posts/{}", self.url, encode(&post.slug))
    }
}

/// Render a sitemaps.org urlset with the site root and every post
pub fn render_sitemap(site: &SiteInfo, posts: &[Post]) -> String {
    let mut buf = String::new();

    buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    buf.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    buf.push_str(&format!(
        "  <url>\n    <loc>{}/</loc>\n  </url>\n",
        escape_xml(&site.url)
    ));

    for post in posts.iter().filter(|p| p.published) {
        buf.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>\n",
            escape_xml(&site.post_url(post)),
            post.updated_at.format("%Y-%m-%d")
        ));
    }

    buf.push_str("</urlset>\n");
    buf
}

/// Render an RSS 2.0 channel of the given posts
pub fn render_rss(site: &SiteInfo, posts: &[Post]) -> String {
    let mut buf = String::new();

    buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    buf.push_str("<rss version=\"2.0\">\n<channel>\n");
    buf.push_str(&format!("  <title>{}</title>\n", escape_xml(&site.title)));
    buf.push_str(&format!("  <link>{}</link>\n", escape_xml(&site.url)));
    buf.push_str(&format!(
        "  <description>{}</description>\n",
        escape_xml(&site.description)
    ));

    for post in posts.iter().filter(|p| p.published) {
        buf.push_str(&render_item(site, post));
    }

    buf.push_str("</channel>\n</rss>\n");
    buf
}

fn render_item(site: &SiteInfo, post: &Post) -> String {
    let link = escape_xml(&site.post_url(post));
    format!(
        "  <item>\n    <title>{}</title>\n    <link>{}</link>\n    <guid>{}</guid>\n    <pubDate>{}</pubDate>\n    <description>{}</description>\n  </item>\n",
        escape_xml(&post.title),
        link,
        link,
        post.created_at.to_rfc2822(),
        escape_xml(&post.excerpt(RSS_EXCERPT_CHARS))
    )
}

/// Escape the five XML special characters
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
