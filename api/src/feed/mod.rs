//! Feed module
//!
//! Sitemap and RSS rendering for published posts.

pub mod renderer;

pub use renderer::{render_rss, render_sitemap, SiteInfo};
