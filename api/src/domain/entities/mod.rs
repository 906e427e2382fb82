//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod content_type;
pub mod post;
pub mod seo;
pub mod view_stat;

pub use content_type::ContentType;
pub use post::Post;
pub use seo::{ContentSeoInput, SeoGrade, SeoScoreResult};
pub use view_stat::{ViewStatRow, ViewStatsFilter, ViewStatsMap};
