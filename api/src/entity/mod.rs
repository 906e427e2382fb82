//! SeaORM entities
//!
//! Table models matching `migrations/001_initial.sql`.

pub mod posts;
pub mod view_stats;
