//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod post_repo;
pub mod view_stat_repo;


pub use post_repo::PostgresPostRepository;
pub use view_stat_repo::PostgresViewStatRepository;
