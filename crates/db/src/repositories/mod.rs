//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod game_repo;

pub use category_repo::CategoryRepo;
pub use game_repo::GameRepo;
