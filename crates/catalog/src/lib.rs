//! Catalog access layer.
//!
//! Translates page-level intents (list by category, fetch by slug, search,
//! similar games) into queries against a [`CatalogStore`] backend, and
//! substitutes [`FallbackData`] when the store is unreachable or was never
//! configured.
//!
//! Every operation on [`Catalog`] comes in two forms:
//!
//! - `try_*` methods return [`CatalogResult`], keeping "not found"
//!   (`Ok(None)` / empty) apart from "the store failed" (`Err`).
//! - The plain methods log the failure and return the recovery value the
//!   pages render instead (nothing, an empty list, or fallback data).

pub mod config;
pub mod error;
pub mod fallback;
pub mod pg;
pub mod rest;
pub mod service;
pub mod store;

pub use config::StoreConfig;
pub use error::{CatalogError, CatalogResult};
pub use fallback::FallbackData;
pub use service::{Catalog, GameLookup};
pub use store::CatalogStore;
