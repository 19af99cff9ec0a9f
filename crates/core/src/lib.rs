//! Domain types and pure helpers shared by the Gamezee crates.
//!
//! Nothing in here performs I/O; the store backends and the HTTP layer build
//! on these definitions.

pub mod catalog;
pub mod error;
pub mod search;
pub mod types;
