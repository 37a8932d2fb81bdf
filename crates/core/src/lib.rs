//! Domain types and pure logic for the product catalog.
//!
//! Nothing in this crate performs I/O. The `db` crate builds queries on top
//! of these types and the `api` crate maps [`error::CoreError`] onto HTTP.

pub mod error;
pub mod pagination;
pub mod policy;
pub mod product;
pub mod types;
