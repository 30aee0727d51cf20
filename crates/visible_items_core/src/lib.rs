//! Domain primitives for the visible-items listing.
//!
//! This crate owns the item model, the visibility transformation, request
//! routing and the CORS policy. It intentionally excludes AWS SDK and Lambda
//! runtime concerns; those live in `visible_items_lambda`.

pub mod cors;
pub mod error;
pub mod item;
pub mod listing;
pub mod query;
pub mod routing;
