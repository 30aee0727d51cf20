//! AWS-oriented adapters and handlers for the visible-items listing.
//!
//! This crate owns runtime integration details (the Lambda HTTP handler,
//! environment configuration, logging and the DynamoDB adapter) and leaves the
//! listing rules themselves to `visible_items_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;
