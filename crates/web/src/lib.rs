//! Movie Heroes presentation service library.
//!
//! Fetches rows from the data service and renders them as an HTML table.
//! The router, client and renderer are exposed so integration tests drive
//! the same application the binary serves.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod routes;
pub mod state;
