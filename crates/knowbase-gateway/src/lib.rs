//! # Knowbase Gateway
//!
//! Axum server exposing the search page and the JSON search API.

pub mod page;
pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
