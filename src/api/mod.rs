//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `PUT /set` - Store a JSON value under a key
//! - `GET /get/:key` - Retrieve a live value by key
//! - `GET /has/:key` - Check whether a live value exists
//! - `DELETE /del/:key` - Delete a key
//! - `POST /clear` - Remove every entry
//! - `POST /cleanup` - Purge expired entries
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
