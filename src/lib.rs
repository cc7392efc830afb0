//! HTTP gateway over an S3-compatible object store.
//!
//! Exposes upload, retrieval-URL issuance, and listing operations over a
//! remote backend. The library surface exists so the router and service can
//! be exercised end-to-end in integration tests.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
