//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into backend RPC calls and maps the
//! outcomes back onto statuses and JSON envelopes.
//!
//! # Modules
//!
//! - [`dto`] - Request bodies, query parameters, and the response envelope
//! - [`dispatch`] - Generic per-verb handlers over the [`dispatch::Resource`] trait
//! - [`resources`] - Per-resource bindings (article, author)
//! - [`policy`] - Per-resource upstream-failure → status tables
//! - [`handlers`] - Standalone handlers (login)
//! - [`middleware`] - Bearer verification and request tracing
//! - [`docs`] - Constructed API documentation object
//! - [`routes`] - Route configuration

pub mod dispatch;
pub mod docs;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod policy;
pub mod resources;
pub mod routes;
