//! Domain layer: gateway-side entities and backend client traits.
//!
//! The gateway's "domain" is deliberately thin: it owns the shapes it
//! exchanges with callers and the seams to the backend services, nothing more.

pub mod clients;
pub mod entities;
