//! HTTP gateway for the pinhole URL shortener.
//!
//! Thin glue over the shortening engine: route registration, JSON
//! decoding, and status-code mapping.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
