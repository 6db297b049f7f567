//! Core types and traits for the pinhole URL shortener.
//!
//! This crate provides the shared vocabulary used by the shortening
//! engine and the HTTP gateway: the short code type, the stored record,
//! the repository and shortener traits, and URL validation.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;
pub mod validate;

pub use error::{Result, ShortenerError};
pub use repository::{Repository, UrlRecord};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
pub use validate::validate_url;
