//! URL shortening engine.
//!
//! This crate provides the random short code generator, the in-memory
//! repository, and the service implementing the `Shortener` trait.
//! Core types are re-exported from `pinhole_core`.

pub mod generator;
pub mod repository;
pub mod service;

pub use generator::random::RandomGenerator;
pub use generator::Generator;
pub use repository::memory::InMemoryRepository;
pub use service::ShortenerService;
