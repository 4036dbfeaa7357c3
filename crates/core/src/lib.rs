//! `bazaar-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no presentation, no IO).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, IdGenerator, ProductId, SequentialIdGenerator, UuidV7Generator};
