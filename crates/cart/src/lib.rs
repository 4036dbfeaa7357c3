//! Shopping cart domain module.
//!
//! Stock-aware accumulation of catalog products. Pure domain logic: outcomes
//! are returned as values and logged through `tracing`, never printed.

pub mod cart;
pub mod snapshot;

pub use cart::{AddOutcome, Cart, CartEntry, InsufficientStock, Removed};
pub use snapshot::{CartSnapshot, SnapshotLine};
