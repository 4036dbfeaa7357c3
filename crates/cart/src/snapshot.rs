//! Structured, serializable view of a cart.

use serde::Serialize;

use bazaar_core::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

/// Cart contents at a point in time, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<SnapshotLine>,
    pub total: f64,
}
