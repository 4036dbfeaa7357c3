use std::sync::Arc;

use serde::Serialize;

use bazaar_catalog::Product;
use bazaar_core::{DomainError, DomainResult, Entity, ProductId};

use crate::snapshot::{CartSnapshot, SnapshotLine};

/// One cart line: a shared product handle plus how many units are wanted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEntry {
    product: Arc<Product>,
    quantity: u32,
}

impl CartEntry {
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> f64 {
        self.product.price().times(self.quantity)
    }
}

/// Why an add was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsufficientStock {
    pub product_name: String,
    pub available: u32,
    /// Cumulative quantity the add would have produced.
    pub requested: u64,
}

/// Result of [`Cart::add_product`]. Both variants are normal outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AddOutcome {
    Added {
        product_name: String,
        quantity: u32,
        in_cart: u32,
    },
    Rejected(InsufficientStock),
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added { .. })
    }
}

/// Confirmation returned when a product left the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removed {
    pub product_name: String,
    pub quantity: u32,
}

/// Shopping cart owned by a single session.
///
/// Entries stay in the order their product was first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// The cumulative quantity is checked against the product's stock, which
    /// is never decremented. On rejection the cart is left untouched.
    pub fn add_product(
        &mut self,
        product: &Arc<Product>,
        quantity: u32,
    ) -> DomainResult<AddOutcome> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let product_id = product.id();
        let position = self.position(product_id);
        let current = position.map_or(0, |i| self.entries[i].quantity);
        let requested = u64::from(current) + u64::from(quantity);

        if requested > u64::from(product.stock()) {
            tracing::warn!(
                product_id = %product_id,
                product = %product.name(),
                available = product.stock(),
                requested,
                "insufficient stock, add rejected"
            );
            return Ok(AddOutcome::Rejected(InsufficientStock {
                product_name: product.name().to_string(),
                available: product.stock(),
                requested,
            }));
        }

        let in_cart = u32::try_from(requested)
            .map_err(|_| DomainError::invariant("cart quantity exceeds u32 after stock check"))?;
        match position {
            Some(i) => self.entries[i].quantity = in_cart,
            None => self.entries.push(CartEntry {
                product: Arc::clone(product),
                quantity: in_cart,
            }),
        }

        tracing::info!(
            product_id = %product_id,
            product = %product.name(),
            quantity,
            in_cart,
            "added to cart"
        );

        Ok(AddOutcome::Added {
            product_name: product.name().to_string(),
            quantity,
            in_cart,
        })
    }

    pub fn add_one(&mut self, product: &Arc<Product>) -> DomainResult<AddOutcome> {
        self.add_product(product, 1)
    }

    /// Drop the whole entry for `product`. `None` when it was not in the cart.
    pub fn remove_product(&mut self, product: &Product) -> Option<Removed> {
        let index = self.position(product.id())?;
        let entry = self.entries.remove(index);

        tracing::info!(
            product_id = %product.id(),
            product = %product.name(),
            quantity = entry.quantity,
            "removed from cart"
        );

        Some(Removed {
            product_name: entry.product.name().to_string(),
            quantity: entry.quantity,
        })
    }

    /// Sum of price × quantity, recomputed on every call.
    pub fn total(&self) -> f64 {
        self.entries
            .iter()
            .fold(0.0, |total, entry| total + entry.subtotal())
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.position(product_id)
            .map_or(0, |i| self.entries[i].quantity)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self
                .entries
                .iter()
                .map(|entry| SnapshotLine {
                    product_id: entry.product.id(),
                    name: entry.product.name().to_string(),
                    unit_price: entry.product.price().amount(),
                    quantity: entry.quantity,
                    subtotal: entry.subtotal(),
                })
                .collect(),
            total: self.total(),
        }
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.product.id() == product_id)
    }
}
