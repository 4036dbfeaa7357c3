use std::sync::Arc;

use serde::Serialize;

use bazaar_core::{DomainResult, Entity, IdGenerator, ProductId};

use crate::category::Category;
use crate::price::Price;

/// Sellable item belonging to exactly one category.
///
/// Stock is fixed at construction. Nothing in the catalog or the cart
/// decrements it; carts only compare against it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    stock: u32,
    category: Arc<Category>,
}

impl Product {
    /// Create a product with a fresh id.
    ///
    /// Fails with `DomainError::Validation` when `price` is negative or not finite.
    pub fn new<G: IdGenerator + ?Sized>(
        ids: &G,
        name: impl Into<String>,
        price: f64,
        category: Arc<Category>,
        stock: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        let price = Price::new(price)?;
        let id = ProductId::generate(ids);

        tracing::debug!(
            product_id = %id,
            name = %name,
            price = price.amount(),
            stock,
            category = %category.name(),
            "product created"
        );

        Ok(Self {
            id,
            name,
            price,
            stock,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn category(&self) -> &Arc<Category> {
        &self.category
    }

    pub fn category_name(&self) -> &str {
        self.category.name()
    }

    /// A product with no stock can be listed but not bought.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
