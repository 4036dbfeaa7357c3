//! Catalog domain module.
//!
//! Categories and products, as plain immutable entities. Rendering lives in
//! `bazaar-storefront`; this crate knows nothing about display.

pub mod category;
pub mod price;
pub mod product;

pub use category::Category;
pub use price::Price;
pub use product::Product;
