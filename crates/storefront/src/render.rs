//! Presentation layer: turns domain values into storefront text.
//!
//! Domain crates never format for display. Everything user-facing, including
//! markup and language, is decided here.

use core::str::FromStr;

use thiserror::Error;

use bazaar_cart::{AddOutcome, Cart, Removed};
use bazaar_catalog::{Category, Price, Product};
use bazaar_core::Entity;

/// Output markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Markup {
    /// Bare text, one item per line.
    #[default]
    Plain,
    /// HTML fragments (`<strong>`, `<br>`, headings).
    Html,
}

/// Language of labels and messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    En,
    #[default]
    Fr,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Markup {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Markup::Plain),
            "html" => Ok(Markup::Html),
            other => Err(UnknownOption {
                kind: "markup",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(UnknownOption {
                kind: "locale",
                value: other.to_string(),
            }),
        }
    }
}

struct Labels {
    yes: &'static str,
    no: &'static str,
    product: &'static str,
    price: &'static str,
    available: &'static str,
    stock: &'static str,
    belongs_to: &'static str,
    cart_empty: &'static str,
    cart_header: &'static str,
    total: &'static str,
    added: &'static str,
    removed: &'static str,
    insufficient: &'static str,
    requested: &'static str,
}

static EN: Labels = Labels {
    yes: "Yes",
    no: "No",
    product: "Product",
    price: "Price:",
    available: "Available:",
    stock: "Stock:",
    belongs_to: "Category:",
    cart_empty: "Your cart is empty.",
    cart_header: "--- Cart Details ---",
    total: "TOTAL:",
    added: "Added to cart:",
    removed: "Removed from cart:",
    insufficient: "Error: insufficient stock for",
    requested: "Requested",
};

static FR: Labels = Labels {
    yes: "Oui",
    no: "Non",
    product: "Produit",
    price: "Prix :",
    available: "Disponible :",
    stock: "Stock :",
    belongs_to: "Appartient à :",
    cart_empty: "Votre panier est vide.",
    cart_header: "--- Détails du panier ---",
    total: "TOTAL :",
    added: "Ajouté au panier :",
    removed: "Retiré du panier :",
    insufficient: "Erreur : Stock insuffisant pour",
    requested: "Demandé",
};

/// Renders catalog entities, carts and cart outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    pub markup: Markup,
    pub locale: Locale,
    pub currency: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            markup: Markup::default(),
            locale: Locale::default(),
            currency: "€".to_string(),
        }
    }
}

impl Renderer {
    pub fn new(markup: Markup, locale: Locale, currency: impl Into<String>) -> Self {
        Self {
            markup,
            locale,
            currency: currency.into(),
        }
    }

    fn labels(&self) -> &'static Labels {
        match self.locale {
            Locale::En => &EN,
            Locale::Fr => &FR,
        }
    }

    fn strong(&self, text: &str) -> String {
        match self.markup {
            Markup::Plain => text.to_string(),
            Markup::Html => format!("<strong>{text}</strong>"),
        }
    }

    fn lines(&self, lines: &[String]) -> String {
        match self.markup {
            Markup::Plain => lines.join("\n"),
            Markup::Html => lines.join("<br>\n"),
        }
    }

    /// `100 €`, `12.5 €`: shortest representation that round-trips.
    pub fn money(&self, amount: f64) -> String {
        format!("{amount} {}", self.currency)
    }

    fn price(&self, price: Price) -> String {
        self.money(price.amount())
    }

    pub fn heading(&self, level: u8, text: &str) -> String {
        match self.markup {
            Markup::Html => format!("<h{level}>{text}</h{level}>"),
            Markup::Plain if level <= 1 => format!("=== {text} ==="),
            Markup::Plain => format!("--- {text} ---"),
        }
    }

    pub fn category(&self, category: &Category) -> String {
        match self.locale {
            Locale::En => category.to_string(),
            Locale::Fr => format!(
                "Catégorie [{}] (ID: {}) : {}",
                category.name(),
                category.id(),
                category.description()
            ),
        }
    }

    pub fn product(&self, product: &Product) -> String {
        let l = self.labels();
        let availability = if product.is_available() { l.yes } else { l.no };
        self.lines(&[
            format!("{} {}", l.product, self.strong(product.name())),
            format!("{} {}", l.price, self.price(product.price())),
            format!("{} {availability}", l.available),
            format!("{} {}", l.stock, product.stock()),
            format!("{} {}", l.belongs_to, product.category_name()),
        ])
    }

    /// Empty-cart message, or one line per entry followed by the total.
    pub fn cart(&self, cart: &Cart) -> String {
        let l = self.labels();
        if cart.is_empty() {
            return l.cart_empty.to_string();
        }

        let mut lines = Vec::with_capacity(cart.len() + 3);
        lines.push(self.strong(l.cart_header));
        for entry in cart.entries() {
            lines.push(format!(
                "• {} (x{}): {}",
                entry.product().name(),
                entry.quantity(),
                self.money(entry.subtotal())
            ));
        }
        lines.push("-".repeat(25));
        lines.push(self.strong(&format!("{} {}", l.total, self.money(cart.total()))));
        self.lines(&lines)
    }

    pub fn add_outcome(&self, outcome: &AddOutcome) -> String {
        let l = self.labels();
        match outcome {
            AddOutcome::Added {
                product_name,
                quantity,
                ..
            } => format!("{} {quantity} x {product_name}", l.added),
            AddOutcome::Rejected(reason) => {
                let message = format!(
                    "{} '{}' ! (Stock: {}, {}: {})",
                    l.insufficient,
                    reason.product_name,
                    reason.available,
                    l.requested,
                    reason.requested
                );
                match self.markup {
                    Markup::Plain => message,
                    Markup::Html => format!("<span style='color:red'>{message}</span>"),
                }
            }
        }
    }

    pub fn removed(&self, removed: &Removed) -> String {
        format!("{} {}", self.labels().removed, removed.product_name)
    }
}
