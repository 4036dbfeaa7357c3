//! The goblin bazaar demo: a couple of categories, three products and one
//! customer filling a cart.

use std::sync::Arc;

use bazaar_cart::{AddOutcome, Cart};
use bazaar_catalog::{Category, Product};
use bazaar_core::{DomainResult, IdGenerator};

use crate::render::{Locale, Renderer};

/// Sample catalog used by the demo.
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    pub weapons: Arc<Category>,
    pub potions: Arc<Category>,
    pub sword: Arc<Product>,
    pub potion: Arc<Product>,
    pub shield: Arc<Product>,
}

impl SampleCatalog {
    pub fn build<G: IdGenerator + ?Sized>(ids: &G) -> DomainResult<Self> {
        let weapons = Arc::new(Category::new(ids, "Armes", "Offensif"));
        let potions = Arc::new(Category::new(ids, "Potions", "Consommable"));

        let sword = Arc::new(Product::new(ids, "Épée en Fer", 100.0, weapons.clone(), 5)?);
        let potion = Arc::new(Product::new(ids, "Potion de Vie", 50.0, potions.clone(), 10)?);
        let shield = Arc::new(Product::new(ids, "Bouclier Rond", 80.0, weapons.clone(), 2)?);

        Ok(Self {
            weapons,
            potions,
            sword,
            potion,
            shield,
        })
    }
}

/// Everything a run produced: display lines, raw outcomes and the final cart.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub catalog: SampleCatalog,
    pub outcomes: Vec<AddOutcome>,
    pub cart: Cart,
    pub output: Vec<String>,
}

impl ScenarioReport {
    pub fn text(&self) -> String {
        self.output.join("\n")
    }
}

struct Titles {
    title: &'static str,
    catalog: &'static str,
    actions: &'static str,
    cart: &'static str,
}

fn titles(locale: Locale) -> Titles {
    match locale {
        Locale::En => Titles {
            title: "Goblin's Bazaar Simulation",
            catalog: "1. Available products",
            actions: "2. Customer actions",
            cart: "3. Cart contents",
        },
        Locale::Fr => Titles {
            title: "Simulation Gobline's Bazar",
            catalog: "1. Affichage des produits disponibles",
            actions: "2. Actions Client",
            cart: "3. Contenu du Panier",
        },
    }
}

/// Build the sample catalog, run the customer's cart actions and render
/// every step.
pub fn run<G: IdGenerator + ?Sized>(renderer: &Renderer, ids: &G) -> DomainResult<ScenarioReport> {
    let catalog = SampleCatalog::build(ids)?;
    let t = titles(renderer.locale);
    let mut output = vec![renderer.heading(1, t.title)];

    output.push(renderer.heading(3, t.catalog));
    output.push(renderer.category(&catalog.weapons));
    output.push(renderer.category(&catalog.potions));
    for product in [&catalog.sword, &catalog.potion, &catalog.shield] {
        output.push(renderer.product(product));
    }

    output.push(renderer.heading(3, t.actions));
    let mut cart = Cart::new();
    let steps = [
        (&catalog.sword, 1),
        (&catalog.potion, 3),
        (&catalog.sword, 1),
        (&catalog.shield, 10),
    ];
    let mut outcomes = Vec::with_capacity(steps.len());
    for (product, quantity) in steps {
        let outcome = cart.add_product(product, quantity)?;
        output.push(renderer.add_outcome(&outcome));
        outcomes.push(outcome);
    }

    output.push(renderer.heading(3, t.cart));
    output.push(renderer.cart(&cart));

    tracing::info!(
        lines = cart.len(),
        total = cart.total(),
        "scenario finished"
    );

    Ok(ScenarioReport {
        catalog,
        outcomes,
        cart,
        output,
    })
}
