use serde::Serialize;

use bazaar_core::{CategoryId, Entity, IdGenerator};

/// Named grouping of products.
///
/// Immutable once built; products hold it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
}

impl Category {
    /// Create a category with a fresh id. Name and description are stored verbatim.
    pub fn new<G: IdGenerator + ?Sized>(
        ids: &G,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let category = Self {
            id: CategoryId::generate(ids),
            name: name.into(),
            description: description.into(),
        };
        tracing::debug!(category_id = %category.id, name = %category.name, "category created");
        category
    }

    /// Category without a description.
    pub fn named<G: IdGenerator + ?Sized>(ids: &G, name: impl Into<String>) -> Self {
        Self::new(ids, name, String::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// `Category [<name>] (ID: <id>): <description>`
impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Category [{}] (ID: {}): {}",
            self.name, self.id, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::SequentialIdGenerator;

    #[test]
    fn new_category_stores_fields_verbatim() {
        let ids = SequentialIdGenerator::new();
        let category = Category::new(&ids, "  Armes ", "Offensif");

        assert_eq!(category.name(), "  Armes ");
        assert_eq!(category.description(), "Offensif");
    }

    #[test]
    fn named_category_has_empty_description() {
        let ids = SequentialIdGenerator::new();
        let category = Category::named(&ids, "Potions");
        assert_eq!(category.description(), "");
    }

    #[test]
    fn categories_get_distinct_ids() {
        let ids = SequentialIdGenerator::new();
        let a = Category::named(&ids, "Armes");
        let b = Category::named(&ids, "Armes");

        assert_ne!(a.id(), b.id());
        assert!(!a.same_entity(&b));
        assert!(a.same_entity(&a.clone()));
    }

    #[test]
    fn entity_id_is_the_typed_category_id() {
        let ids = SequentialIdGenerator::new();
        let category = Category::named(&ids, "Armes");

        let id: CategoryId = category.id();
        let first: CategoryId = "00000000-0000-0000-0000-000000000001".parse().unwrap();
        assert_eq!(id, first);
    }

    #[test]
    fn display_matches_describe_format() {
        let ids = SequentialIdGenerator::new();
        let category = Category::new(&ids, "Armes", "Offensif");

        assert_eq!(
            category.to_string(),
            format!("Category [Armes] (ID: {}): Offensif", category.id())
        );
    }
}
