//! Selectable category labels.
//!
//! # Invariants
//! - The first label is always the wildcard [`ALL_CATEGORIES`].
//! - Labels after the wildcard are distinct categories.

use crate::model::project::{Category, ProjectRecord, ALL_CATEGORIES};
use serde::Serialize;

/// Ordered category labels rendered as filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Builds a hand-authored set. Duplicates keep their first position.
    ///
    /// The caller owns consistency with the catalog records; use
    /// [`crate::Catalog::audit`] to detect drift.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut deduped = Vec::new();
        for category in categories {
            if !deduped.contains(&category) {
                deduped.push(category);
            }
        }
        Self {
            categories: deduped,
        }
    }

    /// Derives the set from the distinct categories used by `records`,
    /// in first-appearance order.
    pub fn derive_from(records: &[ProjectRecord]) -> Self {
        Self::new(records.iter().map(|record| record.category))
    }

    /// Returns every label in display order, wildcard first.
    pub fn labels(&self) -> Vec<&'static str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.categories.iter().map(|category| category.label()))
            .collect()
    }

    /// Concrete categories, without the wildcard.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns whether `label` is selectable (wildcard included).
    pub fn contains_label(&self, label: &str) -> bool {
        label == ALL_CATEGORIES
            || self
                .categories
                .iter()
                .any(|category| category.label() == label)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Number of labels including the wildcard.
    pub fn len(&self) -> usize {
        self.categories.len() + 1
    }

    /// Always false: the wildcard is always present.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(Category::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::CategorySet;
    use crate::model::project::{Category, ProjectRecord};

    #[test]
    fn labels_start_with_wildcard() {
        let set = CategorySet::new([Category::AiMl, Category::Perception]);
        assert_eq!(set.labels(), vec!["All", "AI & ML", "Perception"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn new_drops_duplicate_categories() {
        let set = CategorySet::new([Category::AiMl, Category::AiMl, Category::Perception]);
        assert_eq!(set.categories(), &[Category::AiMl, Category::Perception]);
    }

    #[test]
    fn derive_uses_first_appearance_order() {
        let records = vec![
            ProjectRecord::new("b", "", "", Category::EmbeddedSystems),
            ProjectRecord::new("a", "", "", Category::Perception),
            ProjectRecord::new("c", "", "", Category::EmbeddedSystems),
        ];
        let set = CategorySet::derive_from(&records);
        assert_eq!(set.labels(), vec!["All", "Embedded Systems", "Perception"]);
    }

    #[test]
    fn derive_from_empty_records_keeps_wildcard_only() {
        let set = CategorySet::derive_from(&[]);
        assert_eq!(set.labels(), vec!["All"]);
        assert!(set.contains_label("All"));
        assert!(!set.contains_label("Perception"));
    }
}
