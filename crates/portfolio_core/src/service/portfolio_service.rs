//! Portfolio page use-case service.
//!
//! # Responsibility
//! - Combine the catalog, the filter engine and the caller's selection into
//!   a render-ready page projection.
//! - Keep empty-state wording and card subtitle formatting inside core.
//!
//! # Invariants
//! - Selection state is owned by the caller and passed in on every render.
//! - Exactly the control whose label equals the active category is active.
//! - `empty_state` is set if and only if there are no cards.

use crate::catalog::Catalog;
use crate::model::project::{ProjectId, ProjectLink, ProjectRecord, ALL_CATEGORIES};
use crate::search::filter::filter_entries;
use log::debug;
use serde::Serialize;

/// Message shown when the current selection matches nothing.
pub const EMPTY_STATE_MESSAGE: &str = "No results. Try another category or clear the search.";

/// Transient UI selection: active category label and query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub active_category: String,
    pub query: String,
}

impl Selection {
    pub fn with_category(mut self, label: impl Into<String>) -> Self {
        self.active_category = label.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Handles a category control activation.
    pub fn select_category(&mut self, label: impl Into<String>) {
        self.active_category = label.into();
    }

    /// Handles a query input change.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }
}

/// One selectable category control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryControl {
    pub label: &'static str,
    pub active: bool,
}

/// Card projection of one matching record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    /// Stable render key.
    pub id: ProjectId,
    pub title: String,
    /// `"{org} • {year}"`.
    pub subtitle: String,
    pub bullets: Vec<String>,
    pub tags: Vec<String>,
    pub links: Vec<ProjectLink>,
}

impl ProjectCard {
    fn from_record(id: ProjectId, record: &ProjectRecord) -> Self {
        Self {
            id,
            title: record.title.clone(),
            subtitle: format!("{} • {}", record.organization, record.year),
            bullets: record.bullets.clone(),
            tags: record.tags.clone(),
            links: record.links.clone(),
        }
    }
}

/// Render-ready page for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioView {
    pub controls: Vec<CategoryControl>,
    /// Cards in catalog order.
    pub cards: Vec<ProjectCard>,
    pub empty_state: Option<&'static str>,
}

impl PortfolioView {
    pub fn active_label(&self) -> Option<&'static str> {
        self.controls
            .iter()
            .find(|control| control.active)
            .map(|control| control.label)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Portfolio page facade over one immutable catalog.
pub struct PortfolioService {
    catalog: Catalog,
}

impl PortfolioService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Computes the page for `selection`.
    ///
    /// Never fails: unknown categories and unmatched queries render the
    /// empty state.
    pub fn render(&self, selection: &Selection) -> PortfolioView {
        let category = selection.active_category.as_str();
        let query = selection.query.as_str();

        let controls = self
            .catalog
            .categories()
            .labels()
            .into_iter()
            .map(|label| CategoryControl {
                label,
                active: label == category,
            })
            .collect::<Vec<_>>();

        let hits = filter_entries(&self.catalog, category, query);
        let cards = hits
            .into_iter()
            .map(|(id, record)| ProjectCard::from_record(id, record))
            .collect::<Vec<_>>();

        // Query text is user input; log its length only.
        debug!(
            "event=portfolio_render module=service status=ok category={} query_chars={} hits={}",
            category,
            query.chars().count(),
            cards.len()
        );

        let empty_state = cards.is_empty().then_some(EMPTY_STATE_MESSAGE);
        PortfolioView {
            controls,
            cards,
            empty_state,
        }
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn default_selection_is_wildcard_with_empty_query() {
        let selection = Selection::default();
        assert_eq!(selection.active_category, "All");
        assert!(selection.query.is_empty());
    }

    #[test]
    fn selection_updates_replace_previous_values() {
        let mut selection = Selection::default().with_query("ros");
        selection.select_category("Perception");
        selection.set_query("lidar");
        assert_eq!(selection.active_category, "Perception");
        assert_eq!(selection.query, "lidar");
    }
}
