//! Core logic for the project portfolio page.
//! This crate owns the catalog data and the matching rules every rendering
//! surface relies on.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;

pub use catalog::categories::CategorySet;
pub use catalog::{AuditFinding, Catalog, CatalogError, CatalogResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    Category, ProjectId, ProjectLink, ProjectRecord, ProjectValidationError, ALL_CATEGORIES,
};
pub use search::filter::{filter, filter_entries, haystack, matches};
pub use service::portfolio_service::{
    CategoryControl, PortfolioService, PortfolioView, ProjectCard, Selection, EMPTY_STATE_MESSAGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
