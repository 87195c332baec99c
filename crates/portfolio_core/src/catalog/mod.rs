//! Immutable project catalog.
//!
//! # Responsibility
//! - Hold the canonical ordered records and the selectable category set.
//! - Load alternative catalogs from JSON data files.
//! - Report authoring hazards without failing at runtime.
//!
//! # Invariants
//! - A catalog is never mutated after construction.
//! - `ProjectId` values are record positions and stay valid for the catalog
//!   lifetime.
//! - Authoring mistakes never make filtering or rendering fail.

pub mod builtin;
pub mod categories;

use crate::model::project::{Category, ProjectId, ProjectRecord, ProjectValidationError};
use categories::CategorySet;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Result type for catalog loading APIs.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading error. Only external data files can fail.
#[derive(Debug)]
pub enum CatalogError {
    /// Data file cannot be read.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// Data file content is not a valid record array.
    Json(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read catalog `{path}`: {source}"),
            Self::Json(err) => write!(f, "invalid catalog data: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Authoring hazard reported by [`Catalog::audit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditFinding {
    /// Record category is missing from the category set; the record is only
    /// reachable through the wildcard and text search.
    UnlistedCategory { id: ProjectId, category: Category },
    /// Selectable category with no records; always renders empty.
    EmptyCategory { category: Category },
    /// Record breaks a per-record authoring rule.
    InvalidRecord {
        id: ProjectId,
        error: ProjectValidationError,
    },
}

impl Display for AuditFinding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnlistedCategory { id, category } => {
                write!(f, "{id}: category `{category}` is not selectable")
            }
            Self::EmptyCategory { category } => {
                write!(f, "category `{category}` has no projects")
            }
            Self::InvalidRecord { id, error } => write!(f, "{id}: {error}"),
        }
    }
}

/// Canonical project list plus selectable categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    categories: CategorySet,
}

impl Catalog {
    /// Creates a catalog with a hand-authored category set.
    ///
    /// Drift between `categories` and record categories is allowed; see
    /// [`Catalog::audit`].
    pub fn new(records: Vec<ProjectRecord>, categories: CategorySet) -> Self {
        Self {
            records,
            categories,
        }
    }

    /// Creates a catalog whose categories are derived from `records`.
    pub fn with_derived_categories(records: Vec<ProjectRecord>) -> Self {
        let categories = CategorySet::derive_from(&records);
        Self::new(records, categories)
    }

    /// Returns the built-in portfolio.
    pub fn builtin() -> Self {
        Self::with_derived_categories(builtin::builtin_records())
    }

    /// Parses a JSON array of records. Categories are derived.
    ///
    /// # Errors
    /// - Returns [`CatalogError::Json`] for malformed JSON, missing required
    ///   fields, or unknown category labels.
    pub fn from_json_str(data: &str) -> CatalogResult<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(data)?;
        let catalog = Self::with_derived_categories(records);
        info!(
            "event=catalog_loaded module=catalog status=ok source=json records={} categories={}",
            catalog.len(),
            catalog.categories.categories().len()
        );
        Ok(catalog)
    }

    /// Reads and parses a JSON catalog file.
    ///
    /// # Errors
    /// - Returns [`CatalogError::Io`] when the file cannot be read.
    /// - Returns [`CatalogError::Json`] when content cannot be decoded.
    pub fn load_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| {
            warn!(
                "event=catalog_loaded module=catalog status=error source=file kind={}",
                source.kind()
            );
            CatalogError::Io {
                path: path.display().to_string(),
                source,
            }
        })?;
        Self::from_json_str(&data)
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.records.get(id.index())
    }

    /// Records paired with their stable IDs, in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (ProjectId, &ProjectRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (ProjectId::new(index), record))
    }

    /// Lists authoring hazards in record order, then empty categories.
    ///
    /// Never fails; an empty list means the catalog is consistent.
    pub fn audit(&self) -> Vec<AuditFinding> {
        let mut findings = Vec::new();

        for (id, record) in self.entries() {
            if let Err(error) = record.validate() {
                findings.push(AuditFinding::InvalidRecord { id, error });
            }
            if !self.categories.contains(record.category) {
                findings.push(AuditFinding::UnlistedCategory {
                    id,
                    category: record.category,
                });
            }
        }

        for &category in self.categories.categories() {
            if !self
                .records
                .iter()
                .any(|record| record.category == category)
            {
                findings.push(AuditFinding::EmptyCategory { category });
            }
        }

        findings
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::{AuditFinding, Catalog};
    use crate::catalog::categories::CategorySet;
    use crate::model::project::{Category, ProjectId, ProjectRecord};

    fn record(title: &str, category: Category) -> ProjectRecord {
        ProjectRecord::new(title, "Lab", "2024", category).with_bullets(["did a thing"])
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 21);
        assert!(catalog.audit().is_empty());
        assert_eq!(
            catalog.categories().labels(),
            vec![
                "All",
                "Robotics & Automation",
                "Perception",
                "AI & ML",
                "Embedded Systems"
            ]
        );
    }

    #[test]
    fn entries_use_positions_as_ids() {
        let catalog = Catalog::with_derived_categories(vec![
            record("Same", Category::AiMl),
            record("Same", Category::AiMl),
        ]);
        let ids: Vec<_> = catalog.entries().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![ProjectId::new(0), ProjectId::new(1)]);
        assert_eq!(
            catalog.get(ProjectId::new(1)).map(|r| r.title.as_str()),
            Some("Same")
        );
        assert!(catalog.get(ProjectId::new(2)).is_none());
    }

    #[test]
    fn audit_reports_unlisted_and_empty_categories() {
        let catalog = Catalog::new(
            vec![record("Arm", Category::RoboticsAutomation)],
            CategorySet::new([Category::Perception]),
        );
        assert_eq!(
            catalog.audit(),
            vec![
                AuditFinding::UnlistedCategory {
                    id: ProjectId::new(0),
                    category: Category::RoboticsAutomation,
                },
                AuditFinding::EmptyCategory {
                    category: Category::Perception,
                },
            ]
        );
    }
}
