//! Project record domain model.
//!
//! # Responsibility
//! - Define the canonical portfolio entry rendered as one card.
//! - Provide authoring-time validation helpers used by catalog audits.
//!
//! # Invariants
//! - `category` is always one of the closed [`Category`] values.
//! - `tags`, `bullets` and `links` keep authoring order.
//! - Omitted `org`, `tags`, `bullets` and `links` decode as empty values.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wildcard category label that matches every record.
pub const ALL_CATEGORIES: &str = "All";

/// Fewest bullets a card should carry.
pub const MIN_BULLETS: usize = 1;
/// Most bullets a card should carry.
pub const MAX_BULLETS: usize = 4;

/// Stable synthetic identifier for a record inside one catalog.
///
/// Titles are not unique, so display keys use the record position instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(usize);

impl ProjectId {
    /// Creates an ID from a zero-based catalog position.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based catalog position.
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "project-{}", self.0)
    }
}

/// Closed set of portfolio categories.
///
/// Serialized by display label to match the authored data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Robotics & Automation")]
    RoboticsAutomation,
    #[serde(rename = "Perception")]
    Perception,
    #[serde(rename = "AI & ML")]
    AiMl,
    #[serde(rename = "Embedded Systems")]
    EmbeddedSystems,
}

impl Category {
    /// Every category in canonical display order.
    pub const ALL: [Category; 4] = [
        Category::RoboticsAutomation,
        Category::Perception,
        Category::AiMl,
        Category::EmbeddedSystems,
    ];

    /// Returns the user-visible label.
    pub fn label(self) -> &'static str {
        match self {
            Self::RoboticsAutomation => "Robotics & Automation",
            Self::Perception => "Perception",
            Self::AiMl => "AI & ML",
            Self::EmbeddedSystems => "Embedded Systems",
        }
    }

    /// Looks up a category by exact (case-sensitive) label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// External link attached to a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    /// Serialized as `href` to match external data naming.
    #[serde(rename = "href")]
    pub target: String,
}

impl ProjectLink {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Display title. Not guaranteed unique.
    pub title: String,
    /// Serialized as `org`. May be empty.
    #[serde(rename = "org", default)]
    pub organization: String,
    /// Free-form year text, e.g. `2021–2022`. Never parsed.
    #[serde(default)]
    pub year: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

impl ProjectRecord {
    /// Creates a record with empty tags, bullets and links.
    pub fn new(
        title: impl Into<String>,
        organization: impl Into<String>,
        year: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            organization: organization.into(),
            year: year.into(),
            category,
            tags: Vec::new(),
            bullets: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_link(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.links.push(ProjectLink::new(label, target));
        self
    }

    /// Checks authoring rules for one record.
    ///
    /// Rendering and filtering never call this; invalid records stay
    /// displayable. Catalog audits use it to report authoring mistakes.
    ///
    /// # Errors
    /// - [`ProjectValidationError::EmptyTitle`] when the title is blank.
    /// - [`ProjectValidationError::BulletCount`] when bullets fall outside
    ///   `MIN_BULLETS..=MAX_BULLETS`.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle);
        }
        let count = self.bullets.len();
        if !(MIN_BULLETS..=MAX_BULLETS).contains(&count) {
            return Err(ProjectValidationError::BulletCount(count));
        }
        Ok(())
    }
}

/// Authoring rule violations for a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyTitle,
    BulletCount(usize),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::BulletCount(count) => write!(
                f,
                "expected {MIN_BULLETS}..={MAX_BULLETS} bullets, found {count}"
            ),
        }
    }
}

impl Error for ProjectValidationError {}
