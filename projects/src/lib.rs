//! Shared project catalog for the portfolio gallery.
//!
//! This crate owns the data model used by both `server` (JSON API, startup
//! validation) and `client` (cards, filter bar, detail modal). The catalog
//! lives in a single data file, `data/projects.json`, which is embedded at
//! compile time and validated on load.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The embedded catalog data file.
pub const EMBEDDED_CATALOG: &str = include_str!("../data/projects.json");

/// Filter value that matches every project card.
pub const FILTER_ALL: &str = "all";

/// Error returned by [`Catalog::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The raw text is not valid catalog JSON.
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The catalog declares no projects.
    #[error("catalog contains no projects")]
    Empty,
    /// A project or category id is empty or uses characters outside `[a-z0-9-]`.
    #[error("invalid id: {0:?}")]
    InvalidId(String),
    /// Two projects share an id.
    #[error("duplicate project id: {0}")]
    DuplicateProject(String),
    /// Two categories share an id.
    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),
    /// A category uses the reserved `all` filter value.
    #[error("category id {FILTER_ALL:?} is reserved")]
    ReservedCategory,
    /// A required text field is blank.
    #[error("project {id}: field `{field}` is empty")]
    MissingField { id: String, field: &'static str },
    /// The external link is not an http(s) URL.
    #[error("project {id}: link {link:?} is not an http(s) URL")]
    InvalidLink { id: String, link: String },
    /// A project references a category that is not declared.
    #[error("project {id}: unknown category {category:?}")]
    UnknownCategory { id: String, category: String },
}

/// A filter bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub id: String,
    pub label: String,
}

/// Static descriptive data for one portfolio project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    /// One-line text shown on the card.
    #[serde(default)]
    pub summary: String,
    pub description: String,
    /// Feature bullet points, in display order.
    pub features: Vec<String>,
    /// Technology badges, in display order.
    pub tech_stack: Vec<String>,
    pub challenges: String,
    pub solution: String,
    /// Image URL or site-relative path.
    pub image: String,
    /// External repository link.
    pub link: String,
    /// Category ids this project belongs to.
    pub categories: Vec<String>,
}

impl ProjectRecord {
    /// Space-delimited category list, as rendered into `data-category`.
    #[must_use]
    pub fn category_attr(&self) -> String {
        self.categories.join(" ")
    }
}

/// Validated, ordered set of projects and categories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
    projects: Vec<ProjectRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default)]
    categories: Vec<Category>,
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] describing the first problem found.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(raw)?;
        let catalog = Self { categories: raw.categories, projects: raw.projects };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse the catalog embedded from `data/projects.json`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the embedded data file is invalid.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.projects.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.id == FILTER_ALL {
                return Err(CatalogError::ReservedCategory);
            }
            if !is_valid_id(&category.id) {
                return Err(CatalogError::InvalidId(category.id.clone()));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !is_valid_id(&project.id) {
                return Err(CatalogError::InvalidId(project.id.clone()));
            }
            if !project_ids.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateProject(project.id.clone()));
            }
            for (field, value) in [
                ("title", &project.title),
                ("description", &project.description),
                ("image", &project.image),
                ("link", &project.link),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::MissingField { id: project.id.clone(), field });
                }
            }
            if !(project.link.starts_with("https://") || project.link.starts_with("http://")) {
                return Err(CatalogError::InvalidLink { id: project.id.clone(), link: project.link.clone() });
            }
            if let Some(unknown) = project
                .categories
                .iter()
                .find(|c| !category_ids.contains(c.as_str()))
            {
                return Err(CatalogError::UnknownCategory { id: project.id.clone(), category: unknown.clone() });
            }
        }
        Ok(())
    }

    /// Look up a project by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects in authored order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Categories in authored order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Ids of the projects matching `filter`, in authored order.
    #[must_use]
    pub fn matching_ids(&self, filter: &Filter) -> Vec<&str> {
        self.projects
            .iter()
            .filter(|p| filter.matches(&p.categories))
            .map(|p| p.id.as_str())
            .collect()
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Gallery filter selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Sentinel that shows every card.
    #[default]
    All,
    /// Show only cards carrying this category id.
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == FILTER_ALL { Self::All } else { Self::Category(raw.to_owned()) }
    }

    /// The `data-filter` value for this selection.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Category(id) => id,
        }
    }

    /// Whether a card with `categories` is visible under this filter.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => categories.iter().any(|c| c.as_ref() == id),
        }
    }

    /// Whether a card with a space-delimited `data-category` value is visible.
    #[must_use]
    pub fn matches_attr(&self, category_attr: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => category_attr.split_whitespace().any(|c| c == id),
        }
    }
}
