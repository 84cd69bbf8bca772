//! Project catalog: titled projects with ordered image sub-categories.
//!
//! The catalog is hand-authored data. Key order in the source document is the
//! display order, so both levels are stored in `IndexMap`s. Loading checks JSON
//! shape only; [`Catalog::audit`] reports content problems without rejecting
//! the document.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the sub-category every project opens on.
pub const ALL_SUBCATEGORY: &str = "All";

const BUILTIN_CATALOG: &str = include_str!("../catalog.json");

pub type ProjectId = String;

/// Errors raised while loading a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One portfolio project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub subcategories: IndexMap<String, Vec<String>>,
}

impl Project {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), description: None, subcategories: IndexMap::new() }
    }

    /// Append a sub-category, keeping insertion order.
    #[must_use]
    pub fn with_subcategory<I, S>(mut self, name: impl Into<String>, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subcategories
            .insert(name.into(), images.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Images of `name`, or `None` when the project has no such sub-category.
    #[must_use]
    pub fn subcategory(&self, name: &str) -> Option<&[String]> {
        self.subcategories.get(name).map(Vec::as_slice)
    }

    /// Sub-category names in display order.
    pub fn subcategory_names(&self) -> impl Iterator<Item = &str> {
        self.subcategories.keys().map(String::as_str)
    }
}

/// Static mapping of project id to project, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    projects: IndexMap<ProjectId, Project>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog document: an object of project id to project.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when `raw` is not a catalog-shaped JSON
    /// object.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The catalog shipped with the site.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::from_json`].
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    #[must_use]
    pub fn with_project(mut self, id: impl Into<ProjectId>, project: Project) -> Self {
        self.projects.insert(id.into(), project);
        self
    }

    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }


    pub fn project_ids(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    pub fn projects(&self) -> impl Iterator<Item = (&str, &Project)> {
        self.projects.iter().map(|(id, p)| (id.as_str(), p))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.projects.len()
    }

    /// Report content problems. Nothing here prevents the catalog from being
    /// used; callers log the findings.
    #[must_use]
    pub fn audit(&self) -> Vec<CatalogFinding> {
        let mut findings = Vec::new();
        for (id, project) in &self.projects {
            let Some(all) = project.subcategory(ALL_SUBCATEGORY) else {
                findings.push(CatalogFinding::MissingAll { project: id.clone() });
                continue;
            };
            for (name, images) in &project.subcategories {
                if images.is_empty() {
                    findings.push(CatalogFinding::EmptySubcategory {
                        project: id.clone(),
                        subcategory: name.clone(),
                    });
                }
                if name == ALL_SUBCATEGORY {
                    continue;
                }
                for image in images {
                    if !all.contains(image) {
                        findings.push(CatalogFinding::NotInAll {
                            project: id.clone(),
                            subcategory: name.clone(),
                            image: image.clone(),
                        });
                    }
                }
            }
        }
        findings
    }
}

/// A content problem found by [`Catalog::audit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogFinding {
    MissingAll { project: ProjectId },
    EmptySubcategory { project: ProjectId, subcategory: String },
    NotInAll { project: ProjectId, subcategory: String, image: String },
}

impl fmt::Display for CatalogFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAll { project } => {
                write!(f, "project '{project}' has no '{ALL_SUBCATEGORY}' sub-category")
            }
            Self::EmptySubcategory { project, subcategory } => {
                write!(f, "project '{project}' sub-category '{subcategory}' is empty")
            }
            Self::NotInAll { project, subcategory, image } => write!(
                f,
                "project '{project}' sub-category '{subcategory}' lists {image} which is missing from '{ALL_SUBCATEGORY}'"
            ),
        }
    }
}
