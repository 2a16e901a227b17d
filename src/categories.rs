//! Tag categories for browse mode
//!
//! Categories group tags under a stable identifier and a display title. The
//! catalog is read-only at runtime; it is either the built-in default or a
//! TOML file of the form:
//!
//! ```toml
//! [[categories]]
//! id = "devops"
//! title = "DevOps"
//! emoji = "⚙️"
//! tags = ["docker", "kubernetes"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate category id: {0}")]
    DuplicateId(String),
}

/// Named group of tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TagCategory {
    #[must_use]
    pub fn new(id: &str, title: &str, tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            emoji: None,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// Ordered set of categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCatalog {
    #[serde(default)]
    pub categories: Vec<TagCategory>,
}

impl TagCatalog {
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two categories share an id.
    pub fn new(categories: Vec<TagCategory>) -> Result<Self, CatalogError> {
        let catalog = Self { categories };
        catalog.check_ids()?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed, or if two
    /// categories share an id.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let catalog: Self = toml::from_str(&contents)?;
        catalog.check_ids()?;
        Ok(catalog)
    }

    /// Categories shipped with the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                TagCategory::new("frontend", "Frontend", &["webdev", "javascript", "react", "css", "vue"]),
                TagCategory::new("backend", "Backend", &["rust", "golang", "python", "java", "nodejs"]),
                TagCategory::new("devops", "DevOps", &["docker", "kubernetes", "devops", "cloud", "aws"]),
                TagCategory::new("data", "Data", &["database", "sql", "machine-learning", "data-science"]),
                TagCategory::new("career", "Career", &["career", "architecture", "open-source", "tools"]),
            ],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Every tag in every category, deduplicated and sorted
    #[must_use]
    pub fn all_tags(&self) -> BTreeSet<String> {
        self.categories
            .iter()
            .flat_map(|category| category.tags.iter().cloned())
            .collect()
    }

    fn check_ids(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        for category in &self.categories {
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateId(category.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_has_unique_ids() {
        let catalog = TagCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.check_ids().is_ok());
    }

    #[test]
    fn test_all_tags_dedup() {
        let catalog = TagCatalog::new(vec![
            TagCategory::new("a", "A", &["rust", "go"]),
            TagCategory::new("b", "B", &["go", "zig"]),
        ])
        .unwrap();
        let tags: Vec<_> = catalog.all_tags().into_iter().collect();
        assert_eq!(tags, vec!["go", "rust", "zig"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = TagCatalog::new(vec![
            TagCategory::new("a", "A", &[]),
            TagCategory::new("a", "Again", &[]),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[[categories]]\nid = \"ops\"\ntitle = \"Ops\"\nemoji = \"x\"\ntags = [\"docker\"]\n\n[[categories]]\nid = \"empty\"\ntitle = \"Empty\"\n"
        )
        .unwrap();

        let catalog = TagCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.categories[0].tags, vec!["docker"]);
        assert_eq!(catalog.categories[0].emoji.as_deref(), Some("x"));
        assert!(catalog.categories[1].tags.is_empty());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "categories = 3").unwrap();
        assert!(matches!(TagCatalog::load(file.path()), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_empty_file_is_empty_catalog() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let catalog = TagCatalog::load(file.path()).unwrap();
        assert!(catalog.is_empty());
    }
}
