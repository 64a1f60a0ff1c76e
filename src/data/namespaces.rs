//! Namespace names used to recognize File/Image and Category links
//!
//! Wikis localize namespace names (`Fichier:`, `Kategorie:`) and keep
//! aliases for old spellings. The cleaner only needs two namespaces, so the
//! configuration keeps just their name lists.
//!
//! ## Example
//!
//! ```rust
//! use wikiclean::NamespaceConfig;
//!
//! let config = NamespaceConfig::new(["Fichier"], ["Catégorie"]);
//! assert!(config.file_names().iter().any(|n| n == "Fichier"));
//! assert!(config.file_names().iter().any(|n| n == "File"));
//! ```

#[cfg(feature = "data-loading")]
use crate::utils::error::{CleanError, CleanResult};

/// Canonical names always recognized for the file namespace
pub const CANONICAL_FILE_NAMES: &[&str] = &["File", "Image"];

/// Canonical names always recognized for the category namespace
pub const CANONICAL_CATEGORY_NAMES: &[&str] = &["Category"];

/// One namespace as found in a wiki's namespace data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize))]
pub struct NamespaceEntry {
    /// Numeric namespace id (6 for File, 14 for Category)
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub id: i32,
    /// Localized name
    pub name: String,
    /// Alternative spellings
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub aliases: Vec<String>,
}

/// Localized names of the File/Image and Category namespaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceConfig {
    file_names: Vec<String>,
    category_names: Vec<String>,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self::english()
    }
}

impl NamespaceConfig {
    /// Build from localized names; canonical English names are always included
    pub fn new<F, C, S, T>(file_names: F, category_names: C) -> Self
    where
        F: IntoIterator<Item = S>,
        C: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut config = Self::english();
        for name in file_names {
            push_unique(&mut config.file_names, name.into());
        }
        for name in category_names {
            push_unique(&mut config.category_names, name.into());
        }
        config
    }

    /// The English defaults
    pub fn english() -> Self {
        Self {
            file_names: CANONICAL_FILE_NAMES.iter().map(|s| s.to_string()).collect(),
            category_names: CANONICAL_CATEGORY_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Build from the two namespace entries of a wiki's namespace data
    pub fn from_entries(file: &NamespaceEntry, category: &NamespaceEntry) -> Self {
        let files = std::iter::once(file.name.clone()).chain(file.aliases.iter().cloned());
        let categories =
            std::iter::once(category.name.clone()).chain(category.aliases.iter().cloned());
        Self::new(files, categories)
    }

    /// Load from namespace data JSON keyed by canonical namespace name
    ///
    /// ```json
    /// {"File": {"id": 6, "name": "Fichier", "aliases": ["Image"]},
    ///  "Category": {"id": 14, "name": "Catégorie", "aliases": []}}
    /// ```
    #[cfg(feature = "data-loading")]
    pub fn from_json(json: &str) -> CleanResult<Self> {
        use std::collections::HashMap;

        let data: HashMap<String, NamespaceEntry> = serde_json::from_str(json)?;
        let file = data
            .get("File")
            .ok_or_else(|| CleanError::missing_namespace("File"))?;
        let category = data
            .get("Category")
            .ok_or_else(|| CleanError::missing_namespace("Category"))?;
        Ok(Self::from_entries(file, category))
    }

    /// All names of the file namespace
    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }

    /// All names of the category namespace
    pub fn category_names(&self) -> &[String] {
        &self.category_names
    }
}

fn push_unique(names: &mut Vec<String>, name: String) {
    let name = name.trim().to_string();
    if !name.is_empty() && !names.contains(&name) {
        names.push(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_default() {
        let config = NamespaceConfig::default();
        assert_eq!(config.file_names(), &["File", "Image"]);
        assert_eq!(config.category_names(), &["Category"]);
    }

    #[test]
    fn test_new_deduplicates() {
        let config = NamespaceConfig::new(["Datei", "File", " "], ["Kategorie"]);
        assert_eq!(config.file_names(), &["File", "Image", "Datei"]);
        assert_eq!(config.category_names(), &["Category", "Kategorie"]);
    }

    #[test]
    fn test_from_entries() {
        let file = NamespaceEntry {
            id: 6,
            name: "Fichier".to_string(),
            aliases: vec!["Image".to_string()],
        };
        let category = NamespaceEntry {
            id: 14,
            name: "Catégorie".to_string(),
            aliases: vec![],
        };
        let config = NamespaceConfig::from_entries(&file, &category);
        assert!(config.file_names().contains(&"Fichier".to_string()));
        assert!(config.category_names().contains(&"Catégorie".to_string()));
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_from_json() {
        let json = r#"{
            "File": {"id": 6, "name": "Datei", "aliases": ["Bild"]},
            "Category": {"id": 14, "name": "Kategorie"},
            "Template": {"id": 10, "name": "Vorlage", "aliases": []}
        }"#;
        let config = NamespaceConfig::from_json(json).unwrap();
        assert!(config.file_names().contains(&"Bild".to_string()));
        assert!(config.category_names().contains(&"Kategorie".to_string()));
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_from_json_missing_category() {
        let json = r#"{"File": {"id": 6, "name": "File"}}"#;
        let err = NamespaceConfig::from_json(json).unwrap_err();
        assert!(matches!(err, CleanError::MissingNamespace { .. }));
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_from_json_malformed() {
        let err = NamespaceConfig::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, CleanError::InvalidConfig { .. }));
    }
}
