// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The template catalog.
//!
//! A [`Catalog`] is the immutable, ordered collection of every template
//! available for one UI region. It is built once at startup (from code,
//! from records, or from a JSON file) and only read afterwards, so it can be
//! shared across threads behind an `Arc` without locking.
//!
//! # Example
//!
//! ```rust,ignore
//! use stencil::{Catalog, Props};
//!
//! let catalog: Catalog<Props> = Catalog::from_json_path("templates.json")?;
//! for template in catalog.list(Some("classic")) {
//!     println!("{} - {}", template.id, template.name);
//! }
//! ```

use crate::error::{Result, StencilError};
use crate::template::{Template, TemplateRecord, DEFAULT_TEMPLATE_NAME};
use std::collections::HashMap;
use std::path::Path;

/// Immutable, ordered collection of templates.
#[derive(Debug, Clone)]
pub struct Catalog<P> {
    templates: Vec<Template<P>>,
    index: HashMap<String, usize>,
}

impl<P> Catalog<P> {
    /// Builds a catalog, preserving declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error if a template has an empty id, if two templates share
    /// an id, or if more than one template is named
    /// [`DEFAULT_TEMPLATE_NAME`]. A catalog without such a template is
    /// accepted; resetting to the default is then a no-op.
    pub fn new(templates: Vec<Template<P>>) -> Result<Self> {
        let mut index = HashMap::with_capacity(templates.len());

        for (position, template) in templates.iter().enumerate() {
            if template.id.is_empty() {
                return Err(StencilError::EmptyTemplateId { index: position });
            }
            if index.insert(template.id.clone(), position).is_some() {
                return Err(StencilError::DuplicateTemplateId(template.id.clone()));
            }
        }

        let defaults: Vec<String> = templates
            .iter()
            .filter(|t| t.is_default())
            .map(|t| t.id.clone())
            .collect();
        if defaults.len() > 1 {
            return Err(StencilError::MultipleDefaultTemplates {
                name: DEFAULT_TEMPLATE_NAME.to_string(),
                ids: defaults,
            });
        }
        if defaults.is_empty() && !templates.is_empty() {
            tracing::warn!(
                "Catalog has no template named {:?}, reset will do nothing",
                DEFAULT_TEMPLATE_NAME
            );
        }

        tracing::debug!("Loaded catalog with {} templates", templates.len());
        Ok(Self { templates, index })
    }

    /// Builds a catalog from data records.
    pub fn from_records(records: Vec<TemplateRecord>) -> Result<Self> {
        Self::new(records.into_iter().map(Template::from).collect())
    }

    /// Parses a JSON array of template records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<TemplateRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Reads and parses a JSON catalog file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Returns every template, or only those whose category equals
    /// `category` exactly. Declaration order is preserved.
    pub fn list(&self, category: Option<&str>) -> Vec<&Template<P>> {
        self.templates
            .iter()
            .filter(|t| match category {
                Some(category) => t.category.as_deref() == Some(category),
                None => true,
            })
            .collect()
    }

    /// Looks up a template by id.
    pub fn get_by_id(&self, id: &str) -> Option<&Template<P>> {
        self.index.get(id).map(|&position| &self.templates[position])
    }

    /// The template named [`DEFAULT_TEMPLATE_NAME`], if present.
    pub fn default_template(&self) -> Option<&Template<P>> {
        self.templates.iter().find(|t| t.is_default())
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for category in self.templates.iter().filter_map(|t| t.category.as_deref()) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Iterates templates in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Template<P>> {
        self.templates.iter()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a, P> IntoIterator for &'a Catalog<P> {
    type Item = &'a Template<P>;
    type IntoIter = std::slice::Iter<'a, Template<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Props;
    use serde_json::json;

    fn record(id: &str, name: &str, category: Option<&str>) -> TemplateRecord {
        TemplateRecord {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: format!("/thumbs/{}.png", id),
            category: category.map(str::to_string),
            defaults: Default::default(),
            styles: Default::default(),
            variant: Default::default(),
        }
    }

    fn sample() -> Catalog<Props> {
        Catalog::from_records(vec![
            record("minimal", "Minimal", Some("basic")),
            record("classic", "Classic", Some("classic")),
            record("centered", "Centered", Some("classic")),
            record("split", "Split", None),
            record("bold", "Bold", Some("Classic")),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_by_id_round_trip() {
        let catalog = sample();
        for template in &catalog {
            let found = catalog.get_by_id(&template.id).unwrap();
            assert!(std::ptr::eq(found, template));
        }
    }

    #[test]
    fn test_get_by_id_unknown_is_none() {
        assert!(sample().get_by_id("removed-template").is_none());
    }

    #[test]
    fn test_list_preserves_order() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.list(None).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["minimal", "classic", "centered", "split", "bold"]);
    }

    #[test]
    fn test_list_by_category_is_exact_ordered_subset() {
        let catalog = sample();

        for category in ["classic", "Classic", "basic", "missing"] {
            let filtered: Vec<&str> = catalog
                .list(Some(category))
                .iter()
                .map(|t| t.id.as_str())
                .collect();
            let expected: Vec<&str> = catalog
                .list(None)
                .iter()
                .filter(|t| t.category.as_deref() == Some(category))
                .map(|t| t.id.as_str())
                .collect();
            assert_eq!(filtered, expected);
        }

        let classic: Vec<&str> = catalog
            .list(Some("classic"))
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(classic, vec!["classic", "centered"]);
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(sample().categories(), vec!["basic", "classic", "Classic"]);
    }

    #[test]
    fn test_default_template() {
        assert_eq!(sample().default_template().unwrap().id, "minimal");

        let catalog: Catalog<Props> =
            Catalog::from_records(vec![record("classic", "Classic", None)]).unwrap();
        assert!(catalog.default_template().is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result: Result<Catalog<Props>> = Catalog::from_records(vec![
            record("classic", "Classic", None),
            record("classic", "Classic Again", None),
        ]);
        assert!(matches!(result, Err(StencilError::DuplicateTemplateId(id)) if id == "classic"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result: Result<Catalog<Props>> = Catalog::from_records(vec![
            record("minimal", "Minimal", None),
            record("", "Nameless", None),
        ]);
        assert!(matches!(result, Err(StencilError::EmptyTemplateId { index: 1 })));
    }

    #[test]
    fn test_multiple_defaults_rejected() {
        let result: Result<Catalog<Props>> = Catalog::from_records(vec![
            record("minimal", "Minimal", None),
            record("minimal-2", "Minimal", None),
        ]);
        match result {
            Err(StencilError::MultipleDefaultTemplates { ids, .. }) => {
                assert_eq!(ids, vec!["minimal", "minimal-2"]);
            }
            other => panic!("expected MultipleDefaultTemplates, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_str() {
        let json = json!([
            { "id": "minimal", "name": "Minimal", "thumbnail": "" },
            { "id": "wide", "name": "Wide", "thumbnail": "", "category": "modern",
              "defaults": { "fullWidth": true } }
        ])
        .to_string();

        let catalog: Catalog<Props> = Catalog::from_json_str(&json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get_by_id("wide").unwrap().defaults.get("fullWidth"),
            Some(&json!(true))
        );
    }

    #[test]
    fn test_from_json_str_malformed() {
        let result: Result<Catalog<Props>> = Catalog::from_json_str(r#"[{ "id": "x" }]"#);
        assert!(matches!(result, Err(StencilError::ParseError(_))));
    }

    #[test]
    fn test_catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog<Props>>();
        assert_send_sync::<Catalog<crate::regions::HeaderProps>>();
        assert_send_sync::<crate::TemplateSession<Props>>();
        assert_send_sync::<crate::SelectionStore>();
    }
}
