// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The layout template model.
//!
//! A [`Template`] bundles default property overrides, style variables and
//! device-specific overrides for one UI region. Templates come from data as
//! [`TemplateRecord`]s and are turned into templates with the generic
//! [`Transform::Layered`] strategy; a [`Transform::Custom`] strategy can be
//! attached in code for templates that need their own merge logic.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "id": "centered",
//!   "name": "Centered",
//!   "thumbnail": "/thumbnails/header-centered.png",
//!   "category": "classic",
//!   "defaults": { "layout": "centered", "sticky": true },
//!   "styles": { "--header-height": 72, "--header-bg": "#ffffff" },
//!   "variant": { "mobile": { "layout": "stacked" } }
//! }
//! ```

use crate::props::PropertyPatch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Name of the template that "reset to default" applies.
pub const DEFAULT_TEMPLATE_NAME: &str = "Minimal";

/// The device mode a region is rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceMode {
    /// Wide layouts.
    #[default]
    Desktop,
    /// Narrow layouts.
    Mobile,
}

impl DeviceMode {
    /// Returns the lowercase mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceMode::Desktop => "desktop",
            DeviceMode::Mobile => "mobile",
        }
    }
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a device mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown device mode {0:?}, expected \"desktop\" or \"mobile\"")]
pub struct ParseDeviceModeError(String);

impl FromStr for DeviceMode {
    type Err = ParseDeviceModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(DeviceMode::Desktop),
            "mobile" => Ok(DeviceMode::Mobile),
            _ => Err(ParseDeviceModeError(s.to_string())),
        }
    }
}

/// A style variable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value, rendered without a unit.
    Number(serde_json::Number),
    /// Any other value, rendered verbatim.
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Number(value.into())
    }
}

/// Style variable name to value, ordered by name.
pub type StyleVars = BTreeMap<String, StyleValue>;

/// Per-device overrides applied after a template's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceVariants {
    /// Overrides for [`DeviceMode::Desktop`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<PropertyPatch>,
    /// Overrides for [`DeviceMode::Mobile`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<PropertyPatch>,
}

impl DeviceVariants {
    /// Returns the overrides for `mode`, if the template declares any.
    pub fn get(&self, mode: DeviceMode) -> Option<&PropertyPatch> {
        match mode {
            DeviceMode::Desktop => self.desktop.as_ref(),
            DeviceMode::Mobile => self.mobile.as_ref(),
        }
    }

    fn is_empty(&self) -> bool {
        self.desktop.is_none() && self.mobile.is_none()
    }
}

/// Serializable form of a template, as found in catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    /// Unique id within the catalog.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Preview image reference. Never fetched or validated.
    pub thumbnail: String,
    /// Optional grouping key for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Property overrides applied to every device mode.
    #[serde(default)]
    pub defaults: PropertyPatch,
    /// Style variables applied to the render target.
    #[serde(default)]
    pub styles: StyleVars,
    /// Device-specific overrides.
    #[serde(default, skip_serializing_if = "DeviceVariants::is_empty")]
    pub variant: DeviceVariants,
}

/// A custom merge for templates the layered merge cannot express.
///
/// Implementations must be pure: the result depends only on `current` and
/// `mode`, and nothing outside the returned value changes. Closures with the
/// signature `Fn(&P, DeviceMode) -> P` implement this trait.
pub trait TemplateTransform<P>: Send + Sync {
    /// Produces the next property set from the caller's current one.
    fn transform(&self, current: &P, mode: DeviceMode) -> P;
}

impl<P, F> TemplateTransform<P> for F
where
    F: Fn(&P, DeviceMode) -> P + Send + Sync,
{
    fn transform(&self, current: &P, mode: DeviceMode) -> P {
        self(current, mode)
    }
}

/// How a template turns the current property set into the next one.
pub enum Transform<P> {
    /// Copy, overlay `defaults`, then overlay the active device variant.
    Layered,
    /// Delegate to a custom transform; its result is used verbatim.
    Custom(Arc<dyn TemplateTransform<P>>),
}

impl<P> Transform<P> {
    /// Wraps a custom transform.
    pub fn custom<T>(transform: T) -> Self
    where
        T: TemplateTransform<P> + 'static,
    {
        Transform::Custom(Arc::new(transform))
    }
}

impl<P> Default for Transform<P> {
    fn default() -> Self {
        Transform::Layered
    }
}

impl<P> Clone for Transform<P> {
    fn clone(&self) -> Self {
        match self {
            Transform::Layered => Transform::Layered,
            Transform::Custom(t) => Transform::Custom(Arc::clone(t)),
        }
    }
}

impl<P> fmt::Debug for Transform<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Layered => f.write_str("Layered"),
            Transform::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A layout template for property sets of type `P`.
#[derive(Debug, Clone)]
pub struct Template<P> {
    /// Unique id within the catalog.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Preview image reference.
    pub thumbnail: String,
    /// Optional grouping key for filtering.
    pub category: Option<String>,
    /// Property overrides applied to every device mode.
    pub defaults: PropertyPatch,
    /// Style variables, returned next to the merged properties.
    pub styles: StyleVars,
    /// Device-specific overrides.
    pub variant: DeviceVariants,
    /// Merge strategy.
    pub transform: Transform<P>,
}

impl<P> Template<P> {
    /// Replaces the merge strategy with a custom transform.
    pub fn with_transform<T>(mut self, transform: T) -> Self
    where
        T: TemplateTransform<P> + 'static,
    {
        self.transform = Transform::custom(transform);
        self
    }

    /// Whether this is the template "reset to default" applies.
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_TEMPLATE_NAME
    }

    /// Returns the serializable form of this template.
    ///
    /// The merge strategy is not part of the record.
    pub fn to_record(&self) -> TemplateRecord {
        TemplateRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail: self.thumbnail.clone(),
            category: self.category.clone(),
            defaults: self.defaults.clone(),
            styles: self.styles.clone(),
            variant: self.variant.clone(),
        }
    }
}

impl<P> From<TemplateRecord> for Template<P> {
    fn from(record: TemplateRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            thumbnail: record.thumbnail,
            category: record.category,
            defaults: record.defaults,
            styles: record.styles,
            variant: record.variant,
            transform: Transform::Layered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    #[test]
    fn test_device_mode_parsing() {
        assert_eq!("desktop".parse::<DeviceMode>(), Ok(DeviceMode::Desktop));
        assert_eq!(" Mobile ".parse::<DeviceMode>(), Ok(DeviceMode::Mobile));
        assert!("tablet".parse::<DeviceMode>().is_err());
        assert_eq!(DeviceMode::Mobile.to_string(), "mobile");
    }

    #[test]
    fn test_record_wire_format() {
        let record: TemplateRecord = serde_json::from_value(json!({
            "id": "centered",
            "name": "Centered",
            "thumbnail": "/thumbs/centered.png",
            "category": "classic",
            "defaults": { "layout": "centered" },
            "styles": { "--header-height": 72, "--header-bg": "#fff" },
            "variant": { "mobile": { "layout": "stacked" } }
        }))
        .unwrap();

        assert_eq!(record.category.as_deref(), Some("classic"));
        assert_eq!(
            record.styles.get("--header-height"),
            Some(&StyleValue::from(72))
        );
        assert_eq!(
            record.styles.get("--header-bg"),
            Some(&StyleValue::from("#fff"))
        );
        assert!(record.variant.desktop.is_none());
        assert_eq!(
            record.variant.get(DeviceMode::Mobile).and_then(|v| v.get("layout")),
            Some(&json!("stacked"))
        );
    }

    #[test]
    fn test_record_optional_fields_default() {
        let record: TemplateRecord = serde_json::from_value(json!({
            "id": "bare",
            "name": "Bare",
            "thumbnail": ""
        }))
        .unwrap();

        assert!(record.category.is_none());
        assert!(record.defaults.is_empty());
        assert!(record.styles.is_empty());

        let serialized = serde_json::to_value(&record).unwrap();
        assert!(serialized.get("variant").is_none());
        assert!(serialized.get("category").is_none());
    }

    #[test]
    fn test_record_conversion_uses_layered_strategy() {
        let record: TemplateRecord = serde_json::from_value(json!({
            "id": "minimal",
            "name": "Minimal",
            "thumbnail": "/thumbs/minimal.png"
        }))
        .unwrap();
        let template: Template<Map<String, Value>> = record.clone().into();

        assert!(matches!(template.transform, Transform::Layered));
        assert!(template.is_default());
        assert_eq!(template.to_record(), record);
    }

    #[test]
    fn test_with_transform_installs_custom_strategy() {
        let record: TemplateRecord = serde_json::from_value(json!({
            "id": "custom",
            "name": "Custom",
            "thumbnail": ""
        }))
        .unwrap();
        let template: Template<Map<String, Value>> = Template::from(record)
            .with_transform(|current: &Map<String, Value>, _mode: DeviceMode| current.clone());

        assert!(matches!(template.transform, Transform::Custom(_)));
        assert_eq!(format!("{:?}", template.transform), "Custom(..)");
    }
}
