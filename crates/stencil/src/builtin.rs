// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Built-in template catalogs.
//!
//! The library ships one catalog per [`Region`]. Each has exactly one
//! template named [`DEFAULT_TEMPLATE_NAME`](crate::DEFAULT_TEMPLATE_NAME).
//! Hosts with their own catalog load it with
//! [`Catalog::from_json_path`] instead.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::template::TemplateRecord;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A templated area of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// The site header.
    #[default]
    Header,
    /// The site footer.
    Footer,
}

impl Region {
    /// Returns the lowercase region name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Footer => "footer",
        }
    }

    /// The built-in template records for this region.
    pub fn builtin_records(&self) -> Result<Vec<TemplateRecord>> {
        match self {
            Region::Header => header_templates(),
            Region::Footer => footer_templates(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a region.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown region {0:?}, expected \"header\" or \"footer\"")]
pub struct ParseRegionError(String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "header" => Ok(Region::Header),
            "footer" => Ok(Region::Footer),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}

/// Built-in header template records, in display order.
pub fn header_templates() -> Result<Vec<TemplateRecord>> {
    let records = serde_json::from_value(Value::Array(vec![
        json!({
            "id": "header-minimal",
            "name": "Minimal",
            "thumbnail": "/thumbnails/header/minimal.png",
            "category": "basic",
            "defaults": {
                "layout": "minimal",
                "sticky": false,
                "transparent": false,
                "showSearch": false,
                "ctaLabel": null,
                "height": 56
            },
            "styles": {
                "--header-bg": "#ffffff",
                "--header-fg": "#111827",
                "--header-height": 56
            }
        }),
        json!({
            "id": "header-classic",
            "name": "Classic",
            "thumbnail": "/thumbnails/header/classic.png",
            "category": "classic",
            "defaults": { "layout": "left", "sticky": true, "height": 64 },
            "styles": {
                "--header-bg": "#ffffff",
                "--header-fg": "#111827",
                "--header-border": "1px solid #e5e7eb"
            },
            "variant": { "mobile": { "height": 56 } }
        }),
        json!({
            "id": "header-centered",
            "name": "Centered",
            "thumbnail": "/thumbnails/header/centered.png",
            "category": "classic",
            "defaults": { "layout": "centered", "height": 80 },
            "styles": { "--header-bg": "#ffffff", "--header-nav-gap": 32 },
            "variant": { "mobile": { "layout": "stacked", "height": 64 } }
        }),
        json!({
            "id": "header-split",
            "name": "Split",
            "thumbnail": "/thumbnails/header/split.png",
            "category": "modern",
            "defaults": { "layout": "split", "showSearch": true },
            "styles": { "--header-bg": "#f8fafc", "--header-nav-gap": 24 },
            "variant": { "mobile": { "layout": "minimal", "showSearch": false } }
        }),
        json!({
            "id": "header-overlay",
            "name": "Overlay",
            "thumbnail": "/thumbnails/header/overlay.png",
            "category": "modern",
            "defaults": {
                "transparent": true,
                "sticky": false,
                "backgroundColor": "transparent",
                "textColor": "#ffffff"
            },
            "styles": { "--header-bg": "transparent", "--header-fg": "#ffffff" },
            "variant": { "desktop": { "height": 96 } }
        }),
        json!({
            "id": "header-storefront",
            "name": "Storefront",
            "thumbnail": "/thumbnails/header/storefront.png",
            "category": "commerce",
            "defaults": {
                "layout": "left",
                "sticky": true,
                "showSearch": true,
                "ctaLabel": "Shop now"
            },
            "styles": { "--header-bg": "#ffffff", "--header-accent": "#f97316" },
            "variant": { "mobile": { "showSearch": false } }
        }),
    ]))?;
    Ok(records)
}

/// Built-in footer template records, in display order.
pub fn footer_templates() -> Result<Vec<TemplateRecord>> {
    let records = serde_json::from_value(Value::Array(vec![
        json!({
            "id": "footer-minimal",
            "name": "Minimal",
            "thumbnail": "/thumbnails/footer/minimal.png",
            "category": "basic",
            "defaults": { "layout": "minimal", "showSocial": false, "padding": 16 },
            "styles": { "--footer-bg": "#ffffff", "--footer-fg": "#6b7280" }
        }),
        json!({
            "id": "footer-simple",
            "name": "Simple",
            "thumbnail": "/thumbnails/footer/simple.png",
            "category": "classic",
            "defaults": { "layout": "simple", "padding": 32 },
            "styles": { "--footer-bg": "#f9fafb", "--footer-fg": "#374151" }
        }),
        json!({
            "id": "footer-columns",
            "name": "Columns",
            "thumbnail": "/thumbnails/footer/columns.png",
            "category": "classic",
            "defaults": { "layout": "columns", "padding": 48 },
            "styles": { "--footer-bg": "#f9fafb", "--footer-column-gap": 40 },
            "variant": { "mobile": { "padding": 24 } }
        }),
        json!({
            "id": "footer-centered",
            "name": "Centered",
            "thumbnail": "/thumbnails/footer/centered.png",
            "category": "modern",
            "defaults": { "layout": "centered", "showSocial": true },
            "styles": { "--footer-bg": "#ffffff" },
            "variant": { "mobile": { "padding": 24 } }
        }),
        json!({
            "id": "footer-dark",
            "name": "Dark",
            "thumbnail": "/thumbnails/footer/dark.png",
            "category": "modern",
            "defaults": {
                "layout": "columns",
                "showSocial": true,
                "backgroundColor": "#111827",
                "textColor": "#f9fafb"
            },
            "styles": { "--footer-bg": "#111827", "--footer-fg": "#f9fafb" }
        }),
    ]))?;
    Ok(records)
}

/// The built-in header catalog.
pub fn header_catalog<P>() -> Result<Catalog<P>> {
    Catalog::from_records(header_templates()?)
}

/// The built-in footer catalog.
pub fn footer_catalog<P>() -> Result<Catalog<P>> {
    Catalog::from_records(footer_templates()?)
}
