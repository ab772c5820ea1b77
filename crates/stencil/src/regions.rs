// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Typed property sets for the site builder's templated regions.
//!
//! Field names serialize in camelCase, which is also the key spelling
//! template patches use (`"showSearch"`, `"backgroundColor"`, ...).

use crate::props::{overlay_with_serde, PropertyPatch, PropertySet};
use serde::{Deserialize, Serialize};

/// A navigation or footer link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Link text.
    pub label: String,
    /// Link target.
    pub href: String,
}

impl NavItem {
    /// Creates a link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Header logo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Logo {
    /// Text shown when there is no image, or next to it.
    pub text: Option<String>,
    /// Logo image reference.
    pub image_url: Option<String>,
    /// Rendered width in pixels.
    pub width: u32,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            text: None,
            image_url: None,
            width: 120,
        }
    }
}

/// Header arrangement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    /// Logo left, navigation right.
    #[default]
    Left,
    /// Logo centered above or between navigation.
    Centered,
    /// Navigation split around a centered logo.
    Split,
    /// Logo and navigation on separate rows.
    Stacked,
    /// Logo only, navigation behind a menu button.
    Minimal,
}

/// Configuration of the site header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderProps {
    /// Arrangement of logo and navigation.
    pub layout: HeaderLayout,
    /// Logo settings.
    pub logo: Logo,
    /// Navigation links.
    pub nav: Vec<NavItem>,
    /// Stays at the top while scrolling.
    pub sticky: bool,
    /// Lets the page show through.
    pub transparent: bool,
    /// Shows the search field.
    pub show_search: bool,
    /// Call-to-action button label; hidden when `None`.
    pub cta_label: Option<String>,
    /// Height in pixels.
    pub height: u32,
    /// Background color.
    pub background_color: String,
    /// Text color.
    pub text_color: String,
}

impl Default for HeaderProps {
    fn default() -> Self {
        Self {
            layout: HeaderLayout::Left,
            logo: Logo::default(),
            nav: Vec::new(),
            sticky: false,
            transparent: false,
            show_search: false,
            cta_label: None,
            height: 64,
            background_color: "#ffffff".to_string(),
            text_color: "#111827".to_string(),
        }
    }
}

impl PropertySet for HeaderProps {
    fn overlay(&mut self, patch: &PropertyPatch) {
        overlay_with_serde(self, patch);
    }
}

/// Footer arrangement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterLayout {
    /// One row of links and the copyright line.
    #[default]
    Simple,
    /// Titled link columns.
    Columns,
    /// Everything centered.
    Centered,
    /// Copyright line only.
    Minimal,
}

/// A titled group of footer links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    /// Column heading.
    pub title: String,
    /// Links under the heading.
    pub links: Vec<NavItem>,
}

/// Configuration of the site footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterProps {
    /// Arrangement of the footer content.
    pub layout: FooterLayout,
    /// Link columns, used by column layouts.
    pub columns: Vec<FooterColumn>,
    /// Copyright line.
    pub copyright: String,
    /// Shows the social links.
    pub show_social: bool,
    /// Social profile links.
    pub social_links: Vec<NavItem>,
    /// Vertical padding in pixels.
    pub padding: u32,
    /// Background color.
    pub background_color: String,
    /// Text color.
    pub text_color: String,
}

impl Default for FooterProps {
    fn default() -> Self {
        Self {
            layout: FooterLayout::Simple,
            columns: Vec::new(),
            copyright: String::new(),
            show_social: false,
            social_links: Vec::new(),
            padding: 32,
            background_color: "#f9fafb".to_string(),
            text_color: "#374151".to_string(),
        }
    }
}

impl PropertySet for FooterProps {
    fn overlay(&mut self, patch: &PropertyPatch) {
        overlay_with_serde(self, patch);
    }
}
