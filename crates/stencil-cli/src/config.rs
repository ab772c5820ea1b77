// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Stencil project configuration.
//!
//! Configuration is loaded from `stencil.toml` at the project root.
//!
//! # Example Configuration
//!
//! ```toml
//! [project]
//! name = "my-site"
//!
//! [catalog]
//! region = "header"
//! path = "templates/header.json"
//!
//! [storage]
//! enabled = true
//! data_dir = ".stencil/data"
//! namespace = "my-site-header"
//! key = "selectedTemplateId"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use stencil::{Region, SELECTED_TEMPLATE_KEY};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "stencil.toml";

/// Main configuration structure loaded from `stencil.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Which catalog to use.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Where the selected template is remembered.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Directory relative paths resolve against.
    #[serde(skip)]
    pub root: PathBuf,
}

/// Project metadata configuration.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    #[serde(default = "default_project_name")]
    pub name: String,
}

/// Catalog source configuration.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Region templated by default (default: header).
    #[serde(default)]
    pub region: Region,
    /// JSON catalog file; the built-in catalog for the region when unset.
    #[serde(default)]
    pub path: Option<String>,
}

/// Selection storage configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Persist the selection at all (default: true).
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Directory for the KV database (default: ".stencil/data").
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// KV namespace; the region name when unset.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Key the selected id is stored under (default: "selectedTemplateId").
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_project_name() -> String {
    "unnamed".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_data_dir() -> String {
    ".stencil/data".to_string()
}

fn default_key() -> String {
    SELECTED_TEMPLATE_KEY.to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            data_dir: default_data_dir(),
            namespace: None,
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// The KV namespace used for `region`.
    pub fn namespace_for(&self, region: Region) -> String {
        self.namespace
            .clone()
            .unwrap_or_else(|| region.as_str().to_string())
    }
}

impl CatalogConfig {
    /// The catalog file, resolved against `root`.
    pub fn resolved_path(&self, root: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|p| root.join(p))
    }
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// If no configuration file exists, returns default configuration
    /// rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Config {
                root,
                ..Config::default()
            });
        }

        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.root = root;
        Ok(config)
    }
}
