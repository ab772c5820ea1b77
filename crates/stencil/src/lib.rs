// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # Stencil
//!
//! Layout templates for site builders.
//!
//! Stencil applies named layout templates to the configuration of a UI
//! region (header, footer, ...) and remembers which template the user picked.
//!
//! ## Features
//!
//! - Immutable template catalogs with category filtering
//! - Layered application: defaults, then device variant (`desktop`/`mobile`)
//! - Pluggable per-template transforms
//! - Style variables rendered as CSS custom properties
//! - Selection persistence over a fallible key-value store
//! - Built-in header and footer catalogs with typed property sets
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stencil::kv::MemoryKVStore;
//! use stencil::regions::HeaderProps;
//! use stencil::{header_catalog, DeviceMode, SelectionStore, TemplateSession};
//!
//! let catalog = Arc::new(header_catalog::<HeaderProps>()?);
//! let store = SelectionStore::new(Arc::new(MemoryKVStore::new()));
//! let session = TemplateSession::new(catalog, store);
//!
//! let picked = session.pick("header-centered", &HeaderProps::default(), DeviceMode::Mobile);
//! ```

/// Built-in catalogs and regions.
pub mod builtin;
/// Template catalog.
pub mod catalog;
/// Template application engine.
pub mod engine;
/// Error types.
pub mod error;
/// Client-local key-value storage.
pub mod kv;
/// Property sets and patches.
pub mod props;
/// Typed header and footer property sets.
pub mod regions;
/// Persistence of the selected template.
pub mod selection;
/// Selector interaction contract.
pub mod selector;
/// Catalog, engine and persistence wired together.
pub mod session;
/// The template model.
pub mod template;

pub use builtin::{footer_catalog, header_catalog, ParseRegionError, Region};
pub use catalog::Catalog;
pub use engine::{apply_template, layered_merge, Applied};
pub use error::*;
pub use props::{overlay_with_serde, PropertyPatch, PropertySet};
pub use selection::{SelectionStore, SELECTED_TEMPLATE_KEY};
pub use selector::{SelectorEntry, TemplateSelector};
pub use session::{Picked, TemplateSession};
pub use template::*;

/// A dynamic property set: field name to JSON value.
pub type Props = serde_json::Map<String, serde_json::Value>;
