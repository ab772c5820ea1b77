// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Persistence of the selected template id.
//!
//! [`SelectionStore`] is the only reader and writer of the persisted
//! selection. It stores a single UTF-8 id under one well-known key and never
//! fails loudly: storage errors are logged and reported as `false` (writes)
//! or `None` (reads), so a host with storage disabled keeps working without
//! a restored selection.

use crate::catalog::Catalog;
use crate::kv::{KVError, KVStore};
use crate::template::Template;
use std::sync::Arc;

/// Key the selected template id is stored under.
pub const SELECTED_TEMPLATE_KEY: &str = "selectedTemplateId";

/// Durable storage of the selected template id.
#[derive(Clone)]
pub struct SelectionStore {
    store: Option<Arc<dyn KVStore>>,
    key: String,
}

impl SelectionStore {
    /// Creates a selection store backed by `store`.
    pub fn new(store: Arc<dyn KVStore>) -> Self {
        Self {
            store: Some(store),
            key: SELECTED_TEMPLATE_KEY.to_string(),
        }
    }

    /// Creates a selection store for a host without any storage.
    ///
    /// Every write reports failure and every read finds nothing.
    pub fn unavailable() -> Self {
        Self {
            store: None,
            key: SELECTED_TEMPLATE_KEY.to_string(),
        }
    }

    /// Uses `key` instead of [`SELECTED_TEMPLATE_KEY`].
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// The key the selection is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a backing store is attached.
    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    /// Stores `id` as the selected template. Returns `false` on failure.
    #[must_use]
    pub fn save(&self, id: &str) -> bool {
        let result = self
            .backend()
            .and_then(|store| store.put(&self.key, id.as_bytes()));

        match result {
            Ok(()) => {
                tracing::debug!(key = %self.key, id, "Saved template selection");
                true
            }
            Err(e) => {
                tracing::warn!(key = %self.key, id, "Failed to save template selection: {}", e);
                false
            }
        }
    }

    /// Removes the stored selection. Returns `false` on failure.
    #[must_use]
    pub fn clear(&self) -> bool {
        match self.backend().and_then(|store| store.delete(&self.key)) {
            Ok(()) => {
                tracing::debug!(key = %self.key, "Cleared template selection");
                true
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "Failed to clear template selection: {}", e);
                false
            }
        }
    }

    /// The raw stored id, if one is stored and readable.
    pub fn stored_id(&self) -> Option<String> {
        let bytes = match self.backend().and_then(|store| store.get(&self.key)) {
            Ok(bytes) => bytes?,
            Err(e) => {
                tracing::warn!(key = %self.key, "Failed to read template selection: {}", e);
                return None;
            }
        };

        match String::from_utf8(bytes) {
            Ok(id) if !id.is_empty() => Some(id),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(key = %self.key, "Stored template selection is not UTF-8: {}", e);
                None
            }
        }
    }

    /// Resolves the stored id through `catalog`.
    ///
    /// Returns `None` when nothing is stored, storage is unreadable, or the
    /// stored id no longer exists in the catalog.
    pub fn load<'c, P>(&self, catalog: &'c Catalog<P>) -> Option<&'c Template<P>> {
        let id = self.stored_id()?;
        let template = catalog.get_by_id(&id);
        if template.is_none() {
            tracing::warn!(id = %id, "Stored template selection is no longer in the catalog");
        }
        template
    }

    fn backend(&self) -> Result<&dyn KVStore, KVError> {
        self.store.as_deref().ok_or(KVError::Unavailable)
    }
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("key", &self.key)
            .field("available", &self.is_available())
            .finish()
    }
}
