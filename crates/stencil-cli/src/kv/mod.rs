// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI KV store implementation using SQLite.

mod sqlite;

pub use sqlite::{SqliteKVStore, DATABASE_FILE};

use crate::config::StorageConfig;
use std::path::Path;
use std::sync::Arc;
use stencil::{Region, SelectionStore};

/// Opens the selection store for `region` as configured.
///
/// Storage problems are not fatal: a disabled store, a data directory that
/// cannot be created, or a database that cannot be opened all yield a
/// selection store without a backend, after logging why.
pub fn open_selection(config: &StorageConfig, root: &Path, region: Region) -> SelectionStore {
    if !config.enabled {
        tracing::debug!("Storage disabled in configuration");
        return SelectionStore::unavailable();
    }

    let data_dir = root.join(&config.data_dir);
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::warn!(
            "Cannot create data directory {}, selection will not persist: {}",
            data_dir.display(),
            e
        );
        return SelectionStore::unavailable();
    }

    let namespace = config.namespace_for(region);
    match SqliteKVStore::new(&data_dir, &namespace) {
        Ok(store) => SelectionStore::new(Arc::new(store)).with_key(config.key.clone()),
        Err(e) => {
            tracing::warn!("Cannot open selection store, selection will not persist: {}", e);
            SelectionStore::unavailable()
        }
    }
}
