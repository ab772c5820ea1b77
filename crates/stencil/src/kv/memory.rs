// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! In-memory KV store implementations.

use super::{KVError, KVResult, KVStore};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory KV store implementation.
///
/// Useful for testing and for hosts without durable storage. Data is lost
/// when the process exits.
pub struct MemoryKVStore {
    data: RwLock<BTreeMap<String, Vec<u8>>>,
    max_entries: Option<usize>,
}

impl MemoryKVStore {
    /// Create a new in-memory KV store.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
            max_entries: None,
        }
    }

    /// Create a store that rejects writes of new keys once it holds
    /// `max_entries` keys, like a browser store over its quota.
    pub fn with_quota(max_entries: usize) -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
            max_entries: Some(max_entries),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.read().map(|data| data.len()).unwrap_or(0)
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryKVStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KVStore for MemoryKVStore {
    fn get(&self, key: &str) -> KVResult<Option<Vec<u8>>> {
        let data = self.data.read().map_err(|e| KVError::Storage(e.to_string()))?;
        Ok(data.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> KVResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KVError::Storage(e.to_string()))?;

        if let Some(max) = self.max_entries {
            if !data.contains_key(key) && data.len() >= max {
                return Err(KVError::QuotaExceeded);
            }
        }

        data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> KVResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KVError::Storage(e.to_string()))?;

        data.remove(key);
        Ok(())
    }
}

/// A store for hosts where storage is disabled.
///
/// Every operation fails with [`KVError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableKVStore;

impl KVStore for UnavailableKVStore {
    fn get(&self, _key: &str) -> KVResult<Option<Vec<u8>>> {
        Err(KVError::Unavailable)
    }

    fn put(&self, _key: &str, _value: &[u8]) -> KVResult<()> {
        Err(KVError::Unavailable)
    }

    fn delete(&self, _key: &str) -> KVResult<()> {
        Err(KVError::Unavailable)
    }
}
