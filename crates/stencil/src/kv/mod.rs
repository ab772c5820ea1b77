// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Client-local key-value storage.
//!
//! This module provides the platform-agnostic store that selection
//! persistence writes to. Stores are synchronous and fallible: a host may
//! have storage disabled, or be over its quota, and every operation reports
//! that as a [`KVError`] instead of panicking.
//!
//! # Implementations
//!
//! - [`MemoryKVStore`]: in-process storage (tests, hosts without disk)
//! - [`UnavailableKVStore`]: storage disabled by the host
//! - **CLI**: SQLite-backed persistent storage

mod memory;
mod types;

pub use memory::{MemoryKVStore, UnavailableKVStore};
pub use types::{KVError, KVResult};

/// Platform-agnostic KV store trait.
///
/// Implementors provide the actual storage mechanism (SQLite, memory, ...).
pub trait KVStore: Send + Sync {
    /// Get a value by key.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> KVResult<Option<Vec<u8>>>;

    /// Store a value, replacing any previous one.
    fn put(&self, key: &str, value: &[u8]) -> KVResult<()>;

    /// Delete a key.
    ///
    /// No error is returned if the key doesn't exist.
    fn delete(&self, key: &str) -> KVResult<()>;
}
