// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Type definitions for the KV store.

use std::fmt;

/// Result type for KV operations.
pub type KVResult<T> = Result<T, KVError>;

/// Error type for KV operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KVError {
    /// The host offers no storage at all (disabled, private mode, ...).
    Unavailable,
    /// Storage backend error.
    Storage(String),
    /// The store refused the write because it is full.
    QuotaExceeded,
}

impl fmt::Display for KVError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KVError::Unavailable => write!(f, "Storage unavailable"),
            KVError::Storage(msg) => write!(f, "Storage error: {}", msg),
            KVError::QuotaExceeded => write!(f, "Storage quota exceeded"),
        }
    }
}

impl std::error::Error for KVError {}
