// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for the stencil template core.
//!
//! Only configuration-time defects are errors. Runtime conditions are
//! resolved where they occur:
//!
//! - **Not found** (unknown template id, stale persisted id): `Option::None`
//! - **Storage failure** (selection persistence): a `false` result plus a
//!   logged warning
//!
//! # Error Categories
//!
//! - **Catalog errors**: empty or duplicate ids, more than one default entry
//! - **Data source errors**: catalog JSON that cannot be read or parsed

use thiserror::Error;

/// The main error type for stencil operations.
#[derive(Error, Debug)]
pub enum StencilError {
    /// A template record has an empty id.
    #[error("Invalid template at position {index}: id must not be empty")]
    EmptyTemplateId {
        /// Declaration position of the offending record.
        index: usize,
    },

    /// Two templates in the same catalog share an id.
    #[error("Duplicate template id: {0}")]
    DuplicateTemplateId(String),

    /// More than one template carries the reserved default name.
    #[error("Multiple default templates named {name:?}: {ids:?}")]
    MultipleDefaultTemplates {
        /// The reserved name.
        name: String,
        /// Ids of every template carrying it, in declaration order.
        ids: Vec<String>,
    },

    /// Catalog data could not be parsed.
    #[error("Catalog parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Catalog file could not be read.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for Results with [`StencilError`].
pub type Result<T> = std::result::Result<T, StencilError>;
