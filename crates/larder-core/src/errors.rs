// ABOUTME: Catalog error taxonomy for loading, parsing, and validation failures
// ABOUTME: Engine operations are total functions and never surface these errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

//! # Catalog Errors
//!
//! Failures raised by the catalog supply side (file loading, aggregation,
//! validation). The scoring and ranking engines are total over any catalog
//! content and never return these; a caller that fails to obtain a catalog
//! should invoke the engines with an empty one and degrade to empty results.

use thiserror::Error;

/// Errors from catalog loading, aggregation, and validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a catalog file or directory failed
    #[error("catalog I/O failure at '{path}': {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A catalog file held malformed JSON
    #[error("failed to parse catalog file '{path}': {source}")]
    Parse {
        /// Path that failed to parse
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Two records share the same id
    #[error("duplicate food id '{id}' in catalog")]
    DuplicateId {
        /// The offending id
        id: String,
    },

    /// A record is missing a required field
    #[error("food record '{id}' is missing required field '{field}'")]
    MissingField {
        /// Id of the offending record (may be empty when id itself is missing)
        id: String,
        /// Name of the missing field
        field: String,
    },

    /// A requested record does not exist
    #[error("no food with id '{id}' in catalog")]
    NotFound {
        /// The requested id
        id: String,
    },
}

impl CatalogError {
    /// Build an [`CatalogError::Io`] carrying the offending path.
    #[must_use]
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`CatalogError::Parse`] carrying the offending path.
    #[must_use]
    pub fn parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Build a [`CatalogError::MissingField`].
    #[must_use]
    pub fn missing_field(id: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            id: id.into(),
            field: field.into(),
        }
    }
}
