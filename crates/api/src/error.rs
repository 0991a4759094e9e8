// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use salesdash::CoreError;
use thiserror::Error;

/// Errors raised while writing a CSV export.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// A record could not be serialized.
    #[error("Failed to write CSV row for order {order_id}: {reason}")]
    Row {
        /// The order that failed to serialize.
        order_id: String,
        /// The underlying writer error.
        reason: String,
    },
    /// The header row could not be written.
    #[error("Failed to write CSV header: {reason}")]
    Header {
        /// The underlying writer error.
        reason: String,
    },
    /// Buffered output could not be flushed.
    #[error("Failed to flush CSV output: {reason}")]
    Flush {
        /// The underlying I/O error.
        reason: String,
    },
    /// The in-memory export was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {reason}")]
    Encoding {
        /// The conversion error.
        reason: String,
    },
}

/// API-level errors.
///
/// Empty filter results are not errors; aggregations over them return
/// zeroed summaries.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// A filter selection could not be interpreted.
    InvalidFilter {
        /// The filter dimension that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The CSV export failed.
    Export(ExportError),
    /// Dataset generation failed.
    Core(CoreError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFilter { field, message } => {
                write!(f, "Invalid filter for '{field}': {message}")
            }
            Self::Export(err) => write!(f, "Export failed: {err}"),
            Self::Core(err) => write!(f, "Dataset unavailable: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self::Export(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Core(err)
    }
}
