// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salesdash_domain::DomainError;

/// Errors that can occur while generating or caching a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Generator parameters are invalid.
    InvalidConfiguration {
        /// Description of the invalid parameter.
        reason: String,
    },
    /// A generated record violated a domain rule.
    DomainViolation(DomainError),
    /// A sampling distribution could not be built or drawn from.
    Sampling {
        /// Description of the sampling failure.
        reason: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "Invalid generator configuration: {reason}")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Sampling { reason } => write!(f, "Sampling failed: {reason}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
