// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

/// Every variant is fatal to the load: the loader performs no local
/// recovery, substitutes no defaults and never hands out a partial
/// configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing {field} env var")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    ShapeViolation {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Missing {field} env var while {feature} is enabled")]
    MissingCompanion {
        feature: &'static str,
        field: &'static str,
    },

    #[error("No chains resolved")]
    EmptyChainSet,

    #[error("Failed to resolve chains: {reason}")]
    ChainResolution { reason: String },

    #[error("Failed to read the environment: {0}")]
    Source(#[from] figment::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
