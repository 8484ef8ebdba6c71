// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Per-field shape validators.
//!
//! Each function takes the full environment-variable name alongside the
//! raw value so that every failure names the offending field. Values
//! that pass are considered trusted by the rest of the pipeline.

use std::str::FromStr;

use alloy_primitives::Address;
use url::Url;

use crate::error::{ConfigError, Result};

/// The `0x`-prefixed 20-byte form: exactly 42 characters.
const ADDRESS_LEN: usize = 42;

pub fn require<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingRequiredField { field }),
    }
}

pub fn url(field: &'static str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| ConfigError::ShapeViolation {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

pub fn address(field: &'static str, value: &str) -> Result<Address> {
    if value.len() != ADDRESS_LEN {
        return Err(ConfigError::ShapeViolation {
            field,
            value: value.to_string(),
            reason: format!("expected {} characters, got {}", ADDRESS_LEN, value.len()),
        });
    }
    Address::from_str(value).map_err(|e| ConfigError::ShapeViolation {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Strict two-valued parser: accepts exactly the literals `"true"` and
/// `"false"`. Anything else, including the empty string, fails.
pub fn bool_literal(field: &'static str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ConfigError::ShapeViolation {
            field,
            value: other.to_string(),
            reason: "expected the literal \"true\" or \"false\"".to_string(),
        }),
    }
}

pub fn bool_to_literal(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Optional feature flags: an absent variable means disabled, a present
/// one must still hold a strict boolean literal.
pub fn opt_bool_literal(field: &'static str, value: Option<&str>) -> Result<bool> {
    match value {
        None => Ok(false),
        Some(v) => bool_literal(field, v),
    }
}

pub fn network_id(field: &'static str, value: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|e| ConfigError::ShapeViolation {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

pub fn required_url(field: &'static str, value: Option<&str>) -> Result<Url> {
    url(field, require(field, value)?)
}

pub fn required_address(field: &'static str, value: Option<&str>) -> Result<Address> {
    address(field, require(field, value)?)
}

pub fn required_bool(field: &'static str, value: Option<&str>) -> Result<bool> {
    bool_literal(field, require(field, value)?)
}

pub fn opt_url(field: &'static str, value: Option<&str>) -> Result<Option<Url>> {
    value.map(|v| url(field, v)).transpose()
}

pub fn opt_address(field: &'static str, value: Option<&str>) -> Result<Option<Address>> {
    value.map(|v| address(field, v)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: &str = "BRIDGE_TEST_FIELD";

    #[test]
    fn test_bool_literal_exhaustive() {
        assert_eq!(bool_literal(FIELD, "true").unwrap(), true);
        assert_eq!(bool_literal(FIELD, "false").unwrap(), false);

        for bad in ["", "1", "0", "TRUE", "False", "yes", " true"] {
            let err = bool_literal(FIELD, bad).unwrap_err();
            assert!(
                matches!(err, ConfigError::ShapeViolation { field, .. } if field == FIELD),
                "{bad:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_bool_literal_round_trip() {
        for literal in ["true", "false"] {
            let parsed = bool_literal(FIELD, literal).unwrap();
            assert_eq!(bool_to_literal(parsed), literal);
        }
    }

    #[test]
    fn test_opt_bool_literal_defaults_to_disabled() {
        assert_eq!(opt_bool_literal(FIELD, None).unwrap(), false);
        assert_eq!(opt_bool_literal(FIELD, Some("true")).unwrap(), true);
        assert!(opt_bool_literal(FIELD, Some("")).is_err());
    }

    #[test]
    fn test_address_shape() {
        let ok = address(FIELD, "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0").unwrap();
        assert_eq!(ok.to_string().len(), 42);

        // 41 characters
        let err = address(FIELD, "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e").unwrap_err();
        assert!(matches!(err, ConfigError::ShapeViolation { field, .. } if field == FIELD));

        // right length, not hex
        let err = address(FIELD, "0xZZ46736679d2D9a65F0992F2272dE9f3c7fa6e0").unwrap_err();
        assert!(matches!(err, ConfigError::ShapeViolation { .. }));
    }

    #[test]
    fn test_url_must_be_absolute() {
        assert!(url(FIELD, "https://bridge-api.example.com/v1").is_ok());
        assert!(url(FIELD, "/relative/path").is_err());
        assert!(url(FIELD, "not a url").is_err());
    }

    #[test]
    fn test_require() {
        assert_eq!(require(FIELD, Some("value")).unwrap(), "value");
        for absent in [None, Some("")] {
            let err = require(FIELD, absent).unwrap_err();
            assert!(
                matches!(err, ConfigError::MissingRequiredField { field } if field == FIELD)
            );
        }
    }

    #[test]
    fn test_network_id() {
        assert_eq!(network_id(FIELD, "1").unwrap(), 1);
        assert!(network_id(FIELD, "-1").is_err());
        assert!(network_id(FIELD, "mainnet").is_err());
    }
}
