// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::fmt;

use figment::{providers::Env, Figment};
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::Result;
use crate::schema::bool_to_literal;

pub const ENV_PREFIX: &str = "BRIDGE_";

/// Full environment-variable names as reported in errors and logs.
pub mod keys {
    pub const API_URL: &str = "BRIDGE_API_URL";
    pub const ENABLE_DEPOSIT_WARNING: &str = "BRIDGE_ENABLE_DEPOSIT_WARNING";
    pub const ENABLE_FIAT_EXCHANGE_RATES: &str = "BRIDGE_ENABLE_FIAT_EXCHANGE_RATES";
    pub const ENABLE_OUTDATED_NETWORK_MODAL: &str = "BRIDGE_ENABLE_OUTDATED_NETWORK_MODAL";
    pub const ENABLE_REPORT_FORM: &str = "BRIDGE_ENABLE_REPORT_FORM";
    pub const ETHEREUM_RPC_URL: &str = "BRIDGE_ETHEREUM_RPC_URL";
    pub const ETHEREUM_EXPLORER_URL: &str = "BRIDGE_ETHEREUM_EXPLORER_URL";
    pub const ETHEREUM_LOGO: &str = "BRIDGE_ETHEREUM_LOGO";
    pub const ETHEREUM_BRIDGE_CONTRACT_ADDRESS: &str = "BRIDGE_ETHEREUM_BRIDGE_CONTRACT_ADDRESS";
    pub const ETHEREUM_ROLLUP_MANAGER_ADDRESS: &str = "BRIDGE_ETHEREUM_ROLLUP_MANAGER_ADDRESS";
    pub const ETHEREUM_PROOF_OF_EFFICIENCY_CONTRACT_ADDRESS: &str =
        "BRIDGE_ETHEREUM_PROOF_OF_EFFICIENCY_CONTRACT_ADDRESS";
    pub const ETHEREUM_WRAPPED_ADDRESS: &str = "BRIDGE_ETHEREUM_WRAPPED_ADDRESS";
    pub const ETHEREUM_FORCE_UPDATE_GLOBAL_EXIT_ROOT: &str =
        "BRIDGE_ETHEREUM_FORCE_UPDATE_GLOBAL_EXIT_ROOT";
    pub const ZKEVM_RPC_URL: &str = "BRIDGE_ZKEVM_RPC_URL";
    pub const ZKEVM_EXPLORER_URL: &str = "BRIDGE_ZKEVM_EXPLORER_URL";
    pub const ZKEVM_LOGO: &str = "BRIDGE_ZKEVM_LOGO";
    pub const ZKEVM_BRIDGE_CONTRACT_ADDRESS: &str = "BRIDGE_ZKEVM_BRIDGE_CONTRACT_ADDRESS";
    pub const ZKEVM_WRAPPED_ADDRESS: &str = "BRIDGE_ZKEVM_WRAPPED_ADDRESS";
    pub const ZKEVM_NETWORK_ID: &str = "BRIDGE_ZKEVM_NETWORK_ID";
    pub const REPORT_FORM_URL: &str = "BRIDGE_REPORT_FORM_URL";
    pub const REPORT_FORM_ERROR_ENTRY: &str = "BRIDGE_REPORT_FORM_ERROR_ENTRY";
    pub const REPORT_FORM_PLATFORM_ENTRY: &str = "BRIDGE_REPORT_FORM_PLATFORM_ENTRY";
    pub const REPORT_FORM_URL_ENTRY: &str = "BRIDGE_REPORT_FORM_URL_ENTRY";
    pub const OUTDATED_NETWORK_MODAL_TITLE: &str = "BRIDGE_OUTDATED_NETWORK_MODAL_TITLE";
    pub const OUTDATED_NETWORK_MODAL_MESSAGE_PARAGRAPH_1: &str =
        "BRIDGE_OUTDATED_NETWORK_MODAL_MESSAGE_PARAGRAPH_1";
    pub const OUTDATED_NETWORK_MODAL_MESSAGE_PARAGRAPH_2: &str =
        "BRIDGE_OUTDATED_NETWORK_MODAL_MESSAGE_PARAGRAPH_2";
    pub const OUTDATED_NETWORK_MODAL_URL: &str = "BRIDGE_OUTDATED_NETWORK_MODAL_URL";
    pub const FIAT_EXCHANGE_RATES_API_URL: &str = "BRIDGE_FIAT_EXCHANGE_RATES_API_URL";
    pub const FIAT_EXCHANGE_RATES_API_KEY: &str = "BRIDGE_FIAT_EXCHANGE_RATES_API_KEY";
    pub const FIAT_EXCHANGE_RATES_ETHEREUM_USDC_ADDRESS: &str =
        "BRIDGE_FIAT_EXCHANGE_RATES_ETHEREUM_USDC_ADDRESS";
}

/// Keep environment values as their literal text.
///
/// figment's provider type-infers values, turning `true` into a bool
/// and `1101` into a number before they reach the snapshot. The strict
/// validators need the original string back, so inferred scalars are
/// rendered to the exact literal they were written as.
fn raw_literal<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RawLiteral;

    impl<'de> de::Visitor<'de> for RawLiteral {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an environment variable value")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Self::Value, E> {
            Ok(Some(bool_to_literal(v).to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> std::result::Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(RawLiteral)
        }
    }

    deserializer.deserialize_any(RawLiteral)
}

/// A frozen snapshot of the `BRIDGE_*` process environment.
///
/// Values are captured as raw strings exactly once; all typing and
/// cross-field checks happen in the validators so that every failure
/// can name the offending variable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEnv {
    #[serde(default, deserialize_with = "raw_literal")]
    pub api_url: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub enable_deposit_warning: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub enable_fiat_exchange_rates: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub enable_outdated_network_modal: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub enable_report_form: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub ethereum_rpc_url: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub ethereum_explorer_url: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub ethereum_logo: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub ethereum_bridge_contract_address: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub ethereum_rollup_manager_address: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub ethereum_proof_of_efficiency_contract_address: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub ethereum_wrapped_address: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub ethereum_force_update_global_exit_root: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub zkevm_rpc_url: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub zkevm_explorer_url: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub zkevm_logo: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub zkevm_bridge_contract_address: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub zkevm_wrapped_address: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub zkevm_network_id: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub report_form_url: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub report_form_error_entry: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub report_form_platform_entry: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub report_form_url_entry: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub outdated_network_modal_title: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub outdated_network_modal_message_paragraph_1: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub outdated_network_modal_message_paragraph_2: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub outdated_network_modal_url: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub fiat_exchange_rates_api_url: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub fiat_exchange_rates_api_key: Option<String>,
    #[serde(default, deserialize_with = "raw_literal")]
    pub fiat_exchange_rates_ethereum_usdc_address: Option<String>,
}

impl RawEnv {
    /// Read the process environment once. This is the only place the
    /// environment is consulted; everything downstream works on the
    /// returned snapshot.
    pub fn from_env() -> Result<Self> {
        Ok(Figment::new()
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_snapshot_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("BRIDGE_API_URL", "https://bridge-api.example.com");
            jail.set_env("BRIDGE_ZKEVM_NETWORK_ID", "1");
            jail.set_env(
                "BRIDGE_OUTDATED_NETWORK_MODAL_MESSAGE_PARAGRAPH_1",
                "Please update your network",
            );

            let raw = RawEnv::from_env().map_err(|e| e.to_string())?;

            assert_eq!(
                raw.api_url.as_deref(),
                Some("https://bridge-api.example.com")
            );
            assert_eq!(raw.zkevm_network_id.as_deref(), Some("1"));
            assert_eq!(
                raw.outdated_network_modal_message_paragraph_1.as_deref(),
                Some("Please update your network")
            );
            assert_eq!(raw.enable_report_form, None);

            Ok(())
        });
    }

    #[test]
    fn test_typed_looking_values_stay_literal() {
        // Flag and network-id values are exactly the inputs the
        // provider would otherwise infer as bool and number; the
        // snapshot must hand them to the validators unchanged.
        Jail::expect_with(|jail| {
            jail.set_env("BRIDGE_ENABLE_DEPOSIT_WARNING", "true");
            jail.set_env("BRIDGE_ENABLE_REPORT_FORM", "false");
            jail.set_env("BRIDGE_ZKEVM_NETWORK_ID", "1101");

            let raw = RawEnv::from_env().map_err(|e| e.to_string())?;

            assert_eq!(raw.enable_deposit_warning.as_deref(), Some("true"));
            assert_eq!(raw.enable_report_form.as_deref(), Some("false"));
            assert_eq!(raw.zkevm_network_id.as_deref(), Some("1101"));

            Ok(())
        });
    }
}
