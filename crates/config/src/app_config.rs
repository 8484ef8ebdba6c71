// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy_primitives::Address;
use tracing::info;
use url::Url;

use crate::chain::{Chain, ChainKey, ChainResolver, EnvChainResolver};
use crate::env::{keys, RawEnv};
use crate::error::{ConfigError, Result};
use crate::schema;
use crate::section::{self, FiatExchangeRates, OutdatedNetworkModal, ReportForm};

/// The configuration actually used throughout the app.
///
/// Constructed exactly once at startup by [`load_config`], immutable
/// afterward and shared read-only by every consumer. The `chains`
/// sequence is never empty.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    bridge_api_url: Url,
    chains: Vec<Chain>,
    is_deposit_warning_enabled: bool,
    force_update_global_exit_root: bool,
    rollup_manager_address: Address,
    proof_of_efficiency_address: Address,
    report_form: ReportForm,
    outdated_network_modal: OutdatedNetworkModal,
    fiat_exchange_rates: FiatExchangeRates,
}

impl BridgeConfig {
    /// Base URL of the bridge API
    pub fn bridge_api_url(&self) -> &Url {
        &self.bridge_api_url
    }

    /// The resolved chains, in order. Guaranteed non-empty.
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Look up a chain by its key
    pub fn chain(&self, key: ChainKey) -> Option<&Chain> {
        self.chains.iter().find(|c| c.key == key)
    }

    pub fn is_deposit_warning_enabled(&self) -> bool {
        self.is_deposit_warning_enabled
    }

    /// Whether L1 deposits force an update of the global exit root
    pub fn force_update_global_exit_root(&self) -> bool {
        self.force_update_global_exit_root
    }

    /// The L1 rollup manager contract
    pub fn rollup_manager_address(&self) -> Address {
        self.rollup_manager_address
    }

    /// The L1 proof-of-efficiency contract
    pub fn proof_of_efficiency_address(&self) -> Address {
        self.proof_of_efficiency_address
    }

    pub fn report_form(&self) -> &ReportForm {
        &self.report_form
    }

    pub fn outdated_network_modal(&self) -> &OutdatedNetworkModal {
        &self.outdated_network_modal
    }

    pub fn fiat_exchange_rates(&self) -> &FiatExchangeRates {
        &self.fiat_exchange_rates
    }
}

/// Everything derivable from the snapshot without suspending.
struct SyncFields {
    bridge_api_url: Url,
    is_deposit_warning_enabled: bool,
    force_update_global_exit_root: bool,
    rollup_manager_address: Address,
    proof_of_efficiency_address: Address,
    report_form: ReportForm,
    outdated_network_modal: OutdatedNetworkModal,
    fiat_exchange_rates: FiatExchangeRates,
}

/// Synchronous phase: shape validation plus flag/section derivation,
/// failing fast on the first violation.
fn validate(raw: &RawEnv) -> Result<SyncFields> {
    Ok(SyncFields {
        bridge_api_url: schema::required_url(keys::API_URL, raw.api_url.as_deref())?,
        is_deposit_warning_enabled: schema::required_bool(
            keys::ENABLE_DEPOSIT_WARNING,
            raw.enable_deposit_warning.as_deref(),
        )?,
        force_update_global_exit_root: schema::required_bool(
            keys::ETHEREUM_FORCE_UPDATE_GLOBAL_EXIT_ROOT,
            raw.ethereum_force_update_global_exit_root.as_deref(),
        )?,
        rollup_manager_address: schema::required_address(
            keys::ETHEREUM_ROLLUP_MANAGER_ADDRESS,
            raw.ethereum_rollup_manager_address.as_deref(),
        )?,
        proof_of_efficiency_address: schema::required_address(
            keys::ETHEREUM_PROOF_OF_EFFICIENCY_CONTRACT_ADDRESS,
            raw.ethereum_proof_of_efficiency_contract_address.as_deref(),
        )?,
        report_form: section::report_form(raw)?,
        outdated_network_modal: section::outdated_network_modal(raw)?,
        fiat_exchange_rates: section::fiat_exchange_rates(raw)?,
    })
}

/// Assemble the configuration from a snapshot and a chain resolver.
///
/// All-or-nothing: the synchronous phase runs first, then the resolver
/// is awaited (the load's only suspension point), and either half
/// failing rejects the whole load with a single terminal error.
pub async fn load_config<R>(raw: &RawEnv, resolver: &R) -> Result<BridgeConfig>
where
    R: ChainResolver + ?Sized,
{
    let fields = validate(raw)?;

    let chains = resolver.resolve().await?;
    if chains.is_empty() {
        return Err(ConfigError::EmptyChainSet);
    }

    info!(chains = chains.len(), "bridge configuration loaded");

    Ok(BridgeConfig {
        bridge_api_url: fields.bridge_api_url,
        chains,
        is_deposit_warning_enabled: fields.is_deposit_warning_enabled,
        force_update_global_exit_root: fields.force_update_global_exit_root,
        rollup_manager_address: fields.rollup_manager_address,
        proof_of_efficiency_address: fields.proof_of_efficiency_address,
        report_form: fields.report_form,
        outdated_network_modal: fields.outdated_network_modal,
        fiat_exchange_rates: fields.fiat_exchange_rates,
    })
}

/// One-shot startup entry point: snapshot the process environment and
/// resolve chains from the same snapshot.
pub async fn load_from_env() -> Result<BridgeConfig> {
    let raw = RawEnv::from_env()?;
    let resolver = EnvChainResolver::new(raw.clone());
    load_config(&raw, &resolver).await
}
