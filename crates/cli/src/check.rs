// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use bridge_config::{BridgeConfig, FiatExchangeRates, OutdatedNetworkModal, ReportForm};

pub async fn execute(config: &BridgeConfig) -> Result<()> {
    println!("bridge api: {}", config.bridge_api_url());

    for chain in config.chains() {
        println!(
            "chain {} (network id {}): rpc {} bridge {}",
            chain.key, chain.network_id, chain.rpc_url, chain.bridge_contract
        );
    }

    println!(
        "deposit warning: {}",
        if config.is_deposit_warning_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!(
        "force update global exit root (L1): {}",
        config.force_update_global_exit_root()
    );

    match config.report_form() {
        ReportForm::Disabled => println!("report form: disabled"),
        ReportForm::Enabled { url, .. } => println!("report form: enabled ({})", url),
    }

    match config.outdated_network_modal() {
        OutdatedNetworkModal::Disabled => println!("outdated network modal: disabled"),
        OutdatedNetworkModal::Enabled { title, .. } => println!(
            "outdated network modal: enabled ({})",
            title.as_deref().unwrap_or("untitled")
        ),
    }

    match config.fiat_exchange_rates() {
        FiatExchangeRates::Disabled => println!("fiat exchange rates: disabled"),
    }

    println!("configuration OK");
    Ok(())
}
