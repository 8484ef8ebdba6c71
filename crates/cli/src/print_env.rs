// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use bridge_config::schema::bool_to_literal;
use bridge_config::{BridgeConfig, ChainKey, OutdatedNetworkModal, ReportForm};

fn chain_prefix(key: ChainKey) -> &'static str {
    match key {
        ChainKey::Ethereum => "BRIDGE_ETHEREUM",
        ChainKey::PolygonZkEvm => "BRIDGE_ZKEVM",
    }
}

pub fn extract_env_vars(config: &BridgeConfig) -> String {
    let mut env_vars = Vec::new();

    env_vars.push(format!("BRIDGE_API_URL={}", config.bridge_api_url()));
    env_vars.push(format!(
        "BRIDGE_ENABLE_DEPOSIT_WARNING={}",
        bool_to_literal(config.is_deposit_warning_enabled())
    ));
    env_vars.push(format!(
        "BRIDGE_ETHEREUM_FORCE_UPDATE_GLOBAL_EXIT_ROOT={}",
        bool_to_literal(config.force_update_global_exit_root())
    ));
    env_vars.push(format!(
        "BRIDGE_ETHEREUM_ROLLUP_MANAGER_ADDRESS={}",
        config.rollup_manager_address()
    ));
    env_vars.push(format!(
        "BRIDGE_ETHEREUM_PROOF_OF_EFFICIENCY_CONTRACT_ADDRESS={}",
        config.proof_of_efficiency_address()
    ));

    for chain in config.chains() {
        let prefix = chain_prefix(chain.key);
        env_vars.push(format!("{}_RPC_URL={}", prefix, chain.rpc_url));
        env_vars.push(format!("{}_EXPLORER_URL={}", prefix, chain.explorer_url));
        env_vars.push(format!(
            "{}_BRIDGE_CONTRACT_ADDRESS={}",
            prefix, chain.bridge_contract
        ));
        env_vars.push(format!("{}_WRAPPED_ADDRESS={}", prefix, chain.wrapped_token));
        env_vars.push(format!("{}_LOGO={}", prefix, chain.icon));
        if chain.key == ChainKey::PolygonZkEvm {
            env_vars.push(format!("{}_NETWORK_ID={}", prefix, chain.network_id));
        }
    }

    if let ReportForm::Enabled { url, entries } = config.report_form() {
        env_vars.push("BRIDGE_ENABLE_REPORT_FORM=true".to_string());
        env_vars.push(format!("BRIDGE_REPORT_FORM_URL={}", url));
        env_vars.push(format!("BRIDGE_REPORT_FORM_ERROR_ENTRY={}", entries.error));
        env_vars.push(format!(
            "BRIDGE_REPORT_FORM_PLATFORM_ENTRY={}",
            entries.platform
        ));
        env_vars.push(format!("BRIDGE_REPORT_FORM_URL_ENTRY={}", entries.url));
    }

    if let OutdatedNetworkModal::Enabled {
        title,
        message_paragraph_1,
        message_paragraph_2,
        url,
    } = config.outdated_network_modal()
    {
        env_vars.push("BRIDGE_ENABLE_OUTDATED_NETWORK_MODAL=true".to_string());
        if let Some(title) = title {
            env_vars.push(format!("BRIDGE_OUTDATED_NETWORK_MODAL_TITLE={}", title));
        }
        if let Some(p1) = message_paragraph_1 {
            env_vars.push(format!(
                "BRIDGE_OUTDATED_NETWORK_MODAL_MESSAGE_PARAGRAPH_1={}",
                p1
            ));
        }
        if let Some(p2) = message_paragraph_2 {
            env_vars.push(format!(
                "BRIDGE_OUTDATED_NETWORK_MODAL_MESSAGE_PARAGRAPH_2={}",
                p2
            ));
        }
        if let Some(url) = url {
            env_vars.push(format!("BRIDGE_OUTDATED_NETWORK_MODAL_URL={}", url));
        }
    }

    env_vars.join("\n")
}

pub async fn execute(config: &BridgeConfig) -> Result<()> {
    println!("{}", extract_env_vars(config));
    Ok(())
}
