// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::fmt;

use alloy_primitives::Address;
use async_trait::async_trait;
use url::Url;

use crate::env::{keys, RawEnv};
use crate::error::Result;
use crate::schema;

/// The L1 side of the bridge always uses network id 0; the L2 id comes
/// from its descriptor.
pub const ETHEREUM_NETWORK_ID: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainKey {
    Ethereum,
    PolygonZkEvm,
}

impl ChainKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainKey::Ethereum => "ethereum",
            ChainKey::PolygonZkEvm => "polygon-zkevm",
        }
    }
}

impl fmt::Display for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One network participating in the bridge. Constructed once by a
/// resolver and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub key: ChainKey,
    pub network_id: u32,
    pub name: String,
    pub icon: String,
    pub rpc_url: Url,
    pub bridge_contract: Address,
    pub explorer_url: Url,
    pub wrapped_token: Address,
}

/// Resolves the list of supported chains, independently of the
/// synchronous validation pipeline. The only contract the loader relies
/// on is "non-empty `Chain` sequence or failure".
#[async_trait]
pub trait ChainResolver: Send + Sync {
    async fn resolve(&self) -> Result<Vec<Chain>>;
}

/// The shipped resolver: builds the two-chain list from the per-chain
/// descriptor variables of its own environment snapshot.
pub struct EnvChainResolver {
    raw: RawEnv,
}

impl EnvChainResolver {
    pub fn new(raw: RawEnv) -> Self {
        Self { raw }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(RawEnv::from_env()?))
    }

    fn ethereum(&self) -> Result<Chain> {
        let raw = &self.raw;
        Ok(Chain {
            key: ChainKey::Ethereum,
            network_id: ETHEREUM_NETWORK_ID,
            name: "Ethereum".to_string(),
            icon: schema::require(keys::ETHEREUM_LOGO, raw.ethereum_logo.as_deref())?.to_string(),
            rpc_url: schema::required_url(keys::ETHEREUM_RPC_URL, raw.ethereum_rpc_url.as_deref())?,
            bridge_contract: schema::required_address(
                keys::ETHEREUM_BRIDGE_CONTRACT_ADDRESS,
                raw.ethereum_bridge_contract_address.as_deref(),
            )?,
            explorer_url: schema::required_url(
                keys::ETHEREUM_EXPLORER_URL,
                raw.ethereum_explorer_url.as_deref(),
            )?,
            wrapped_token: schema::required_address(
                keys::ETHEREUM_WRAPPED_ADDRESS,
                raw.ethereum_wrapped_address.as_deref(),
            )?,
        })
    }

    fn polygon_zkevm(&self) -> Result<Chain> {
        let raw = &self.raw;
        Ok(Chain {
            key: ChainKey::PolygonZkEvm,
            network_id: schema::network_id(
                keys::ZKEVM_NETWORK_ID,
                schema::require(keys::ZKEVM_NETWORK_ID, raw.zkevm_network_id.as_deref())?,
            )?,
            name: "Polygon zkEVM".to_string(),
            icon: schema::require(keys::ZKEVM_LOGO, raw.zkevm_logo.as_deref())?.to_string(),
            rpc_url: schema::required_url(keys::ZKEVM_RPC_URL, raw.zkevm_rpc_url.as_deref())?,
            bridge_contract: schema::required_address(
                keys::ZKEVM_BRIDGE_CONTRACT_ADDRESS,
                raw.zkevm_bridge_contract_address.as_deref(),
            )?,
            explorer_url: schema::required_url(
                keys::ZKEVM_EXPLORER_URL,
                raw.zkevm_explorer_url.as_deref(),
            )?,
            wrapped_token: schema::required_address(
                keys::ZKEVM_WRAPPED_ADDRESS,
                raw.zkevm_wrapped_address.as_deref(),
            )?,
        })
    }
}

#[async_trait]
impl ChainResolver for EnvChainResolver {
    async fn resolve(&self) -> Result<Vec<Chain>> {
        Ok(vec![self.ethereum()?, self.polygon_zkevm()?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn chain_descriptors() -> RawEnv {
        RawEnv {
            ethereum_rpc_url: Some("https://mainnet.example.com".to_string()),
            ethereum_explorer_url: Some("https://etherscan.example.com".to_string()),
            ethereum_logo: Some("ethereum.svg".to_string()),
            ethereum_bridge_contract_address: Some(
                "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0".to_string(),
            ),
            ethereum_wrapped_address: Some(
                "0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9".to_string(),
            ),
            zkevm_rpc_url: Some("https://zkevm-rpc.example.com".to_string()),
            zkevm_explorer_url: Some("https://zkevm-scan.example.com".to_string()),
            zkevm_logo: Some("polygon-zkevm.svg".to_string()),
            zkevm_bridge_contract_address: Some(
                "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9".to_string(),
            ),
            zkevm_wrapped_address: Some(
                "0x1234567890123456789012345678901234567890".to_string(),
            ),
            zkevm_network_id: Some("1".to_string()),
            ..RawEnv::default()
        }
    }

    #[tokio::test]
    async fn test_resolves_both_chains() {
        let resolver = EnvChainResolver::new(chain_descriptors());
        let chains = resolver.resolve().await.unwrap();

        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].key, ChainKey::Ethereum);
        assert_eq!(chains[0].network_id, ETHEREUM_NETWORK_ID);
        assert_eq!(chains[1].key, ChainKey::PolygonZkEvm);
        assert_eq!(chains[1].network_id, 1);
        assert_eq!(chains[1].key.to_string(), "polygon-zkevm");
    }

    #[tokio::test]
    async fn test_short_bridge_address_is_a_shape_violation() {
        let mut raw = chain_descriptors();
        // 41 characters instead of 42
        raw.zkevm_bridge_contract_address =
            Some("0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc".to_string());

        let err = EnvChainResolver::new(raw).resolve().await.unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ShapeViolation {
                field: keys::ZKEVM_BRIDGE_CONTRACT_ADDRESS,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_network_id_must_be_an_integer() {
        let mut raw = chain_descriptors();
        raw.zkevm_network_id = Some("testnet".to_string());

        let err = EnvChainResolver::new(raw).resolve().await.unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ShapeViolation {
                field: keys::ZKEVM_NETWORK_ID,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_descriptor_is_named() {
        let mut raw = chain_descriptors();
        raw.ethereum_rpc_url = None;

        let err = EnvChainResolver::new(raw).resolve().await.unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequiredField {
                field: keys::ETHEREUM_RPC_URL,
            }
        ));
    }
}
