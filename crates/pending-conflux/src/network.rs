use serde::{Deserialize, Serialize};

use crate::address::TESTNET_PREFIX;
use crate::Address;

pub const MAINNET_RPC_ENDPOINT: &str = "https://main.confluxrpc.com";
pub const TESTNET_RPC_ENDPOINT: &str = "https://test.confluxrpc.com";

pub const MAINNET_NETWORK_ID: u64 = 1029;
pub const TESTNET_NETWORK_ID: u64 = 1;

const MAINNET_EXPLORER: &str = "https://confluxscan.io";
const TESTNET_EXPLORER: &str = "https://testnet.confluxscan.io";

/// RPC endpoint along with the network id it serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkEndpoint {
    pub url: &'static str,
    pub network_id: u64,
}

/// Represent the Conflux network which is either Mainnet or Testnet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Select the network an address belongs to. Only the `cfxtest` prefix, compared
    /// case-insensitively, selects the testnet; every other prefix selects the mainnet.
    pub fn select(address: &Address) -> Self {
        if address.prefix().eq_ignore_ascii_case(TESTNET_PREFIX) {
            Self::Testnet
        } else {
            Self::Mainnet
        }
    }

    pub fn network_id(&self) -> u64 {
        match self {
            Self::Mainnet => MAINNET_NETWORK_ID,
            Self::Testnet => TESTNET_NETWORK_ID,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }

    pub fn endpoint(&self) -> NetworkEndpoint {
        match self {
            Self::Mainnet => NetworkEndpoint {
                url: MAINNET_RPC_ENDPOINT,
                network_id: MAINNET_NETWORK_ID,
            },
            Self::Testnet => NetworkEndpoint {
                url: TESTNET_RPC_ENDPOINT,
                network_id: TESTNET_NETWORK_ID,
            },
        }
    }

    /// Link to the transaction page on the ConfluxScan instance of this network
    pub fn transaction_url(&self, hash: &str) -> String {
        let explorer = match self {
            Self::Mainnet => MAINNET_EXPLORER,
            Self::Testnet => TESTNET_EXPLORER,
        };

        format!("{}/transaction/{}", explorer, hash)
    }
}

/// Select the endpoint serving the network `address` belongs to
pub fn select_endpoint(address: &Address) -> NetworkEndpoint {
    Network::select(address).endpoint()
}
