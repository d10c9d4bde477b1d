use jsonrpsee::core::ClientError;
use pending_common::{log_if_error, measure_duration, record_duration};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

pub mod address;
pub mod math;
pub mod types;
pub mod values;

mod network;
pub use address::{Address, AddressType};
pub use network::{select_endpoint, Network, NetworkEndpoint, MAINNET_RPC_ENDPOINT, TESTNET_RPC_ENDPOINT};
pub use tracing;

mod client;
use client::RpcClient;

#[cfg(feature = "testing")]
pub mod testing;

use crate::math::Drip;
use crate::types::{NodeStatus, PendingSummary};

pub const DEFAULT_TIMEOUT: u64 = 10;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid address {0}")]
    InvalidAddress(String),

    #[error("rpc error {0}")]
    Rpc(String),

    #[error("node error {code}: {message}")]
    Node { code: i32, message: String },

    #[error("malformed response {0}")]
    MalformedResponse(String),

    #[error("unclassified transaction status {0}")]
    UnclassifiedStatus(String),

    #[error("endpoint answers for network {actual}, expected {expected}")]
    NetworkMismatch { expected: u64, actual: u64 },

    #[error("internal error {0}")]
    Internal(String),
}

impl From<ClientError> for Error {
    fn from(value: ClientError) -> Self {
        match value {
            ClientError::Call(e) => Error::Node {
                code: e.code(),
                message: e.message().to_string(),
            },
            ClientError::ParseError(e) => Error::MalformedResponse(e.to_string()),
            ClientError::RequestTimeout => Error::Rpc("request timeout".to_string()),
            e => Error::Rpc(e.to_string()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Configuration {
    pub network: Network,
    pub endpoint: String,
    pub timeout: u64,
}

impl Configuration {
    /// Configuration pointing to the public endpoint of the given network
    pub fn for_network(network: Network, timeout: u64) -> Self {
        Self {
            network,
            endpoint: network.endpoint().url.to_string(),
            timeout,
        }
    }
}

#[derive(Clone)]
enum Backend {
    Rpc(RpcClient),

    #[cfg(feature = "testing")]
    Mock(std::sync::Arc<dyn testing::MockConfluxNode>),
}

/// Read-only Conflux client bound to a single network
#[derive(Clone)]
pub struct Client {
    network: Network,

    backend: Backend,
}

impl Client {
    pub fn new(configuration: &Configuration) -> Result<Self, Error> {
        Ok(Self {
            network: configuration.network,
            backend: Backend::Rpc(RpcClient::new(&configuration.endpoint, configuration.timeout)?),
        })
    }

    #[cfg(feature = "testing")]
    pub fn mock<I: 'static + testing::MockConfluxNode>(network: Network) -> Self {
        Self {
            network,
            backend: Backend::Mock(std::sync::Arc::new(I::new())),
        }
    }

    /// Returns the network on which this client is bound
    pub fn network(&self) -> Network {
        self.network
    }

    /// Fetch the pending transactions of `address`, as seen by the node transaction pool
    #[instrument(name = "fetch_pending_summary", skip(self, address), fields(address = %address))]
    pub async fn fetch_pending_summary(&self, address: &Address) -> Result<PendingSummary, Error> {
        let (result, duration) = measure_duration!(log_if_error!(match &self.backend {
            Backend::Rpc(client) => client.fetch_pending_summary(address).await,

            #[cfg(feature = "testing")]
            Backend::Mock(node) => node.get_account_pending_transactions(address).await,
        }));
        record_duration!("cfx_getAccountPendingTransactions", duration);

        result
    }

    /// Fetch the next nonce the node expects from `address`
    #[instrument(name = "fetch_next_nonce", skip(self, address), fields(address = %address))]
    pub async fn fetch_next_nonce(&self, address: &Address) -> Result<u64, Error> {
        let (result, duration) = measure_duration!(log_if_error!(match &self.backend {
            Backend::Rpc(client) => client.fetch_next_nonce(address).await,

            #[cfg(feature = "testing")]
            Backend::Mock(node) => node.get_next_nonce(address).await,
        }));
        record_duration!("cfx_getNextNonce", duration);

        result
    }

    /// Fetch the balance of `address`. Balance is given in drip
    #[instrument(name = "fetch_balance", skip(self, address), fields(address = %address))]
    pub async fn fetch_balance(&self, address: &Address) -> Result<Drip, Error> {
        let (result, duration) = measure_duration!(log_if_error!(match &self.backend {
            Backend::Rpc(client) => client.fetch_balance(address).await,

            #[cfg(feature = "testing")]
            Backend::Mock(node) => node.get_balance(address).await,
        }));
        record_duration!("cfx_getBalance", duration);

        result
    }

    /// Fetch the status of the node behind the endpoint
    #[instrument(name = "fetch_status", skip(self))]
    pub async fn fetch_status(&self) -> Result<NodeStatus, Error> {
        let (result, duration) = measure_duration!(log_if_error!(match &self.backend {
            Backend::Rpc(client) => client.fetch_status().await,

            #[cfg(feature = "testing")]
            Backend::Mock(node) => node.get_status().await,
        }));
        record_duration!("cfx_getStatus", duration);

        result
    }

    /// Check that the endpoint answers for the network this client is bound to
    pub async fn verify_network(&self) -> Result<NodeStatus, Error> {
        let status = self.fetch_status().await?;
        let expected = self.network.network_id();
        if status.network_id != expected {
            return Err(Error::NetworkMismatch {
                expected,
                actual: status.network_id,
            });
        }

        Ok(status)
    }
}
