use pending_conflux::{Address, Client as ConfluxClient, Configuration as ConfluxConfiguration, Network, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub mod diagnosis;

mod error;
mod session;

pub use diagnosis::{diagnose, DiagnosisResult, FirstPendingTransaction, HashLink, PendingCategory};
pub use error::Error;
pub use session::Session;

#[cfg(test)]
mod testing;

/// Endpoints used by the diagnosis client, one per network
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Configuration {
    pub mainnet: ConfluxConfiguration,
    pub testnet: ConfluxConfiguration,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }
}

impl Configuration {
    /// Public endpoints of both networks with the given request timeout in seconds
    pub fn with_timeout(timeout: u64) -> Self {
        Self {
            mainnet: ConfluxConfiguration::for_network(Network::Mainnet, timeout),
            testnet: ConfluxConfiguration::for_network(Network::Testnet, timeout),
        }
    }
}

/// Diagnosis client routing each address to the node of its network
#[derive(Clone)]
pub struct DiagnosisClient {
    mainnet: ConfluxClient,
    testnet: ConfluxClient,
}

impl DiagnosisClient {
    pub fn new(configuration: &Configuration) -> Result<Self, Error> {
        Ok(Self {
            mainnet: ConfluxClient::new(&configuration.mainnet)?,
            testnet: ConfluxClient::new(&configuration.testnet)?,
        })
    }

    pub fn with_clients(mainnet: ConfluxClient, testnet: ConfluxClient) -> Self {
        Self { mainnet, testnet }
    }

    /// Client bound to the network `address` belongs to
    pub fn client_for(&self, address: &Address) -> &ConfluxClient {
        match Network::select(address) {
            Network::Mainnet => &self.mainnet,
            Network::Testnet => &self.testnet,
        }
    }

    /// Validate user input as a base32 address. Surrounding whitespace is ignored.
    pub fn validate(input: &str) -> Result<Address, Error> {
        Ok(Address::parse(input.trim())?)
    }

    /// Validate `input` then diagnose it. No request is sent when the input is not a valid address.
    #[instrument(name = "check", skip(self))]
    pub async fn check(&self, input: &str) -> Result<DiagnosisResult, Error> {
        let address = Self::validate(input)?;

        self.diagnose(&address).await
    }

    pub async fn diagnose(&self, address: &Address) -> Result<DiagnosisResult, Error> {
        diagnose(self.client_for(address), address).await
    }
}
