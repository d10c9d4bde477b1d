use clap::Args;
use pending_common::concurrency::ConcurrentExecutor;
use pending_common::task;
use pending_conflux::types::NodeStatus;
use pending_conflux::{Client, Configuration, Network};
use tracing::info;

use crate::constants::DEFAULT_RPC_TIMEOUT;
use crate::core::Error;
use crate::validation::validate_timeout;

#[derive(Args, Clone)]
pub struct EndpointsCommandParameters {
    /// RPC request timeout in seconds
    #[clap(long, default_value_t = DEFAULT_RPC_TIMEOUT)]
    pub timeout: u64,
}

fn render_endpoint(network: Network, result: &Result<NodeStatus, pending_conflux::Error>) -> String {
    let endpoint = network.endpoint();
    let outcome = match result {
        Ok(status) => format!("ok, network id {}, epoch {}", status.network_id, status.epoch_number),
        Err(e) => format!("failed, {}", e),
    };

    format!("{:<8} {:<30} {}", network.as_str(), endpoint.url, outcome)
}

pub async fn command_endpoints(params: EndpointsCommandParameters) -> Result<(), Error> {
    validate_timeout(params.timeout)?;
    info!("🌐 Checking public endpoints");

    let networks = [Network::Mainnet, Network::Testnet];
    let mut executor: ConcurrentExecutor<u64, Result<NodeStatus, pending_conflux::Error>> = ConcurrentExecutor::new(params.timeout, networks.len());
    for network in networks {
        executor.register(task!(|timeout| {
            let client = Client::new(&Configuration::for_network(network, timeout))?;
            client.verify_network().await
        }));
    }

    let results = executor.execute().await?;
    for (network, result) in networks.iter().zip(results.iter()) {
        println!("{}", render_endpoint(*network, result));
    }

    if results.iter().any(|result| result.is_err()) {
        return Err(Error::Execution("some endpoints are not available".to_string()));
    }

    Ok(())
}
