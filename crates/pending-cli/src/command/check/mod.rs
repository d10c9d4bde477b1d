use clap::Args;
use pending_common::concurrency::ConcurrentExecutor;
use pending_common::task;
use pending_diagnosis::DiagnosisResult;
use tracing::info;

use crate::command::check::utils::{render_failure, render_result, CheckReport};
use crate::command::diagnosis_client;
use crate::constants::{DEFAULT_CONCURRENT_CHECKS, DEFAULT_RPC_TIMEOUT};
use crate::core::Error;
use crate::validation::{validate_addresses, validate_timeout};

pub mod utils;

#[derive(Args, Clone)]
pub struct CheckCommandParameters {
    /// Base32 addresses of the accounts to check
    #[clap(required = true)]
    pub addresses: Vec<String>,

    /// RPC request timeout in seconds
    #[clap(long, default_value_t = DEFAULT_RPC_TIMEOUT)]
    pub timeout: u64,

    /// Print the results as JSON
    #[clap(long)]
    pub json: bool,
}

pub async fn command_check(params: CheckCommandParameters) -> Result<(), Error> {
    // Every address is validated before the first request is sent
    validate_timeout(params.timeout)?;
    let addresses = validate_addresses(&params.addresses)?;

    let client = diagnosis_client(params.timeout)?;
    info!("🔎 Checking {} account(s)", addresses.len());

    let mut executor = ConcurrentExecutor::new(client, DEFAULT_CONCURRENT_CHECKS.min(addresses.len()));
    for address in addresses.iter().cloned() {
        executor.register(task!(|client| { client.diagnose(&address).await }));
    }

    let results: Vec<Result<DiagnosisResult, pending_diagnosis::Error>> = executor.execute().await?;

    if params.json {
        let reports: Vec<CheckReport> = addresses
            .iter()
            .zip(results.iter())
            .map(|(address, result)| match result {
                Ok(diagnosis) => CheckReport::Diagnosis(diagnosis),
                Err(e) => CheckReport::Failure {
                    address: address.to_string(),
                    error: e.to_string(),
                },
            })
            .collect();

        let output = serde_json::to_string_pretty(&reports).map_err(|e| Error::Execution(e.to_string()))?;
        println!("{}", output);
    } else {
        for (address, result) in addresses.iter().zip(results.iter()) {
            match result {
                Ok(diagnosis) => println!("{}", render_result(diagnosis)),
                Err(e) => println!("{}", render_failure(&address.to_string(), e)),
            }
        }
    }

    let failures = results.iter().filter(|result| result.is_err()).count();
    if failures > 0 {
        return Err(Error::Execution(format!("{} of {} checks failed", failures, results.len())));
    }

    Ok(())
}
