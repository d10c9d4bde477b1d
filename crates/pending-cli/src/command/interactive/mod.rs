use clap::Args;
use pending_diagnosis::Session;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::command::check::utils::{render_failure, render_result};
use crate::command::diagnosis_client;
use crate::constants::{DEFAULT_RPC_TIMEOUT, INVALID_ADDRESS_MESSAGE};
use crate::core::Error;
use crate::validation::validate_timeout;

#[derive(Args, Clone)]
pub struct InteractiveCommandParameters {
    /// RPC request timeout in seconds
    #[clap(long, default_value_t = DEFAULT_RPC_TIMEOUT)]
    pub timeout: u64,
}

/// What to do with a line read from stdin
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Skip,
    Exit,
    Address(&'a str),
}

fn read_input(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Skip,
        "exit" | "quit" => Input::Exit,
        address => Input::Address(address),
    }
}

pub async fn command_interactive(params: InteractiveCommandParameters) -> Result<(), Error> {
    validate_timeout(params.timeout)?;

    let mut session = Session::new(diagnosis_client(params.timeout)?);
    info!("Enter one account address per line, `exit` to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(|e| Error::Execution(e.to_string()))? {
        let address = match read_input(&line) {
            Input::Skip => continue,
            Input::Exit => break,
            Input::Address(address) => address,
        };

        match session.check(address).await {
            Ok(result) => println!("{}", render_result(result)),
            Err(pending_diagnosis::Error::InvalidAddressFormat(_)) => println!("{}", INVALID_ADDRESS_MESSAGE),
            Err(e) => println!("{}", render_failure(address, &e)),
        }
    }

    Ok(())
}
