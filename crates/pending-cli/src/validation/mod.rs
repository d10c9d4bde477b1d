use pending_conflux::Address;

use crate::constants::{INVALID_ADDRESS_MESSAGE, MAX_RPC_TIMEOUT};
use crate::core::Error;

/// Parse every input as a base32 address. Fails listing all the invalid inputs if any.
pub fn validate_addresses(inputs: &[String]) -> Result<Vec<Address>, Error> {
    let mut addresses = Vec::with_capacity(inputs.len());
    let mut invalid = vec![];
    for input in inputs {
        match Address::parse(input.trim()) {
            Ok(address) => addresses.push(address),
            Err(_) => invalid.push(input.as_str()),
        }
    }

    if !invalid.is_empty() {
        return Err(Error::Validation(format!("{}: {}", INVALID_ADDRESS_MESSAGE, invalid.join(", "))));
    }

    Ok(addresses)
}

pub fn validate_timeout(timeout: u64) -> Result<(), Error> {
    if timeout == 0 || timeout > MAX_RPC_TIMEOUT {
        return Err(Error::Validation(format!(
            "RPC timeout must be between 1 and {} seconds, got {}",
            MAX_RPC_TIMEOUT, timeout
        )));
    }

    Ok(())
}
