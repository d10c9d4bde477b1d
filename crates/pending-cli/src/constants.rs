// Core configuration defaults
pub const DEFAULT_VERBOSITY: &str = "info";

// RPC configuration defaults
pub const DEFAULT_RPC_TIMEOUT: u64 = 10;
pub const MAX_RPC_TIMEOUT: u64 = 120;

// Number of accounts checked at the same time by the check command
pub const DEFAULT_CONCURRENT_CHECKS: usize = 4;

pub const INVALID_ADDRESS_MESSAGE: &str = "Please input a valid base32 address";

// Conflux documentation
pub const TRANSACTION_EXPLAIN_URL: &str = "https://developer.confluxnetwork.org/sending-tx/en/transaction_explain";
pub const TRANSACTION_STAGE_URL: &str = "https://developer.confluxnetwork.org/sending-tx/en/transaction_stage";
pub const WHY_TX_IS_PENDING_URL: &str = "https://developer.confluxnetwork.org/sending-tx/en/why_tx_is_pending";
