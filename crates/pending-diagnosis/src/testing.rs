use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pending_conflux::math::{BigUint, Drip};
use pending_conflux::testing::MockConfluxNode;
use pending_conflux::types::{PendingSummary, PendingTransaction, TransactionStatus};
use pending_conflux::{Address, Error};

pub const MAINNET_ADDRESS: &str = "cfx:aajg4wt2mbmbb44sp6szd783ry0jtad5bea80xdy7p";
pub const TESTNET_ADDRESS: &str = "cfxtest:aajg4wt2mbmbb44sp6szd783ry0jtad5bemzfdf83g";
pub const PENDING_HASH: &str = "0x4f5b5bbf22a7bbf2cb2e3eed5e0ae56bf3bd3c4a3c4a9b5e2c0f1d8bd16a5d3e";

/// Number of reads received by [`CountingNode`]
pub static COUNTED_CALLS: AtomicUsize = AtomicUsize::new(0);

fn pending(status: TransactionStatus, nonces: &[u64]) -> PendingSummary {
    PendingSummary {
        pending_count: nonces.len() as u64,
        pending_transactions: nonces
            .iter()
            .map(|nonce| PendingTransaction {
                hash: PENDING_HASH.to_string(),
                nonce: *nonce,
            })
            .collect(),
        first_tx_status: Some(status),
    }
}

fn cfx(tenths: u64) -> Drip {
    BigUint::from(tenths) * BigUint::from(100_000_000_000_000_000u64)
}

/// Define a node answering every read with fixed values
macro_rules! mock_node {
    ($name: ident, summary = $summary: expr, nonce = $nonce: expr, balance = $balance: expr) => {
        #[derive(Debug)]
        pub struct $name;

        #[async_trait]
        impl MockConfluxNode for $name {
            fn new() -> Self {
                Self
            }

            async fn get_account_pending_transactions(&self, _address: &Address) -> Result<PendingSummary, Error> {
                $summary
            }

            async fn get_next_nonce(&self, _address: &Address) -> Result<u64, Error> {
                $nonce
            }

            async fn get_balance(&self, _address: &Address) -> Result<Drip, Error> {
                $balance
            }
        }
    };
}

mock_node!(NoPendingNode, summary = Ok(PendingSummary::empty()), nonce = Ok(3), balance = Ok(cfx(15)));

mock_node!(
    FutureNonceNode,
    summary = Ok(pending(TransactionStatus::PendingFutureNonce, &[7, 8])),
    nonce = Ok(5),
    balance = Ok(cfx(20))
);

mock_node!(
    NotEnoughCashNode,
    summary = Ok(pending(TransactionStatus::PendingNotEnoughCash, &[2])),
    nonce = Ok(2),
    balance = Ok(BigUint::from(0u8))
);

mock_node!(PackedNode, summary = Ok(pending(TransactionStatus::Packed, &[9])), nonce = Ok(9), balance = Ok(cfx(1)));

mock_node!(
    FailingBalanceNode,
    summary = Ok(PendingSummary::empty()),
    nonce = Ok(1),
    balance = Err(Error::Rpc("connection refused".to_string()))
);

mock_node!(
    UnclassifiedNode,
    summary = Err(Error::UnclassifiedStatus("{\"pending\":\"oldEpochHeight\"}".to_string())),
    nonce = Ok(1),
    balance = Ok(cfx(1))
);

/// Node recording every read it receives
#[derive(Debug)]
pub struct CountingNode;

#[async_trait]
impl MockConfluxNode for CountingNode {
    fn new() -> Self {
        Self
    }

    async fn get_account_pending_transactions(&self, _address: &Address) -> Result<PendingSummary, Error> {
        COUNTED_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(PendingSummary::empty())
    }

    async fn get_next_nonce(&self, _address: &Address) -> Result<u64, Error> {
        COUNTED_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }

    async fn get_balance(&self, _address: &Address) -> Result<Drip, Error> {
        COUNTED_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(BigUint::from(0u8))
    }
}
