use pending_conflux::types::TransactionStatus;
use serde::Serialize;

/// Reason why the transactions of an account are pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PendingCategory {
    /// The lowest pending nonce is ahead of the next nonce of the account
    FutureNonce,

    /// The account cannot pay for value and gas of its first pending transaction
    NotEnoughCash,

    /// Packed in a block, waiting for execution
    Packed,

    /// Ready for a miner to pack
    Ready,

    /// No transaction of the account is waiting in the pool
    NoPending,
}

impl PendingCategory {
    pub const ALL: [PendingCategory; 5] = [Self::FutureNonce, Self::NotEnoughCash, Self::Packed, Self::Ready, Self::NoPending];

    /// Classify the status of the lowest nonce pending transaction
    pub fn classify(status: Option<&TransactionStatus>) -> Self {
        match status {
            None => Self::NoPending,
            Some(TransactionStatus::PendingNotEnoughCash) => Self::NotEnoughCash,
            Some(TransactionStatus::PendingFutureNonce) => Self::FutureNonce,
            Some(TransactionStatus::Packed) => Self::Packed,
            Some(TransactionStatus::Ready) => Self::Ready,
        }
    }

    /// What the account owner should do to unblock the transaction, if anything
    pub fn remedy(&self) -> Option<&'static str> {
        match self {
            Self::FutureNonce => Some("use the correct nonce to send the transaction"),
            Self::NotEnoughCash => Some("fund the account with enough balance"),
            Self::Packed | Self::Ready | Self::NoPending => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FutureNonce => "FutureNonce",
            Self::NotEnoughCash => "NotEnoughCash",
            Self::Packed => "Packed",
            Self::Ready => "Ready",
            Self::NoPending => "NoPending",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FutureNonce => "Use a skipped nonce",
            Self::NotEnoughCash => "Sender account do not have enough CFX to pay for value and gas",
            Self::Packed => "Packed in a block, waiting for execution",
            Self::Ready => "Ready for miner to pack",
            Self::NoPending => "Congratulations this account have no pending transactions",
        }
    }
}
