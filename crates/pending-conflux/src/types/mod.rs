use serde::Deserialize;
use serde_json::Value;
use serde_with::serde_as;

use crate::values::HexQuantity;
use crate::Error;

/// Status of a transaction sitting in the transaction pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Packed in a block, waiting for execution
    Packed,

    /// Ready to be packed
    Ready,

    /// Nonce is greater than the next nonce of the sender
    PendingFutureNonce,

    /// Sender cannot afford value and gas
    PendingNotEnoughCash,
}

impl TryFrom<&Value> for TransactionStatus {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let status = match value {
            Value::String(tag) => match tag.as_str() {
                "packed" => Some(Self::Packed),
                "ready" => Some(Self::Ready),
                _ => None,
            },
            Value::Object(fields) => match fields.get("pending").and_then(Value::as_str) {
                Some("futureNonce") => Some(Self::PendingFutureNonce),
                Some("notEnoughCash") => Some(Self::PendingNotEnoughCash),
                _ => None,
            },
            _ => None,
        };

        status.ok_or_else(|| Error::UnclassifiedStatus(value.to_string()))
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PendingTransaction {
    pub hash: String,

    #[serde_as(as = "HexQuantity")]
    pub nonce: u64,
}

/// Response of `cfx_getAccountPendingTransactions` as sent by the node
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPendingTransactions {
    #[serde_as(as = "HexQuantity")]
    pub pending_count: u64,

    #[serde(default)]
    pub pending_transactions: Vec<PendingTransaction>,

    #[serde(default)]
    pub first_tx_status: Option<Value>,
}

/// Pending transactions of an account. The transactions are sorted by nonce and the status
/// is the one of the lowest nonce transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSummary {
    pub pending_count: u64,
    pub pending_transactions: Vec<PendingTransaction>,
    pub first_tx_status: Option<TransactionStatus>,
}

impl PendingSummary {
    pub fn empty() -> Self {
        Self {
            pending_count: 0,
            pending_transactions: vec![],
            first_tx_status: None,
        }
    }

    /// The status is present if and only if the account has pending transactions, in which
    /// case the pending transactions are listed
    pub fn validate(&self) -> Result<(), Error> {
        if (self.pending_count == 0) != self.first_tx_status.is_none() {
            return Err(Error::MalformedResponse(format!(
                "pending count is {} but first transaction status is {}",
                self.pending_count,
                if self.first_tx_status.is_some() { "present" } else { "absent" }
            )));
        }

        if self.pending_count > 0 && self.pending_transactions.is_empty() {
            return Err(Error::MalformedResponse(format!(
                "pending count is {} but no pending transaction is listed",
                self.pending_count
            )));
        }

        Ok(())
    }

    /// Lowest nonce pending transaction
    pub fn first_transaction(&self) -> Option<&PendingTransaction> {
        self.pending_transactions.first()
    }
}

impl TryFrom<AccountPendingTransactions> for PendingSummary {
    type Error = Error;

    fn try_from(value: AccountPendingTransactions) -> Result<Self, Self::Error> {
        let first_tx_status = match value.first_tx_status {
            None | Some(Value::Null) => None,
            Some(ref status) => Some(TransactionStatus::try_from(status)?),
        };

        let summary = Self {
            pending_count: value.pending_count,
            pending_transactions: value.pending_transactions,
            first_tx_status,
        };

        summary.validate()?;
        Ok(summary)
    }
}

/// Subset of `cfx_getStatus`
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    #[serde_as(as = "HexQuantity")]
    pub network_id: u64,

    #[serde_as(as = "HexQuantity")]
    pub chain_id: u64,

    #[serde_as(as = "HexQuantity")]
    pub epoch_number: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const HASH: &str = "0x4f5b5bbf22a7bbf2cb2e3eed5e0ae56bf3bd3c4a3c4a9b5e2c0f1d8bd16a5d3e";

    fn summary(value: Value) -> Result<PendingSummary, Error> {
        let response: AccountPendingTransactions = serde_json::from_value(value).unwrap();
        PendingSummary::try_from(response)
    }

    #[test]
    fn decode_statuses() {
        let cases = [
            (json!("packed"), TransactionStatus::Packed),
            (json!("ready"), TransactionStatus::Ready),
            (json!({ "pending": "futureNonce" }), TransactionStatus::PendingFutureNonce),
            (json!({ "pending": "notEnoughCash" }), TransactionStatus::PendingNotEnoughCash),
        ];

        for (value, expected) in cases {
            assert_eq!(TransactionStatus::try_from(&value).unwrap(), expected);
        }
    }

    #[test]
    fn unknown_statuses_are_unclassified() {
        for value in [json!("mined"), json!({ "pending": "oldEpochHeight" }), json!({ "ready": true }), json!(3)] {
            assert!(matches!(TransactionStatus::try_from(&value), Err(Error::UnclassifiedStatus(_))));
        }
    }

    #[test]
    fn decode_empty_summary() {
        let result = summary(json!({
            "pendingCount": "0x0",
            "pendingTransactions": [],
            "firstTxStatus": null
        }))
        .unwrap();

        assert_eq!(result, PendingSummary::empty());
    }

    #[test]
    fn decode_summary_with_pending_transactions() {
        let result = summary(json!({
            "pendingCount": "0x2",
            "pendingTransactions": [
                { "hash": HASH, "nonce": "0x7", "from": "cfxtest:aajg4wt2mbmbb44sp6szd783ry0jtad5bemzfdf83g", "status": null },
                { "hash": HASH, "nonce": "0x8" }
            ],
            "firstTxStatus": { "pending": "futureNonce" }
        }))
        .unwrap();

        assert_eq!(result.pending_count, 2);
        assert_eq!(result.first_tx_status, Some(TransactionStatus::PendingFutureNonce));
        assert_eq!(result.first_transaction().map(|tx| tx.nonce), Some(7));
    }

    #[test]
    fn decode_summary_with_unknown_status() {
        let result = summary(json!({
            "pendingCount": "0x1",
            "pendingTransactions": [{ "hash": HASH, "nonce": "0x1" }],
            "firstTxStatus": { "pending": "outdatedStatus" }
        }));

        assert!(matches!(result, Err(Error::UnclassifiedStatus(_))));
    }

    #[test]
    fn reject_inconsistent_summaries() {
        let without_status = summary(json!({
            "pendingCount": "0x1",
            "pendingTransactions": [{ "hash": HASH, "nonce": "0x1" }],
            "firstTxStatus": null
        }));
        let without_count = summary(json!({
            "pendingCount": "0x0",
            "pendingTransactions": [],
            "firstTxStatus": "ready"
        }));
        let without_transactions = summary(json!({
            "pendingCount": "0x3",
            "pendingTransactions": [],
            "firstTxStatus": { "pending": "futureNonce" }
        }));

        assert!(matches!(without_status, Err(Error::MalformedResponse(_))));
        assert!(matches!(without_count, Err(Error::MalformedResponse(_))));
        assert!(matches!(without_transactions, Err(Error::MalformedResponse(_))));
    }
}
