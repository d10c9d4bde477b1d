//! Reduction of the pending state of an account into a diagnosis.
//!
//! A diagnosis reads three values from the node serving the account network: the pending
//! transactions summary, the next nonce and the balance. The status of the lowest nonce
//! pending transaction is then classified into a [`PendingCategory`] which carries the
//! remedy shown to the user.

mod classifier;
mod display;

use chrono::{DateTime, Utc};
pub use classifier::PendingCategory;
pub use display::{truncate_hash, HashLink};
use pending_conflux::math::{format_cfx, Drip};
use pending_conflux::types::PendingSummary;
use pending_conflux::{Address, Client, Network};
use serde::Serialize;
use tracing::{info, instrument};

use crate::Error;

/// Lowest nonce transaction still waiting in the pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirstPendingTransaction {
    pub nonce: u64,
    pub hash: HashLink,
}

/// Outcome of a single check. Built fresh for every check and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub address: Address,
    pub network: Network,

    /// Next nonce the node expects from the account
    pub nonce: u64,

    /// Balance in CFX
    pub balance: String,

    pub pending_count: u64,
    pub category: PendingCategory,
    pub remedy: Option<String>,
    pub first_pending: Option<FirstPendingTransaction>,
    pub checked_at: DateTime<Utc>,
}

/// Assemble a diagnosis from the values read on the node. The network, and so the explorer
/// link, follows the address prefix. Fails when the summary is inconsistent.
pub fn assemble(
    address: Address,
    summary: &PendingSummary,
    nonce: u64,
    balance: &Drip,
    checked_at: DateTime<Utc>,
) -> Result<DiagnosisResult, Error> {
    summary.validate()?;

    let network = Network::select(&address);
    let category = PendingCategory::classify(summary.first_tx_status.as_ref());
    let first_pending = if summary.pending_count > 0 {
        summary.first_transaction().map(|tx| FirstPendingTransaction {
            nonce: tx.nonce,
            hash: HashLink::new(network, &tx.hash),
        })
    } else {
        None
    };

    Ok(DiagnosisResult {
        address,
        network,
        nonce,
        balance: format_cfx(balance),
        pending_count: summary.pending_count,
        category,
        remedy: category.remedy().map(str::to_string),
        first_pending,
        checked_at,
    })
}

/// Diagnose the pending transactions of `address` on the node behind `client`, which must be
/// bound to the network of the address. The three reads are issued concurrently and any
/// failure fails the whole diagnosis.
#[instrument(name = "diagnose", skip(client, address), fields(address = %address, network = client.network().as_str()))]
pub async fn diagnose(client: &Client, address: &Address) -> Result<DiagnosisResult, Error> {
    let network = Network::select(address);
    if client.network() != network {
        return Err(Error::Configuration(format!(
            "{} client cannot diagnose {} address {}",
            client.network().as_str(),
            network.as_str(),
            address
        )));
    }

    let (summary, nonce, balance) = futures::try_join!(
        client.fetch_pending_summary(address),
        client.fetch_next_nonce(address),
        client.fetch_balance(address)
    )?;

    let result = assemble(address.clone(), &summary, nonce, &balance, Utc::now())?;
    info!(category = result.category.as_str(), pending_count = result.pending_count, "diagnosis completed");

    Ok(result)
}
