use std::fmt::Debug;

use async_trait::async_trait;

use crate::math::Drip;
use crate::types::{NodeStatus, PendingSummary};
use crate::{Address, Error};

/// In-process stand-in for a Conflux node. Only the calls a test relies on need to be implemented.
#[async_trait]
pub trait MockConfluxNode: 'static + Send + Sync + Debug {
    fn new() -> Self
    where
        Self: Sized;

    async fn get_account_pending_transactions(&self, _address: &Address) -> Result<PendingSummary, Error> {
        unimplemented!()
    }

    async fn get_next_nonce(&self, _address: &Address) -> Result<u64, Error> {
        unimplemented!()
    }

    async fn get_balance(&self, _address: &Address) -> Result<Drip, Error> {
        unimplemented!()
    }

    async fn get_status(&self) -> Result<NodeStatus, Error> {
        unimplemented!()
    }
}
