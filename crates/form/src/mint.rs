//! The mint step of a submission
//!
//! No chain is contacted. `SimulatedMinter` yields once to the runtime where
//! a real network call would await, then reports success.

use async_trait::async_trait;
use tracing::info;

use crate::draft::Draft;
use crate::error::MintError;

#[async_trait]
pub trait Minter: Send + Sync {
    /// Mint the token described by a validated draft and return the message
    /// to show on success
    async fn mint(&self, draft: &Draft) -> Result<String, MintError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedMinter;

pub fn success_message(draft: &Draft) -> String {
    format!(
        "Minted {} of {} successfully!",
        draft.initial_supply(),
        draft.name()
    )
}

#[async_trait]
impl Minter for SimulatedMinter {
    async fn mint(&self, draft: &Draft) -> Result<String, MintError> {
        info!(
            token = draft.name(),
            symbol = draft.symbol(),
            amount = draft.initial_supply(),
            "Minting token"
        );
        tokio::task::yield_now().await;
        Ok(success_message(draft))
    }
}
