//! Test doubles for the form's collaborators

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::draft::Draft;
use crate::error::MintError;
use crate::mint::Minter;
use crate::notify::{Notification, NotificationKind, NotificationSink};

/// Sink that keeps every toast it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }

    pub fn count_of(&self, kind: NotificationKind) -> usize {
        self.notifications()
            .iter()
            .filter(|notification| notification.kind == kind)
            .count()
    }

    pub fn clear(&self) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

/// Minter that always fails with the given detail
#[derive(Debug, Clone)]
pub struct FailingMinter {
    detail: String,
}

impl FailingMinter {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[async_trait]
impl Minter for FailingMinter {
    async fn mint(&self, _draft: &Draft) -> Result<String, MintError> {
        tokio::task::yield_now().await;
        Err(MintError::Rejected(self.detail.clone()))
    }
}

/// Minter whose mint step never completes
#[derive(Debug, Default, Clone, Copy)]
pub struct StalledMinter;

#[async_trait]
impl Minter for StalledMinter {
    async fn mint(&self, _draft: &Draft) -> Result<String, MintError> {
        std::future::pending().await
    }
}
