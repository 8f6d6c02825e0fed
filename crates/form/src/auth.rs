//! Wallet authentication collaborator
//!
//! The form only asks whether a wallet is connected, forwards connect and
//! disconnect requests, and listens for changes of the authenticated flag.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

/// Callback invoked with the new authenticated flag
pub type AuthListener = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub trait AuthGateway: Send + Sync {
    fn is_authenticated(&self) -> bool;

    fn connect(&self);

    fn disconnect(&self);

    /// Register `listener` for authenticated-flag changes
    fn subscribe(&self, listener: AuthListener) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

/// Keeps a listener registered until dropped
pub struct AuthSubscription {
    gateway: Arc<dyn AuthGateway>,
    id: SubscriptionId,
}

impl AuthSubscription {
    pub fn register(gateway: Arc<dyn AuthGateway>, listener: AuthListener) -> Self {
        let id = gateway.subscribe(listener);
        Self { gateway, id }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.gateway.unsubscribe(self.id);
    }
}

#[derive(Default)]
struct WalletState {
    authenticated: bool,
    next_id: u64,
    listeners: Vec<(SubscriptionId, AuthListener)>,
}

/// In-process gateway with no external wallet provider behind it
///
/// Listeners fire only when the flag actually flips, and are called after the
/// internal lock is released so they may query the wallet again.
#[derive(Default)]
pub struct LocalWallet {
    state: Mutex<WalletState>,
}

impl LocalWallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connected() -> Self {
        let wallet = Self::default();
        wallet.lock().authenticated = true;
        wallet
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, WalletState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_authenticated(&self, authenticated: bool) {
        let listeners: Vec<AuthListener> = {
            let mut state = self.lock();
            if state.authenticated == authenticated {
                debug!(authenticated, "Wallet state unchanged");
                return;
            }
            state.authenticated = authenticated;
            state
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect()
        };

        info!(
            "Authentication state changed: {}",
            if authenticated { "Logged in" } else { "Logged out" }
        );
        for listener in listeners {
            listener(authenticated);
        }
    }
}

impl AuthGateway for LocalWallet {
    fn is_authenticated(&self) -> bool {
        self.lock().authenticated
    }

    fn connect(&self) {
        self.set_authenticated(true);
    }

    fn disconnect(&self) {
        self.set_authenticated(false);
    }

    fn subscribe(&self, listener: AuthListener) -> SubscriptionId {
        let mut state = self.lock();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        state.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().listeners.retain(|(existing, _)| *existing != id);
    }
}
