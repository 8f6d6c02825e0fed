//! The token-creation form component
//!
//! Owns the draft and the last validation report, forwards wallet actions to
//! the auth gateway and turns auth-state changes into info toasts. The auth
//! listener is registered once in the constructor and released when the form
//! is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use crate::auth::{AuthGateway, AuthListener, AuthSubscription};
use crate::config::FormConfig;
use crate::draft::Draft;
use crate::field::Field;
use crate::mint::{Minter, SimulatedMinter};
use crate::notify::{Notification, NotificationKind, NotificationSink};
use crate::outcome::SubmissionOutcome;
use crate::submission::SubmissionController;
use crate::validate::ValidationReport;

pub const AUTH_TOAST_TITLE: &str = "Auth state changed";

/// User interactions the form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldEdited { field: Field, value: String },
    SubmitRequested,
    ConnectRequested,
    DisconnectRequested,
}

pub fn auth_toast(authenticated: bool, duration: Duration) -> Notification {
    let state = if authenticated { "logged in" } else { "logged out" };
    Notification::new(
        format!("You are now {}", state),
        NotificationKind::Info,
        duration,
    )
    .with_title(AUTH_TOAST_TITLE)
}

fn auth_listener(sink: Arc<dyn NotificationSink>, duration: Duration) -> AuthListener {
    Arc::new(move |authenticated| sink.notify(auth_toast(authenticated, duration)))
}

pub struct TokenCreationForm {
    draft: Draft,
    report: ValidationReport,
    auth: Arc<dyn AuthGateway>,
    controller: SubmissionController,
    _auth_subscription: AuthSubscription,
}

impl TokenCreationForm {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        sink: Arc<dyn NotificationSink>,
        config: &FormConfig,
    ) -> Self {
        Self::with_minter(auth, sink, Arc::new(SimulatedMinter), config)
    }

    pub fn with_minter(
        auth: Arc<dyn AuthGateway>,
        sink: Arc<dyn NotificationSink>,
        minter: Arc<dyn Minter>,
        config: &FormConfig,
    ) -> Self {
        let listener = auth_listener(
            Arc::clone(&sink),
            config.notifications.auth_change_duration(),
        );
        if config.form.announce_initial_state {
            listener(auth.is_authenticated());
        }
        let subscription = AuthSubscription::register(Arc::clone(&auth), listener);

        let controller = SubmissionController::new(
            Arc::clone(&auth),
            sink,
            minter,
            config.notifications.outcome_duration(),
        );

        Self {
            draft: Draft::new(),
            report: ValidationReport::default(),
            auth,
            controller,
            _auth_subscription: subscription,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Report from the latest submission attempt
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.controller.outcome()
    }

    pub fn watch_outcome(&self) -> watch::Receiver<SubmissionOutcome> {
        self.controller.watch()
    }

    /// Whether the submit control should be disabled
    pub fn is_in_flight(&self) -> bool {
        self.controller.outcome().is_in_flight()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        debug!(%field, value = self.draft.get(field), "Field edited");
    }

    pub fn connect(&self) {
        self.auth.connect();
    }

    pub fn disconnect(&self) {
        self.auth.disconnect();
    }

    /// Validate the draft and, if possible, mint it
    ///
    /// Takes `&mut self`, so one form never has two submissions running.
    pub async fn submit(&mut self) -> SubmissionOutcome {
        let submission = self.controller.submit(&self.draft).await;
        self.report = submission.report;
        submission.outcome
    }

    pub async fn dispatch(&mut self, event: FormEvent) {
        match event {
            FormEvent::FieldEdited { field, value } => self.edit(field, value),
            FormEvent::SubmitRequested => {
                self.submit().await;
            }
            FormEvent::ConnectRequested => self.connect(),
            FormEvent::DisconnectRequested => self.disconnect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::LocalWallet;
    use crate::testing::RecordingSink;

    fn quiet_config() -> FormConfig {
        let mut config = FormConfig::default();
        config.form.announce_initial_state = false;
        config
    }

    #[test]
    fn test_auth_toast_wording() {
        let toast = auth_toast(true, Duration::from_millis(3000));
        assert_eq!(toast.title.as_deref(), Some(AUTH_TOAST_TITLE));
        assert_eq!(toast.message, "You are now logged in");
        assert_eq!(toast.kind, NotificationKind::Info);
        assert_eq!(auth_toast(false, Duration::ZERO).message, "You are now logged out");
    }

    #[test]
    fn test_initial_announcement() {
        let wallet = Arc::new(LocalWallet::new());
        let sink = Arc::new(RecordingSink::new());
        let _form = TokenCreationForm::new(wallet, sink.clone(), &FormConfig::default());
        assert_eq!(sink.messages(), vec!["You are now logged out".to_string()]);
    }

    #[test]
    fn test_edit_events_update_draft() {
        let wallet = Arc::new(LocalWallet::new());
        let sink = Arc::new(RecordingSink::new());
        let mut form = TokenCreationForm::new(wallet, sink, &quiet_config());

        tokio_test::block_on(form.dispatch(FormEvent::FieldEdited {
            field: Field::Symbol,
            value: "sei".to_string(),
        }));
        form.edit(Field::Name, "Sei Token");

        assert_eq!(form.draft().symbol(), "SEI");
        assert_eq!(form.draft().name(), "Sei Token");
        assert_eq!(form.outcome(), SubmissionOutcome::Idle);
        assert!(form.report().is_empty());
    }

    #[test]
    fn test_connect_events_reach_gateway() {
        let wallet = Arc::new(LocalWallet::new());
        let sink = Arc::new(RecordingSink::new());
        let mut form = TokenCreationForm::new(wallet.clone(), sink.clone(), &quiet_config());

        tokio_test::block_on(form.dispatch(FormEvent::ConnectRequested));
        assert!(wallet.is_authenticated());
        assert!(form.is_authenticated());

        tokio_test::block_on(form.dispatch(FormEvent::DisconnectRequested));
        assert!(!form.is_authenticated());

        assert_eq!(sink.count_of(NotificationKind::Info), 2);
    }
}
