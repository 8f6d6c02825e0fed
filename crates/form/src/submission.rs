//! Validate-then-mint submission
//!
//! The controller owns the collaborators a submission talks to. It publishes
//! every outcome transition on a `watch` channel so a view can disable its
//! submit control while an attempt is in flight.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::auth::AuthGateway;
use crate::draft::Draft;
use crate::error::{FormResult, MintError, SubmissionError};
use crate::mint::Minter;
use crate::notify::{Notification, NotificationKind, NotificationSink};
use crate::outcome::SubmissionOutcome;
use crate::validate::{validate, ValidationReport};

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub report: ValidationReport,
    pub outcome: SubmissionOutcome,
}

/// Holds the outcome at `InFlight` while the mint step runs
///
/// If the attempt is dropped before it settles, the outcome is moved to a
/// cancelled `Failed` so it never stays in flight.
struct InFlightGuard<'a> {
    outcome: &'a watch::Sender<SubmissionOutcome>,
    settled: bool,
}

impl<'a> InFlightGuard<'a> {
    fn begin(outcome: &'a watch::Sender<SubmissionOutcome>) -> Self {
        outcome.send_replace(SubmissionOutcome::InFlight);
        Self {
            outcome,
            settled: false,
        }
    }

    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let err = SubmissionError::from(MintError::Cancelled);
            warn!(error = %err, "Submission dropped while in flight");
            self.outcome
                .send_replace(SubmissionOutcome::Failed(err.to_string()));
        }
    }
}

pub struct SubmissionController {
    auth: Arc<dyn AuthGateway>,
    sink: Arc<dyn NotificationSink>,
    minter: Arc<dyn Minter>,
    outcome: watch::Sender<SubmissionOutcome>,
    toast_duration: Duration,
}

impl SubmissionController {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        sink: Arc<dyn NotificationSink>,
        minter: Arc<dyn Minter>,
        toast_duration: Duration,
    ) -> Self {
        let (outcome, _) = watch::channel(SubmissionOutcome::Idle);
        Self {
            auth,
            sink,
            minter,
            outcome,
            toast_duration,
        }
    }

    /// Current outcome
    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome.borrow().clone()
    }

    /// Receiver that observes every later outcome change
    pub fn watch(&self) -> watch::Receiver<SubmissionOutcome> {
        self.outcome.subscribe()
    }

    /// Run one attempt against `draft`
    ///
    /// The returned outcome is always terminal. The only await point is the
    /// mint step; validation and the auth check run synchronously before it.
    pub async fn submit(&self, draft: &Draft) -> Submission {
        let report = validate(draft);

        let outcome = match self.attempt(draft, &report).await {
            Ok(message) => {
                info!(symbol = draft.symbol(), "{}", message);
                SubmissionOutcome::Succeeded(message)
            }
            Err(err) => {
                warn!(error = %err, "Submission rejected");
                SubmissionOutcome::Failed(err.to_string())
            }
        };

        self.publish(outcome.clone());
        self.announce(&outcome);

        Submission { report, outcome }
    }

    async fn attempt(&self, draft: &Draft, report: &ValidationReport) -> FormResult<String> {
        if !report.is_valid() {
            return Err(SubmissionError::InvalidDraft(report.clone()));
        }
        if !self.auth.is_authenticated() {
            return Err(SubmissionError::NotAuthenticated);
        }

        let in_flight = InFlightGuard::begin(&self.outcome);
        let minted = self.minter.mint(draft).await;
        in_flight.settle();
        Ok(minted?)
    }

    fn publish(&self, outcome: SubmissionOutcome) {
        self.outcome.send_replace(outcome);
    }

    fn announce(&self, outcome: &SubmissionOutcome) {
        let kind = match outcome {
            SubmissionOutcome::Succeeded(_) => NotificationKind::Success,
            SubmissionOutcome::Failed(_) => NotificationKind::Error,
            SubmissionOutcome::Idle | SubmissionOutcome::InFlight => return,
        };
        if let Some(message) = outcome.message() {
            self.sink
                .notify(Notification::new(message, kind, self.toast_duration));
        }
    }
}
