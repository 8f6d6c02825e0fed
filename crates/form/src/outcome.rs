use serde::Serialize;

/// State of the most recent submission attempt
///
/// `Idle -> InFlight -> {Succeeded, Failed}`. A terminal state is left only
/// by starting a new submission; nothing returns the form to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionOutcome::InFlight)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::Succeeded(_) | SubmissionOutcome::Failed(_)
        )
    }

    /// Message to display, if the attempt has finished
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Succeeded(message) | SubmissionOutcome::Failed(message) => {
                Some(message)
            }
            SubmissionOutcome::Idle | SubmissionOutcome::InFlight => None,
        }
    }
}
