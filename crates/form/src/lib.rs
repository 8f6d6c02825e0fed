//! # Kainji Form
//!
//! Headless model of the Kainji token-creation form. It holds the draft the
//! user is editing, validates it on submission and runs a simulated mint.
//! Wallet authentication and toast notifications are collaborators reached
//! through the [`AuthGateway`] and [`NotificationSink`] traits.
//!
//! Nothing here talks to a chain: minting formats a success message after a
//! single await point that stands in for a future network call.

pub mod auth;
pub mod config;
pub mod draft;
pub mod error;
pub mod field;
pub mod form;
pub mod mint;
pub mod notify;
pub mod outcome;
pub mod submission;
pub mod testing;
pub mod validate;

pub use auth::{AuthGateway, AuthListener, AuthSubscription, LocalWallet, SubscriptionId};
pub use config::{FormConfig, FormSettings, LoggingConfig, NotificationConfig};
pub use draft::{Draft, DEFAULT_DECIMALS};
pub use error::{ErrorKind, FieldError, FormResult, MintError, SubmissionError};
pub use field::{Field, UnknownField};
pub use form::{FormEvent, TokenCreationForm};
pub use mint::{Minter, SimulatedMinter};
pub use notify::{Notification, NotificationKind, NotificationSink, TracingSink};
pub use outcome::SubmissionOutcome;
pub use submission::{Submission, SubmissionController};
pub use validate::{validate, ValidationReport};
