//! Error types for wizard transitions and the payment handoff.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::handoff::PaymentKind;
use crate::steps::Step;

/// Misuse of the wizard API by an adapter. Validation failures are not
/// errors; they are normal outputs that block the transition.
#[derive(Clone, Debug, Eq, PartialEq, Error, Serialize, Deserialize)]
pub enum WizardError {
    #[error("form does not match the current step (expected {expected:?}, got {got:?})")]
    StepMismatch { expected: Step, got: Step },
    #[error("already on the final step")]
    NoNextStep,
    #[error("submit is only available on the final step")]
    NotFinalStep,
    #[error("the questionnaire is already complete")]
    Completed,
}

#[derive(Clone, Debug, Eq, PartialEq, Error, Serialize, Deserialize)]
pub enum HandoffError {
    #[error("payment form url for {kind:?} is not configured")]
    Unconfigured { kind: PaymentKind },
}
