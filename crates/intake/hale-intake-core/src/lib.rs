//! Hale Intake Core (host-agnostic)
//!
//! Pure logic for the 5-step GLP-1 intake questionnaire: unit conversion and
//! derived metrics (BMI, age), per-step validation, the wizard state machine,
//! the eligibility decision table, and the external payment/submission
//! handoff. Adapters (web/WASM) read the DOM into plain step forms, pass them
//! into the [`Wizard`], and apply the declarative [`UiChange`]s it emits.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod handoff;
pub mod measures;
pub mod outputs;
pub mod record;
pub mod steps;
pub mod submission;
pub mod validate;
pub mod wizard;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use eligibility::{evaluate, Verdict};
pub use error::{HandoffError, WizardError};
pub use handoff::{payment_redirect_url, PaymentKind};
pub use measures::{age_on, bmi, BmiCategory, HeightInput, WeightInput};
pub use outputs::{Outputs, UiChange, WizardEvent};
pub use record::{
    toggle_condition, Condition, ContactMethod, Ethnicity, IntakeRecord, PregnancyAnswer, Sex,
};
pub use steps::{
    ContactForm, FieldId, MeasurementsForm, MedicalForm, PersonalForm, Step, StepForm,
    WeightHistoryForm,
};
pub use submission::{build_submission, SubmissionRequest};
pub use validate::{validate_step, ValidationFailure};
pub use wizard::Wizard;
