//! Output contracts from the wizard.
//!
//! Each wizard action returns declarative UI changes plus semantic events.
//! Adapters apply the changes to the page (toggle visibility, write text,
//! mark inputs) and transport the events (e.g. perform the queued
//! submission). The core never touches the UI surface itself.

use serde::{Deserialize, Serialize};

use crate::steps::FieldId;

/// One declarative update to the UI surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum UiChange {
    /// Make the given step the visible one.
    ShowStep { step: u8 },
    /// Progress indicator: percentage fill plus "Step n of m" label.
    Progress { percent: f32, label: String },
    /// Navigation button visibility for the current step.
    NavButtons { prev: bool, next: bool, submit: bool },
    /// Remove all field highlights and any banner from a previous attempt.
    ClearErrors,
    /// Highlight the offending inputs.
    MarkFields { fields: Vec<FieldId> },
    /// Show the single human-readable validation message.
    ErrorBanner { message: String },
    /// Live BMI readout; `value` is "--" while inputs are incomplete.
    BmiReadout {
        value: String,
        label: String,
        css_class: String,
    },
    /// Live age readout ("Age: 24 years").
    AgeReadout { label: String },
    /// Switch to the terminal result view.
    ShowResult { eligible: bool, message: String },
    /// Scroll the given selector into view.
    ScrollTo { target: String },
}

/// Discrete semantic signals emitted by wizard actions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
#[non_exhaustive]
pub enum WizardEvent {
    StepChanged { from: u8, to: u8 },
    ValidationFailed { step: u8, message: String },
    /// The fire-and-forget submission the adapter should perform. Its result
    /// must not gate the verdict display.
    SubmissionQueued { endpoint: String, body: String },
    SubmissionSkipped { reason: String },
    Completed { eligible: bool },
}

/// Outputs returned by each wizard action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<UiChange>,
    #[serde(default)]
    pub events: Vec<WizardEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: UiChange) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: WizardEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Adapters key on these serialized names; the whole surface is camelCase.
    #[test]
    fn changes_and_events_use_camel_case_wire_names() {
        let v = serde_json::to_value(UiChange::ShowStep { step: 2 }).unwrap();
        assert_eq!(v, serde_json::json!({ "showStep": { "step": 2 } }));

        let v = serde_json::to_value(UiChange::BmiReadout {
            value: "25.0".into(),
            label: "Overweight".into(),
            css_class: "bmi-category overweight".into(),
        })
        .unwrap();
        assert_eq!(v["bmiReadout"]["cssClass"], "bmi-category overweight");

        let v = serde_json::to_value(UiChange::ClearErrors).unwrap();
        assert_eq!(v, serde_json::json!("clearErrors"));

        let v = serde_json::to_value(WizardEvent::SubmissionSkipped {
            reason: "submission endpoint not configured".into(),
        })
        .unwrap();
        assert!(v.get("submissionSkipped").is_some());
    }
}
