//! Wizard: record ownership and the linear step state machine.
//!
//! Methods:
//! - new, advance, retreat, submit, preview_bmi, preview_age, payment_url
//!
//! `advance`/`submit` validate before persisting; a validation failure is a
//! normal output (marks + banner), not an error. Transition misuse by an
//! adapter (wrong form variant, submit off the final step, any action after
//! completion) is a [`WizardError`].

use chrono::NaiveDate;

use crate::config::Config;
use crate::eligibility::{self, Verdict};
use crate::error::{HandoffError, WizardError};
use crate::handoff::{self, PaymentKind};
use crate::measures::{self, BmiCategory};
use crate::outputs::{Outputs, UiChange, WizardEvent};
use crate::record::IntakeRecord;
use crate::steps::{MeasurementsForm, Step, StepForm};
use crate::submission;
use crate::validate::{validate_step, ValidationFailure};

/// Selector the wizard scrolls to after a step change.
const FORM_SCROLL_TARGET: &str = ".questionnaire-form";
/// Selector the wizard scrolls to when the result view appears.
const RESULT_SCROLL_TARGET: &str = "#resultContainer";

pub struct Wizard {
    cfg: Config,
    today: NaiveDate,
    step: Step,
    record: IntakeRecord,
    verdict: Option<Verdict>,
}

impl Wizard {
    pub fn new(cfg: Config, today: NaiveDate) -> Self {
        Self {
            cfg,
            today,
            step: Step::Measurements,
            record: IntakeRecord::default(),
            verdict: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.verdict.is_some()
    }

    /// Validate the current step and move forward. On validation failure the
    /// cursor does not move and nothing is persisted.
    pub fn advance(&mut self, form: StepForm) -> Result<Outputs, WizardError> {
        self.ensure_in_progress()?;
        self.ensure_form_matches(&form)?;
        let next = match self.step.next() {
            Some(next) => next,
            None => return Err(WizardError::NoNextStep),
        };

        let mut out = Outputs::default();
        out.push_change(UiChange::ClearErrors);
        if let Err(failure) = validate_step(&form, &self.record, self.today) {
            self.push_failure(&mut out, failure);
            return Ok(out);
        }

        self.persist(form);
        let from = self.step.number();
        self.step = next;
        self.push_navigation(&mut out);
        out.push_event(WizardEvent::StepChanged {
            from,
            to: next.number(),
        });
        Ok(out)
    }

    /// Move back one step. Never validates, never persists; a retreat on the
    /// first step is a no-op.
    pub fn retreat(&mut self) -> Result<Outputs, WizardError> {
        self.ensure_in_progress()?;
        let mut out = Outputs::default();
        if let Some(prev) = self.step.prev() {
            let from = self.step.number();
            self.step = prev;
            out.push_change(UiChange::ClearErrors);
            self.push_navigation(&mut out);
            out.push_event(WizardEvent::StepChanged {
                from,
                to: prev.number(),
            });
        }
        Ok(out)
    }

    /// Final-step submission: validate, persist, evaluate eligibility once,
    /// queue the fire-and-forget submission, and switch to the terminal
    /// result view.
    pub fn submit(&mut self, form: StepForm) -> Result<Outputs, WizardError> {
        self.ensure_in_progress()?;
        if !self.step.is_final() {
            return Err(WizardError::NotFinalStep);
        }
        self.ensure_form_matches(&form)?;

        let mut out = Outputs::default();
        out.push_change(UiChange::ClearErrors);
        if let Err(failure) = validate_step(&form, &self.record, self.today) {
            self.push_failure(&mut out, failure);
            return Ok(out);
        }

        self.persist(form);
        let verdict = eligibility::evaluate(&self.record);

        match submission::build_submission(&self.cfg, &self.record, &verdict) {
            Some(request) => out.push_event(WizardEvent::SubmissionQueued {
                endpoint: request.endpoint,
                body: request.body,
            }),
            None => {
                log::warn!("submission endpoint not configured; skipping intake submission");
                out.push_event(WizardEvent::SubmissionSkipped {
                    reason: "submission endpoint not configured".to_string(),
                });
            }
        }

        out.push_change(UiChange::ShowResult {
            eligible: verdict.eligible,
            message: verdict.reason.clone(),
        });
        out.push_change(UiChange::ScrollTo {
            target: RESULT_SCROLL_TARGET.to_string(),
        });
        out.push_event(WizardEvent::Completed {
            eligible: verdict.eligible,
        });
        self.verdict = Some(verdict);
        Ok(out)
    }

    /// Live BMI recompute on any height/weight keystroke. When both
    /// measurements resolve, the record is updated; otherwise the readout
    /// shows a placeholder and the record keeps its last good values.
    pub fn preview_bmi(&mut self, form: &MeasurementsForm) -> Outputs {
        let mut out = Outputs::default();
        if self.is_complete() {
            return out;
        }
        match (form.height.resolve_cm(), form.weight.resolve_kg()) {
            (Some(cm), Some(kg)) => {
                self.record.set_measurements(cm, kg);
                if let Some(bmi) = self.record.bmi {
                    let category = BmiCategory::of(bmi);
                    out.push_change(UiChange::BmiReadout {
                        value: format!("{bmi:.1}"),
                        label: category.label().to_string(),
                        css_class: format!("bmi-category {}", category.css_class()),
                    });
                }
            }
            _ => out.push_change(UiChange::BmiReadout {
                value: "--".to_string(),
                label: String::new(),
                css_class: "bmi-category".to_string(),
            }),
        }
        out
    }

    /// Live age recompute on a date-of-birth select change. Only emits once
    /// all three parts form a real date.
    pub fn preview_age(
        &mut self,
        day: Option<u32>,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Outputs {
        let mut out = Outputs::default();
        if self.is_complete() {
            return out;
        }
        if let (Some(d), Some(m), Some(y)) = (day, month, year) {
            if let Some(dob) = measures::dob_from_parts(d, m, y) {
                let age = measures::age_on(dob, self.today);
                self.record.dob_day = Some(d);
                self.record.dob_month = Some(m);
                self.record.dob_year = Some(y);
                self.record.age = Some(age);
                out.push_change(UiChange::AgeReadout {
                    label: format!("Age: {age} years"),
                });
            }
        }
        out
    }

    /// Redirect URL for a payment choice on the eligible result view.
    pub fn payment_url(&self, kind: PaymentKind) -> Result<String, HandoffError> {
        handoff::payment_redirect_url(&self.cfg, &self.record, kind)
    }

    fn ensure_in_progress(&self) -> Result<(), WizardError> {
        if self.verdict.is_some() {
            return Err(WizardError::Completed);
        }
        Ok(())
    }

    fn ensure_form_matches(&self, form: &StepForm) -> Result<(), WizardError> {
        if form.step() != self.step {
            return Err(WizardError::StepMismatch {
                expected: self.step,
                got: form.step(),
            });
        }
        Ok(())
    }

    fn push_failure(&self, out: &mut Outputs, failure: ValidationFailure) {
        if !failure.fields.is_empty() {
            out.push_change(UiChange::MarkFields {
                fields: failure.fields.clone(),
            });
        }
        if !failure.message.is_empty() {
            out.push_change(UiChange::ErrorBanner {
                message: failure.message.clone(),
            });
        }
        out.push_event(WizardEvent::ValidationFailed {
            step: self.step.number(),
            message: failure.message,
        });
    }

    fn push_navigation(&self, out: &mut Outputs) {
        let n = self.step.number();
        out.push_change(UiChange::ShowStep { step: n });
        out.push_change(UiChange::Progress {
            percent: f32::from(n) / f32::from(Step::TOTAL) * 100.0,
            label: format!("Step {n} of {}", Step::TOTAL),
        });
        out.push_change(UiChange::NavButtons {
            prev: n > 1,
            next: !self.step.is_final(),
            submit: self.step.is_final(),
        });
        out.push_change(UiChange::ScrollTo {
            target: FORM_SCROLL_TARGET.to_string(),
        });
    }

    /// Snapshot the validated step into the record. Optional inputs only
    /// overwrite when present; free text is the step's own data and is
    /// always written back trimmed.
    fn persist(&mut self, form: StepForm) {
        match form {
            StepForm::Measurements(f) => {
                if let (Some(cm), Some(kg)) = (f.height.resolve_cm(), f.weight.resolve_kg()) {
                    self.record.set_measurements(cm, kg);
                }
            }
            StepForm::Personal(f) => {
                if let (Some(d), Some(m), Some(y)) = (f.dob_day, f.dob_month, f.dob_year) {
                    self.record.dob_day = Some(d);
                    self.record.dob_month = Some(m);
                    self.record.dob_year = Some(y);
                    if let Some(dob) = measures::dob_from_parts(d, m, y) {
                        self.record.age = Some(measures::age_on(dob, self.today));
                    }
                }
                if let Some(ethnicity) = f.ethnicity {
                    self.record.ethnicity = Some(ethnicity);
                }
                if let Some(sex) = f.sex {
                    self.record.set_sex(sex);
                }
            }
            StepForm::WeightHistory(f) => {
                if let Some(kg) = f.highest_weight.as_ref().and_then(|w| w.resolve_kg()) {
                    self.record.highest_weight_kg = Some(kg);
                }
                if let Some(kg) = f.target_weight.as_ref().and_then(|w| w.resolve_kg()) {
                    self.record.target_weight_kg = Some(kg);
                }
            }
            StepForm::Medical(f) => {
                if let Some(pregnancy) = f.pregnancy {
                    self.record.pregnancy = Some(pregnancy);
                }
                self.record.conditions = normalized_conditions(f.conditions);
                self.record.medications = f.medications.trim().to_string();
                self.record.allergies = f.allergies.trim().to_string();
            }
            StepForm::Contact(f) => {
                self.record.full_name = f.full_name.trim().to_string();
                self.record.email = f.email.trim().to_string();
                self.record.phone = f.phone.trim().to_string();
                self.record.contact_method = f.contact_method.unwrap_or_default();
                self.record.consent = f.consent;
                self.record.marketing = f.marketing;
            }
        }
    }
}

/// Rebuild the tag list through the toggle rules so an inconsistent snapshot
/// (duplicates, "none" alongside other tags) cannot enter the record.
fn normalized_conditions(
    tags: Vec<crate::record::Condition>,
) -> Vec<crate::record::Condition> {
    let mut normalized = Vec::with_capacity(tags.len());
    for tag in tags {
        if !normalized.contains(&tag) {
            crate::record::toggle_condition(&mut normalized, tag);
        }
    }
    normalized
}
