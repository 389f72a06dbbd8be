//! Per-step validation over plain input snapshots.
//!
//! Pure and idempotent: re-running a validation produces the same failure
//! set, and the wizard clears all error annotations before each attempt.
//! When several rules fail on one attempt, the last failing rule's message is
//! the one surfaced (matching the on-page banner behavior).

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::measures;
use crate::record::{IntakeRecord, Sex};
use crate::steps::{FieldId, StepForm};

pub const HEIGHT_RANGE_CM: (f64, f64) = (110.0, 234.0);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 300.0);
pub const AGE_RANGE: (i32, i32) = (18, 85);

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

// +44 or 0 prefix followed by 9-10 digits, after separators are stripped.
static UK_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+44|0)\d{9,10}$").expect("phone pattern"));

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

pub fn is_valid_uk_phone(s: &str) -> bool {
    let stripped: String = s
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    UK_PHONE_RE.is_match(&stripped)
}

/// The inputs to highlight plus the single banner message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub fields: Vec<FieldId>,
    pub message: String,
}

struct Collector {
    fields: Vec<FieldId>,
    message: String,
    failed: bool,
}

impl Collector {
    fn new() -> Self {
        Collector {
            fields: Vec::new(),
            message: String::new(),
            failed: false,
        }
    }

    fn fail(&mut self, fields: &[FieldId], message: &str) {
        self.fields.extend_from_slice(fields);
        self.message = message.to_string();
        self.failed = true;
    }

    fn finish(self) -> Result<(), ValidationFailure> {
        if self.failed {
            Err(ValidationFailure {
                fields: self.fields,
                message: self.message,
            })
        } else {
            Ok(())
        }
    }
}

/// Validate one step's snapshot. `record` supplies cross-step context (the
/// saved sex gates the pregnancy requirement); `today` anchors the age rule.
pub fn validate_step(
    form: &StepForm,
    record: &IntakeRecord,
    today: NaiveDate,
) -> Result<(), ValidationFailure> {
    let mut out = Collector::new();

    match form {
        StepForm::Measurements(f) => {
            let height_ok = f
                .height
                .resolve_cm()
                .map_or(false, |cm| (HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(&cm));
            if !height_ok {
                out.fail(
                    &[FieldId::HeightCm, FieldId::HeightFt],
                    "Please enter a valid height",
                );
            }
            let weight_ok = f
                .weight
                .resolve_kg()
                .map_or(false, |kg| (WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&kg));
            if !weight_ok {
                out.fail(
                    &[FieldId::WeightKg, FieldId::WeightSt],
                    "Please enter a valid weight",
                );
            }
        }
        StepForm::Personal(f) => {
            let dob = match (f.dob_day, f.dob_month, f.dob_year) {
                (Some(d), Some(m), Some(y)) => measures::dob_from_parts(d, m, y),
                _ => None,
            };
            match dob {
                None => out.fail(
                    &[FieldId::DobDay, FieldId::DobMonth, FieldId::DobYear],
                    "Please enter your date of birth",
                ),
                Some(dob) => {
                    let age = measures::age_on(dob, today);
                    if age < AGE_RANGE.0 || age > AGE_RANGE.1 {
                        out.fail(
                            &[FieldId::DobYear],
                            "You must be between 18 and 85 years old",
                        );
                    }
                }
            }
            if f.ethnicity.is_none() {
                out.fail(&[], "Please select your ethnicity");
            }
            if f.sex.is_none() {
                out.fail(&[], "Please select your sex assigned at birth");
            }
        }
        // Weight history is entirely optional.
        StepForm::WeightHistory(_) => {}
        StepForm::Medical(f) => {
            if record.sex == Some(Sex::Female) && f.pregnancy.is_none() {
                out.fail(&[], "Please answer the pregnancy question");
            }
        }
        StepForm::Contact(f) => {
            if f.full_name.trim().len() < 2 {
                out.fail(&[FieldId::FullName], "Please enter your full name");
            }
            if !is_valid_email(f.email.trim()) {
                out.fail(&[FieldId::Email], "Please enter a valid email address");
            }
            if !is_valid_uk_phone(f.phone.trim()) {
                out.fail(&[FieldId::Phone], "Please enter a valid UK phone number");
            }
            if !f.consent {
                out.fail(&[], "Please agree to the data processing terms");
            }
        }
    }

    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::{HeightInput, WeightInput};
    use crate::steps::{ContactForm, MeasurementsForm, MedicalForm, PersonalForm};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[test]
    fn email_patterns() {
        assert!(is_valid_email("jo@example.com"));
        assert!(!is_valid_email("jo@example"));
        assert!(!is_valid_email("jo example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn uk_phone_patterns() {
        assert!(is_valid_uk_phone("07700 900123"));
        assert!(is_valid_uk_phone("+44 7700 900123"));
        assert!(is_valid_uk_phone("(07700) 900-123"));
        assert!(!is_valid_uk_phone("12345"));
        assert!(!is_valid_uk_phone("+1 555 0100"));
    }

    #[test]
    fn height_out_of_range_marks_both_unit_inputs() {
        let form = StepForm::Measurements(MeasurementsForm {
            height: HeightInput::Metric { cm: Some(100.0) },
            weight: WeightInput::Metric { kg: Some(80.0) },
        });
        let failure = validate_step(&form, &IntakeRecord::default(), today()).unwrap_err();
        assert_eq!(failure.fields, vec![FieldId::HeightCm, FieldId::HeightFt]);
        assert_eq!(failure.message, "Please enter a valid height");
    }

    #[test]
    fn later_failure_overwrites_message() {
        let form = StepForm::Measurements(MeasurementsForm::default());
        let failure = validate_step(&form, &IntakeRecord::default(), today()).unwrap_err();
        assert_eq!(failure.message, "Please enter a valid weight");
        assert_eq!(failure.fields.len(), 4);
    }

    #[test]
    fn personal_requires_complete_dob_and_selections() {
        let form = StepForm::Personal(PersonalForm {
            dob_day: Some(15),
            dob_month: None,
            dob_year: Some(1990),
            ethnicity: None,
            sex: None,
        });
        let failure = validate_step(&form, &IntakeRecord::default(), today()).unwrap_err();
        assert!(failure.fields.contains(&FieldId::DobMonth));
        assert_eq!(failure.message, "Please select your sex assigned at birth");
    }

    #[test]
    fn age_bounds_enforced() {
        let form = StepForm::Personal(PersonalForm {
            dob_day: Some(1),
            dob_month: Some(1),
            dob_year: Some(2012),
            ethnicity: Some(crate::record::Ethnicity::White),
            sex: Some(Sex::Male),
        });
        let failure = validate_step(&form, &IntakeRecord::default(), today()).unwrap_err();
        assert_eq!(failure.fields, vec![FieldId::DobYear]);
        assert_eq!(failure.message, "You must be between 18 and 85 years old");
    }

    #[test]
    fn pregnancy_required_only_for_female() {
        let form = StepForm::Medical(MedicalForm::default());
        let mut record = IntakeRecord::default();
        assert!(validate_step(&form, &record, today()).is_ok());
        record.set_sex(Sex::Female);
        let failure = validate_step(&form, &record, today()).unwrap_err();
        assert_eq!(failure.message, "Please answer the pregnancy question");
        assert!(failure.fields.is_empty());
    }

    #[test]
    fn contact_rules() {
        let form = StepForm::Contact(ContactForm {
            full_name: "J".into(),
            email: "not-an-email".into(),
            phone: "123".into(),
            contact_method: None,
            consent: false,
            marketing: false,
        });
        let failure = validate_step(&form, &IntakeRecord::default(), today()).unwrap_err();
        assert_eq!(
            failure.fields,
            vec![FieldId::FullName, FieldId::Email, FieldId::Phone]
        );
        assert_eq!(failure.message, "Please agree to the data processing terms");
    }

    #[test]
    fn valid_contact_passes() {
        let form = StepForm::Contact(ContactForm {
            full_name: "Jo Smith".into(),
            email: "jo@example.com".into(),
            phone: "07700 900123".into(),
            contact_method: None,
            consent: true,
            marketing: false,
        });
        assert!(validate_step(&form, &IntakeRecord::default(), today()).is_ok());
    }
}
