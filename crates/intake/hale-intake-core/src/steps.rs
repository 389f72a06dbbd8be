//! Wizard steps and the plain per-step input snapshots.
//!
//! Each step is a tagged variant carrying exactly the fields the adapter
//! reads off the UI surface for that step. Validation and persistence operate
//! on these snapshots, never on the DOM.

use serde::{Deserialize, Serialize};

use crate::measures::{HeightInput, WeightInput};
use crate::record::{Condition, ContactMethod, Ethnicity, PregnancyAnswer, Sex};

/// The five linear wizard steps. No branching: conditional visibility
/// (pregnancy) is a field-level concern, not a step skip.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    Measurements,
    Personal,
    WeightHistory,
    Medical,
    Contact,
}

impl Step {
    pub const TOTAL: u8 = 5;

    pub fn number(self) -> u8 {
        match self {
            Step::Measurements => 1,
            Step::Personal => 2,
            Step::WeightHistory => 3,
            Step::Medical => 4,
            Step::Contact => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        match n {
            1 => Some(Step::Measurements),
            2 => Some(Step::Personal),
            3 => Some(Step::WeightHistory),
            4 => Some(Step::Medical),
            5 => Some(Step::Contact),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }

    pub fn is_final(self) -> bool {
        self == Step::Contact
    }
}

/// Inputs the validator can mark with an error highlight. Wire names match
/// the element ids on the page.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    HeightCm,
    HeightFt,
    WeightKg,
    WeightSt,
    DobDay,
    DobMonth,
    DobYear,
    FullName,
    Email,
    Phone,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeasurementsForm {
    pub height: HeightInput,
    pub weight: WeightInput,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalForm {
    pub dob_day: Option<u32>,
    pub dob_month: Option<u32>,
    pub dob_year: Option<i32>,
    pub ethnicity: Option<Ethnicity>,
    pub sex: Option<Sex>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightHistoryForm {
    pub highest_weight: Option<WeightInput>,
    pub target_weight: Option<WeightInput>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalForm {
    pub pregnancy: Option<PregnancyAnswer>,
    pub conditions: Vec<Condition>,
    pub medications: String,
    pub allergies: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub contact_method: Option<ContactMethod>,
    pub consent: bool,
    pub marketing: bool,
}

/// A snapshot of one step's inputs, tagged by step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum StepForm {
    Measurements(MeasurementsForm),
    Personal(PersonalForm),
    WeightHistory(WeightHistoryForm),
    Medical(MedicalForm),
    Contact(ContactForm),
}

impl StepForm {
    pub fn step(&self) -> Step {
        match self {
            StepForm::Measurements(_) => Step::Measurements,
            StepForm::Personal(_) => Step::Personal,
            StepForm::WeightHistory(_) => Step::WeightHistory,
            StepForm::Medical(_) => Step::Medical,
            StepForm::Contact(_) => Step::Contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_linear() {
        assert_eq!(Step::Measurements.next(), Some(Step::Personal));
        assert_eq!(Step::Contact.next(), None);
        assert_eq!(Step::Measurements.prev(), None);
        assert_eq!(Step::Contact.prev(), Some(Step::Medical));
        assert!(Step::Contact.is_final());
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(6), None);
    }

    #[test]
    fn step_form_wire_shape() {
        let form = StepForm::Measurements(MeasurementsForm {
            height: HeightInput::Metric { cm: Some(180.0) },
            weight: WeightInput::Metric { kg: Some(81.0) },
        });
        let v = serde_json::to_value(&form).unwrap();
        assert_eq!(v["step"], "measurements");
        assert_eq!(v["height"]["unit"], "metric");
        assert_eq!(v["height"]["cm"], 180.0);
        let back: StepForm = serde_json::from_value(v).unwrap();
        assert_eq!(back, form);
    }
}
