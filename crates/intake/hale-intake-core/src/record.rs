//! The intake record: one mutable structure per visit.
//!
//! Fields are written at step-exit (save) and by derived-value recompute
//! (BMI, age). Once set, a field is never cleared, with one exception: the
//! pregnancy answer resets when sex moves away from female.

use serde::{Deserialize, Serialize};

use crate::measures;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ethnicity {
    White,
    Black,
    Asian,
    Mixed,
    /// Carries lower BMI thresholds in the eligibility gate.
    Other,
}

impl Ethnicity {
    pub fn as_str(self) -> &'static str {
        match self {
            Ethnicity::White => "white",
            Ethnicity::Black => "black",
            Ethnicity::Asian => "asian",
            Ethnicity::Mixed => "mixed",
            Ethnicity::Other => "other",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PregnancyAnswer {
    Yes,
    No,
}

impl PregnancyAnswer {
    pub fn as_str(self) -> &'static str {
        match self {
            PregnancyAnswer::Yes => "yes",
            PregnancyAnswer::No => "no",
        }
    }
}

/// Medical history checkbox tags. Wire names match the form values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Type2Diabetes,
    HighBloodPressure,
    HeartDisease,
    EatingDisorder,
    Pancreatitis,
    ThyroidCancer,
    KidneyDisease,
    GallbladderDisease,
    None,
}

impl Condition {
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Type2Diabetes => "type2diabetes",
            Condition::HighBloodPressure => "highbloodpressure",
            Condition::HeartDisease => "heartdisease",
            Condition::EatingDisorder => "eatingdisorder",
            Condition::Pancreatitis => "pancreatitis",
            Condition::ThyroidCancer => "thyroidcancer",
            Condition::KidneyDisease => "kidneydisease",
            Condition::GallbladderDisease => "gallbladderdisease",
            Condition::None => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Sms,
}

impl ContactMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
            ContactMethod::Sms => "sms",
        }
    }
}

/// Checkbox toggle with "none" exclusivity: selecting "none" clears every
/// other tag, selecting any other tag clears "none". Re-toggling a selected
/// tag removes it.
pub fn toggle_condition(selected: &mut Vec<Condition>, toggled: Condition) {
    if let Some(pos) = selected.iter().position(|c| *c == toggled) {
        selected.remove(pos);
        return;
    }
    if toggled == Condition::None {
        selected.clear();
    } else {
        selected.retain(|c| *c != Condition::None);
    }
    selected.push(toggled);
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeRecord {
    // Step 1: measurements (canonical metric)
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,

    // Step 2: personal details
    pub dob_day: Option<u32>,
    pub dob_month: Option<u32>,
    pub dob_year: Option<i32>,
    pub age: Option<i32>,
    pub ethnicity: Option<Ethnicity>,
    pub sex: Option<Sex>,

    // Step 3: weight history
    pub highest_weight_kg: Option<f64>,
    pub target_weight_kg: Option<f64>,

    // Step 4: medical history
    pub pregnancy: Option<PregnancyAnswer>,
    pub conditions: Vec<Condition>,
    pub medications: String,
    pub allergies: String,

    // Step 5: contact details
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub contact_method: ContactMethod,
    pub consent: bool,
    pub marketing: bool,
}

impl IntakeRecord {
    /// Store canonical measurements and recompute BMI.
    pub fn set_measurements(&mut self, height_cm: f64, weight_kg: f64) {
        self.height_cm = Some(height_cm);
        self.weight_kg = Some(weight_kg);
        self.bmi = measures::bmi(height_cm, weight_kg);
    }

    /// The pregnancy answer only applies while sex is female.
    pub fn set_sex(&mut self, sex: Sex) {
        if sex != Sex::Female {
            self.pregnancy = None;
        }
        self.sex = Some(sex);
    }

    pub fn has_condition_in(&self, set: &[Condition]) -> bool {
        self.conditions.iter().any(|c| set.contains(c))
    }
}
