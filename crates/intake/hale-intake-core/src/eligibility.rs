//! The eligibility decision table.
//!
//! A pure function of the completed record, evaluated exactly once at
//! submission. Rules short-circuit in a fixed order; the result is advisory
//! and reproducible from the record alone.

use serde::{Deserialize, Serialize};

use crate::measures;
use crate::record::{Condition, Ethnicity, IntakeRecord, PregnancyAnswer};

/// Conditions that lower the BMI bar when combined with an elevated BMI.
pub const WEIGHT_RELATED_CONDITIONS: [Condition; 3] = [
    Condition::Type2Diabetes,
    Condition::HighBloodPressure,
    Condition::HeartDisease,
];

/// Conditions that keep the verdict eligible but route it to pharmacist review.
pub const CONTRAINDICATED_CONDITIONS: [Condition; 2] =
    [Condition::EatingDisorder, Condition::Pancreatitis];

const REASON_UNDERAGE: &str =
    "You must be at least 18 years old to be eligible for GLP-1 treatment.";
const REASON_OVER_AGE: &str =
    "GLP-1 treatments are not recommended for individuals over 85 years old.";
const REASON_PREGNANCY: &str =
    "GLP-1 treatments are not suitable during pregnancy, breastfeeding, or while trying to conceive.";
const REASON_PHARMACIST_REVIEW: &str =
    "Based on your medical history, our pharmacist will need to conduct a thorough assessment to determine your suitability for GLP-1 treatment.";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub eligible: bool,
    pub reason: String,
}

impl Verdict {
    fn ineligible(reason: impl Into<String>) -> Self {
        Verdict {
            eligible: false,
            reason: reason.into(),
        }
    }
}

/// Evaluate the record. First disqualifying rule wins.
pub fn evaluate(record: &IntakeRecord) -> Verdict {
    if record.age.map_or(false, |a| a < 18) {
        return Verdict::ineligible(REASON_UNDERAGE);
    }
    if record.age.map_or(false, |a| a > 85) {
        return Verdict::ineligible(REASON_OVER_AGE);
    }
    if record.pregnancy == Some(PregnancyAnswer::Yes) {
        return Verdict::ineligible(REASON_PREGNANCY);
    }

    // BMI gate with ethnicity-adjusted thresholds.
    let (bmi_threshold, condition_threshold) = match record.ethnicity {
        Some(Ethnicity::Other) => (27.5, 25.0),
        _ => (30.0, 27.0),
    };

    let current_bmi = record.bmi;
    // The historical figure reuses current height; a differing height at the
    // highest weight is not captured by the form.
    let highest_bmi = match (record.highest_weight_kg, record.height_cm) {
        (Some(kg), Some(cm)) => measures::bmi(cm, kg),
        _ => current_bmi,
    };

    let meets = |bmi: Option<f64>, threshold: f64| bmi.map_or(false, |b| b >= threshold);
    let has_weight_related = record.has_condition_in(&WEIGHT_RELATED_CONDITIONS);

    let qualifies = meets(current_bmi, bmi_threshold)
        || meets(highest_bmi, bmi_threshold)
        || (meets(current_bmi, condition_threshold) && has_weight_related);

    if !qualifies {
        let shown = current_bmi.map_or_else(|| "--".to_string(), |b| format!("{b:.1}"));
        return Verdict::ineligible(format!(
            "Based on your BMI of {shown}, you may not currently meet the eligibility \
             criteria for GLP-1 treatment. The minimum BMI requirement is {bmi_threshold} \
             (or {condition_threshold} with weight-related health conditions)."
        ));
    }

    let mut verdict = Verdict {
        eligible: true,
        reason: String::new(),
    };
    // Contraindicated tags do not flip the flag; they route to pharmacist review.
    if record.has_condition_in(&CONTRAINDICATED_CONDITIONS) {
        verdict.reason = REASON_PHARMACIST_REVIEW.to_string();
    }
    verdict
}
