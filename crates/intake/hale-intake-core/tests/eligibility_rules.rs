use hale_intake_core::{
    eligibility::{evaluate, CONTRAINDICATED_CONDITIONS, WEIGHT_RELATED_CONDITIONS},
    Condition, Ethnicity, IntakeRecord, PregnancyAnswer, Sex,
};

fn base_record() -> IntakeRecord {
    let mut record = IntakeRecord::default();
    record.set_measurements(180.0, 103.7);
    record.bmi = Some(32.0);
    record.age = Some(40);
    record.ethnicity = Some(Ethnicity::White);
    record.set_sex(Sex::Male);
    record
}

#[test]
fn underage_disqualifies_regardless_of_bmi() {
    let mut record = base_record();
    record.age = Some(17);
    let verdict = evaluate(&record);
    assert!(!verdict.eligible);
    assert!(verdict.reason.contains("at least 18 years old"));
}

#[test]
fn over_age_ceiling_disqualifies() {
    let mut record = base_record();
    record.age = Some(86);
    let verdict = evaluate(&record);
    assert!(!verdict.eligible);
    assert!(verdict.reason.contains("over 85 years old"));
}

#[test]
fn pregnancy_disqualifies_regardless_of_bmi_and_age() {
    let mut record = base_record();
    record.set_sex(Sex::Female);
    record.pregnancy = Some(PregnancyAnswer::Yes);
    let verdict = evaluate(&record);
    assert!(!verdict.eligible);
    assert!(verdict.reason.contains("pregnancy"));
}

#[test]
fn condition_threshold_applies_for_other_ethnicity() {
    let mut record = base_record();
    record.ethnicity = Some(Ethnicity::Other);
    record.bmi = Some(26.0);
    record.conditions = vec![Condition::Type2Diabetes];
    let verdict = evaluate(&record);
    assert!(verdict.eligible, "26 >= 25 with a qualifying condition");
    assert!(verdict.reason.is_empty());
}

#[test]
fn below_both_thresholds_without_conditions_is_ineligible() {
    let mut record = base_record();
    record.bmi = Some(28.0);
    record.conditions = vec![];
    let verdict = evaluate(&record);
    assert!(!verdict.eligible);
    assert!(verdict.reason.contains("BMI of 28.0"));
    assert!(verdict.reason.contains("requirement is 30"));
    assert!(verdict.reason.contains("or 27 with weight-related"));
}

#[test]
fn condition_threshold_needs_a_qualifying_condition() {
    let mut record = base_record();
    record.bmi = Some(28.0);
    // A contraindicated tag is not in the weight-related set.
    record.conditions = vec![Condition::Pancreatitis];
    assert!(!evaluate(&record).eligible);
    record.conditions = vec![Condition::HighBloodPressure];
    assert!(evaluate(&record).eligible);
}

#[test]
fn highest_weight_reuses_current_height() {
    let mut record = base_record();
    record.height_cm = Some(200.0);
    record.bmi = Some(28.0);
    record.highest_weight_kg = Some(124.0); // 124 / 2.0^2 = 31.0
    let verdict = evaluate(&record);
    assert!(verdict.eligible);
}

#[test]
fn highest_weight_without_height_falls_back_to_current_bmi() {
    let mut record = base_record();
    record.height_cm = None;
    record.bmi = Some(28.0);
    record.highest_weight_kg = Some(200.0);
    assert!(!evaluate(&record).eligible);
}

#[test]
fn contraindication_routes_to_pharmacist_review_without_flipping() {
    let mut record = base_record();
    record.conditions = vec![Condition::Pancreatitis];
    let verdict = evaluate(&record);
    assert!(verdict.eligible);
    assert!(verdict.reason.contains("pharmacist"));
}

#[test]
fn rule_sets_do_not_overlap() {
    for c in CONTRAINDICATED_CONDITIONS {
        assert!(!WEIGHT_RELATED_CONDITIONS.contains(&c));
    }
}

#[test]
fn verdicts_are_reproducible_from_fixtures() {
    let record: IntakeRecord = hale_test_fixtures::load_record("eligible-basic").unwrap();
    let verdict = evaluate(&record);
    assert!(verdict.eligible);
    assert!(verdict.reason.is_empty());

    let record: IntakeRecord = hale_test_fixtures::load_record("eligible-highest-weight").unwrap();
    assert!(evaluate(&record).eligible);

    let record: IntakeRecord = hale_test_fixtures::load_record("ineligible-bmi").unwrap();
    let verdict = evaluate(&record);
    assert!(!verdict.eligible);
    assert!(verdict.reason.contains("BMI of 28.0"));

    let record: IntakeRecord = hale_test_fixtures::load_record("ineligible-pregnancy").unwrap();
    assert!(!evaluate(&record).eligible);

    let record: IntakeRecord = hale_test_fixtures::load_record("pharmacist-review").unwrap();
    let verdict = evaluate(&record);
    assert!(verdict.eligible);
    assert!(verdict.reason.contains("pharmacist"));
}

#[test]
fn evaluation_is_deterministic() {
    let record = base_record();
    assert_eq!(evaluate(&record), evaluate(&record));
}
