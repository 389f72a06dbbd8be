#![cfg(target_arch = "wasm32")]
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use hale_intake_wasm::{abi_version, HaleIntake};
use serde_json::json;

wasm_bindgen_test_configure!(run_in_browser);

fn js(v: serde_json::Value) -> JsValue {
    swb::to_value(&v).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    assert!(HaleIntake::new(JsValue::UNDEFINED).is_ok());
    assert!(HaleIntake::new(JsValue::NULL).is_ok());
}

#[wasm_bindgen_test]
fn advance_with_valid_measurements() {
    let mut wizard = HaleIntake::new(JsValue::UNDEFINED).unwrap();
    let out = wizard
        .advance(js(json!({
            "step": "measurements",
            "height": { "unit": "metric", "cm": 180.0 },
            "weight": { "unit": "metric", "kg": 81.0 }
        })))
        .unwrap();
    let out: serde_json::Value = swb::from_value(out).unwrap();
    assert_eq!(wizard.step(), 2);
    assert!(out["changes"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c.get("showStep").is_some()));
}

#[wasm_bindgen_test]
fn invalid_step_keeps_cursor() {
    let mut wizard = HaleIntake::new(JsValue::UNDEFINED).unwrap();
    wizard
        .advance(js(json!({
            "step": "measurements",
            "height": { "unit": "metric", "cm": 90.0 },
            "weight": { "unit": "metric" }
        })))
        .unwrap();
    assert_eq!(wizard.step(), 1);
}

#[wasm_bindgen_test]
fn preview_bmi_round_trip() {
    let mut wizard = HaleIntake::new(JsValue::UNDEFINED).unwrap();
    let out = wizard
        .preview_bmi(js(json!({
            "height": { "unit": "imperial", "ft": 5, "in": 11 },
            "weight": { "unit": "imperial", "st": 12, "lbs": 7 }
        })))
        .unwrap();
    let out: serde_json::Value = swb::from_value(out).unwrap();
    assert!(!out["changes"].as_array().unwrap().is_empty());
}

#[wasm_bindgen_test]
fn toggle_condition_applies_exclusivity() {
    let wizard = HaleIntake::new(JsValue::UNDEFINED).unwrap();
    let out = wizard
        .toggle_condition(js(json!(["type2diabetes"])), js(json!("none")))
        .unwrap();
    let out: Vec<String> = swb::from_value(out).unwrap();
    assert_eq!(out, vec!["none"]);
}

#[wasm_bindgen_test]
fn dob_years_descend_from_adult_cutoff() {
    let wizard = HaleIntake::new(JsValue::UNDEFINED).unwrap();
    let years = wizard.dob_years();
    assert_eq!(years.len(), 68);
    assert!(years[0] > years[years.len() - 1]);
}
