//! wasm-bindgen wrapper around the intake wizard.
//!
//! The page script reads the active step's inputs into a plain form object,
//! calls `advance`/`retreat`/`submit`, and applies the returned `changes`
//! list to the DOM. `events` carry the fire-and-forget submission request and
//! lifecycle signals; transport is the host's job.

use chrono::Utc;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use hale_intake_core::{
    measures, toggle_condition, Condition, Config, MeasurementsForm, PaymentKind, StepForm, Wizard,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Bump when the JS-visible surface changes shape.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

#[wasm_bindgen]
pub struct HaleIntake {
    core: Wizard,
}

#[wasm_bindgen]
impl HaleIntake {
    /// Create a wizard. Pass a JSON config object or undefined/null for
    /// defaults. Example:
    ///   new HaleIntake({ oneOffUrl: "https://..." })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<HaleIntake, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(HaleIntake {
            core: Wizard::new(cfg, Utc::now().date_naive()),
        })
    }

    /// Validate the current step form and move forward. Returns the outputs
    /// object `{ changes, events }`.
    pub fn advance(&mut self, form: JsValue) -> Result<JsValue, JsError> {
        let form: StepForm = swb::from_value(form)
            .map_err(|e| JsError::new(&format!("advance form parse error: {e}")))?;
        let out = self
            .core
            .advance(form)
            .map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Move back one step (no validation, no persistence).
    pub fn retreat(&mut self) -> Result<JsValue, JsError> {
        let out = self
            .core
            .retreat()
            .map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Final-step submission; returns the outputs including the queued
    /// submission event when an endpoint is configured.
    pub fn submit(&mut self, form: JsValue) -> Result<JsValue, JsError> {
        let form: StepForm = swb::from_value(form)
            .map_err(|e| JsError::new(&format!("submit form parse error: {e}")))?;
        let out = self
            .core
            .submit(form)
            .map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Live BMI readout for the measurements step.
    #[wasm_bindgen(js_name = preview_bmi)]
    pub fn preview_bmi(&mut self, form: JsValue) -> Result<JsValue, JsError> {
        let form: MeasurementsForm = swb::from_value(form)
            .map_err(|e| JsError::new(&format!("measurements parse error: {e}")))?;
        let out = self.core.preview_bmi(&form);
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Live age readout for the date-of-birth selects.
    #[wasm_bindgen(js_name = preview_age)]
    pub fn preview_age(
        &mut self,
        day: Option<u32>,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<JsValue, JsError> {
        let out = self.core.preview_age(day, month, year);
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Apply the conditions-checkbox exclusivity rule. Takes the currently
    /// checked tags plus the tag just toggled; returns the new checked set.
    #[wasm_bindgen(js_name = toggle_condition)]
    pub fn toggle_condition(&self, selected: JsValue, toggled: JsValue) -> Result<JsValue, JsError> {
        let mut selected: Vec<Condition> = swb::from_value(selected)
            .map_err(|e| JsError::new(&format!("conditions parse error: {e}")))?;
        let toggled: Condition = swb::from_value(toggled)
            .map_err(|e| JsError::new(&format!("condition parse error: {e}")))?;
        toggle_condition(&mut selected, toggled);
        swb::to_value(&selected).map_err(|e| JsError::new(&format!("conditions error: {e}")))
    }

    /// Redirect URL for a payment button ("one-off" | "subscription").
    /// Errors when the target URL is an unconfigured placeholder — the host
    /// must show a blocking notice instead of navigating.
    #[wasm_bindgen(js_name = payment_url)]
    pub fn payment_url(&self, kind: JsValue) -> Result<String, JsError> {
        let kind: PaymentKind = swb::from_value(kind)
            .map_err(|e| JsError::new(&format!("payment kind parse error: {e}")))?;
        self.core
            .payment_url(kind)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Years for the date-of-birth select, newest first (18 to 85 years ago).
    #[wasm_bindgen(js_name = dob_years)]
    pub fn dob_years(&self) -> Vec<i32> {
        measures::dob_year_range(Utc::now().date_naive())
            .rev()
            .collect()
    }

    /// Current step number (1-based).
    pub fn step(&self) -> u8 {
        self.core.step().number()
    }

    #[wasm_bindgen(js_name = is_complete)]
    pub fn is_complete(&self) -> bool {
        self.core.is_complete()
    }

    /// Snapshot of the intake record (debugging / host-side export).
    pub fn record(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.core.record()).map_err(|e| JsError::new(&format!("record error: {e}")))
    }
}
