//! Unit handling and derived metrics (BMI, age).
//!
//! Measurements arrive in whichever unit system the visitor toggled; the core
//! only ever stores canonical metric values. A measurement with no usable
//! input resolves to `None`, never to zero, so an incomplete form cannot
//! produce a false BMI signal.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const CM_PER_FOOT: f64 = 30.48;
pub const CM_PER_INCH: f64 = 2.54;
pub const KG_PER_STONE: f64 = 6.35029;
pub const KG_PER_POUND: f64 = 0.453592;

/// Height as entered, tagged by the active unit toggle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum HeightInput {
    Metric {
        #[serde(default)]
        cm: Option<f64>,
    },
    Imperial {
        #[serde(default)]
        ft: Option<f64>,
        #[serde(rename = "in", default)]
        inches: Option<f64>,
    },
}

impl Default for HeightInput {
    fn default() -> Self {
        HeightInput::Metric { cm: None }
    }
}

impl HeightInput {
    /// Canonical height in centimeters, or `None` when the input is unusable.
    /// Imperial requires a positive feet figure; inches alone are ignored.
    pub fn resolve_cm(&self) -> Option<f64> {
        match *self {
            HeightInput::Metric { cm } => positive(cm),
            HeightInput::Imperial { ft, inches } => {
                let ft = positive(ft)?;
                let inches = inches.unwrap_or(0.0).max(0.0);
                Some(ft * CM_PER_FOOT + inches * CM_PER_INCH)
            }
        }
    }
}

/// Weight as entered, tagged by the active unit toggle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum WeightInput {
    Metric {
        #[serde(default)]
        kg: Option<f64>,
    },
    Imperial {
        #[serde(default)]
        st: Option<f64>,
        #[serde(default)]
        lbs: Option<f64>,
    },
}

impl Default for WeightInput {
    fn default() -> Self {
        WeightInput::Metric { kg: None }
    }
}

impl WeightInput {
    /// Canonical weight in kilograms, or `None` when the input is unusable.
    /// Imperial requires a positive stone figure; pounds alone are ignored.
    pub fn resolve_kg(&self) -> Option<f64> {
        match *self {
            WeightInput::Metric { kg } => positive(kg),
            WeightInput::Imperial { st, lbs } => {
                let st = positive(st)?;
                let lbs = lbs.unwrap_or(0.0).max(0.0);
                Some(st * KG_PER_STONE + lbs * KG_PER_POUND)
            }
        }
    }
}

fn positive(v: Option<f64>) -> Option<f64> {
    v.filter(|v| *v > 0.0)
}

/// BMI = weight(kg) / height(m)^2. `None` for non-positive dependencies.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Display bands for the live BMI readout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    ObeseI,
    ObeseII,
    ObeseIII,
}

impl BmiCategory {
    pub fn of(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Healthy
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObeseI
        } else if bmi < 40.0 {
            BmiCategory::ObeseII
        } else {
            BmiCategory::ObeseIII
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseI => "Obese (Class I)",
            BmiCategory::ObeseII => "Obese (Class II)",
            BmiCategory::ObeseIII => "Obese (Class III)",
        }
    }

    /// CSS class used by the readout badge.
    pub fn css_class(self) -> &'static str {
        match self {
            BmiCategory::Underweight | BmiCategory::Healthy => "healthy",
            BmiCategory::Overweight => "overweight",
            BmiCategory::ObeseI | BmiCategory::ObeseII | BmiCategory::ObeseIII => "obese",
        }
    }
}

/// Full elapsed years between `dob` and `today` (not calendar-year difference).
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Build a date of birth from select values. `None` for impossible dates.
pub fn dob_from_parts(day: u32, month: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Years offered by the date-of-birth select: 18 to 85 years before `today`.
pub fn dob_year_range(today: NaiveDate) -> std::ops::RangeInclusive<i32> {
    (today.year() - 85)..=(today.year() - 18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imperial_height_resolves() {
        let h = HeightInput::Imperial {
            ft: Some(5.0),
            inches: Some(11.0),
        };
        let cm = h.resolve_cm().unwrap();
        assert!((cm - 180.34).abs() < 1e-9, "got {cm}");
    }

    #[test]
    fn imperial_weight_resolves() {
        let w = WeightInput::Imperial {
            st: Some(12.0),
            lbs: Some(0.0),
        };
        let kg = w.resolve_kg().unwrap();
        assert!((kg - 76.20348).abs() < 1e-9, "got {kg}");
    }

    #[test]
    fn absence_propagates() {
        assert_eq!(HeightInput::Metric { cm: None }.resolve_cm(), None);
        assert_eq!(HeightInput::Metric { cm: Some(0.0) }.resolve_cm(), None);
        assert_eq!(HeightInput::Metric { cm: Some(-3.0) }.resolve_cm(), None);
        // Inches without feet are not a usable height.
        let h = HeightInput::Imperial {
            ft: None,
            inches: Some(11.0),
        };
        assert_eq!(h.resolve_cm(), None);
        let w = WeightInput::Imperial {
            st: Some(0.0),
            lbs: Some(140.0),
        };
        assert_eq!(w.resolve_kg(), None);
    }

    #[test]
    fn bmi_exact() {
        assert_eq!(bmi(180.0, 81.0), Some(25.0));
        assert_eq!(bmi(0.0, 81.0), None);
        assert_eq!(bmi(180.0, 0.0), None);
    }

    #[test]
    fn category_bands() {
        assert_eq!(BmiCategory::of(17.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::of(24.99), BmiCategory::Healthy);
        assert_eq!(BmiCategory::of(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::of(30.0), BmiCategory::ObeseI);
        assert_eq!(BmiCategory::of(35.0), BmiCategory::ObeseII);
        assert_eq!(BmiCategory::of(40.0), BmiCategory::ObeseIII);
        assert_eq!(BmiCategory::of(24.99).css_class(), "healthy");
        assert_eq!(BmiCategory::of(33.0).css_class(), "obese");
    }

    #[test]
    fn age_counts_full_years() {
        let dob = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let on = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(age_on(dob, before), 23);
        assert_eq!(age_on(dob, on), 24);
    }

    #[test]
    fn dob_year_bounds() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let range = dob_year_range(today);
        assert_eq!(*range.start(), 1941);
        assert_eq!(*range.end(), 2008);
    }

    #[test]
    fn impossible_dob_rejected() {
        assert!(dob_from_parts(31, 2, 1990).is_none());
        assert!(dob_from_parts(29, 2, 2000).is_some());
    }
}
