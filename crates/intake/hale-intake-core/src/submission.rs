//! Fire-and-forget submission of the completed record.
//!
//! The core only builds the request: endpoint plus a form-encoded body. The
//! adapter performs the transport and must not await it before showing the
//! verdict; a transport failure is at most a logged warning.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::eligibility::Verdict;
use crate::record::IntakeRecord;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub endpoint: String,
    pub body: String,
}

/// Build the outbound request, or `None` when the endpoint is unconfigured.
pub fn build_submission(
    cfg: &Config,
    record: &IntakeRecord,
    verdict: &Verdict,
) -> Option<SubmissionRequest> {
    if !cfg.is_configured(&cfg.submission_endpoint) {
        return None;
    }
    Some(SubmissionRequest {
        endpoint: cfg.submission_endpoint.clone(),
        body: encode_record(record, verdict),
    })
}

/// Flatten the record into ordered form-encoded pairs. Absent optionals are
/// skipped; condition tags repeat the `conditions` key.
pub fn encode_record(record: &IntakeRecord, verdict: &Verdict) -> String {
    let mut body = form_urlencoded::Serializer::new(String::new());

    let mut number = |key: &str, v: Option<f64>| {
        if let Some(v) = v {
            body.append_pair(key, &format!("{v:.2}"));
        }
    };
    number("heightCm", record.height_cm);
    number("weightKg", record.weight_kg);
    number("highestWeightKg", record.highest_weight_kg);
    number("targetWeightKg", record.target_weight_kg);

    if let Some(bmi) = record.bmi {
        body.append_pair("bmi", &format!("{bmi:.1}"));
    }
    if let Some(age) = record.age {
        body.append_pair("age", &age.to_string());
    }
    if let (Some(d), Some(m), Some(y)) = (record.dob_day, record.dob_month, record.dob_year) {
        body.append_pair("dob", &format!("{y:04}-{m:02}-{d:02}"));
    }
    if let Some(ethnicity) = record.ethnicity {
        body.append_pair("ethnicity", ethnicity.as_str());
    }
    if let Some(sex) = record.sex {
        body.append_pair("sex", sex.as_str());
    }
    if let Some(pregnancy) = record.pregnancy {
        body.append_pair("pregnancy", pregnancy.as_str());
    }
    for condition in &record.conditions {
        body.append_pair("conditions", condition.as_str());
    }
    if !record.medications.is_empty() {
        body.append_pair("medications", &record.medications);
    }
    if !record.allergies.is_empty() {
        body.append_pair("allergies", &record.allergies);
    }
    body.append_pair("fullName", &record.full_name);
    body.append_pair("email", &record.email);
    body.append_pair("phone", &record.phone);
    body.append_pair("contactMethod", record.contact_method.as_str());
    body.append_pair("consent", if record.consent { "true" } else { "false" });
    body.append_pair("marketing", if record.marketing { "true" } else { "false" });
    body.append_pair("eligible", if verdict.eligible { "true" } else { "false" });
    if !verdict.reason.is_empty() {
        body.append_pair("eligibilityReason", &verdict.reason);
    }

    body.finish()
}
