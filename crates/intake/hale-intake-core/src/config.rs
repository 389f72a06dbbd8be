//! Core configuration for hale-intake-core.

use serde::{Deserialize, Serialize};

/// External endpoints for the payment handoff and the fire-and-forget
/// submission. A URL containing the placeholder marker counts as
/// unconfigured; actions against it abort instead of navigating.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Payment intake form for a one-off purchase.
    pub one_off_url: String,
    /// Payment intake form for the subscription plan.
    pub subscription_url: String,
    /// Endpoint receiving the form-encoded intake record at submission.
    pub submission_endpoint: String,
    /// Substring marking a URL as an unconfigured template value.
    pub placeholder_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            one_off_url: "https://pci.jotform.com/form/260355646726059".to_string(),
            subscription_url: "https://pci.jotform.com/form/260355571683058".to_string(),
            submission_endpoint: "https://formspree.io/f/YOUR_FORM_ID".to_string(),
            placeholder_marker: "YOUR_".to_string(),
        }
    }
}

impl Config {
    pub fn is_configured(&self, url: &str) -> bool {
        !url.is_empty() && !url.contains(&self.placeholder_marker)
    }
}
