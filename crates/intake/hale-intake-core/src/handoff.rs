//! Payment handoff: the redirect URL built for the external payment forms.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::HandoffError;
use crate::record::IntakeRecord;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PaymentKind {
    #[serde(rename = "one-off")]
    OneOff,
    #[serde(rename = "subscription")]
    Subscription,
}

impl PaymentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentKind::OneOff => "one-off",
            PaymentKind::Subscription => "subscription",
        }
    }
}

/// Final redirect URL: base + prefill query. Name and email are only included
/// when non-empty; the payment type tag is always appended. An unconfigured
/// base URL aborts — this must never silently navigate to an invalid
/// destination.
pub fn payment_redirect_url(
    cfg: &Config,
    record: &IntakeRecord,
    kind: PaymentKind,
) -> Result<String, HandoffError> {
    let base = match kind {
        PaymentKind::OneOff => &cfg.one_off_url,
        PaymentKind::Subscription => &cfg.subscription_url,
    };
    if !cfg.is_configured(base) {
        log::warn!("payment form url not configured for {}", kind.as_str());
        return Err(HandoffError::Unconfigured { kind });
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    if !record.full_name.is_empty() {
        query.append_pair("name", &record.full_name);
    }
    if !record.email.is_empty() {
        query.append_pair("email", &record.email);
    }
    query.append_pair("paymentType", kind.as_str());

    Ok(format!("{base}?{}", query.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefills_name_and_email() {
        let mut record = IntakeRecord::default();
        record.full_name = "Jo Smith".into();
        record.email = "jo@example.com".into();
        let url = payment_redirect_url(&Config::default(), &record, PaymentKind::OneOff).unwrap();
        assert!(url.starts_with("https://pci.jotform.com/form/260355646726059?"));
        assert!(url.contains("name=Jo+Smith"));
        assert!(url.contains("email=jo%40example.com"));
        assert!(url.contains("paymentType=one-off"));
    }

    #[test]
    fn empty_prefills_are_omitted() {
        let record = IntakeRecord::default();
        let url =
            payment_redirect_url(&Config::default(), &record, PaymentKind::Subscription).unwrap();
        assert!(!url.contains("name="));
        assert!(!url.contains("email="));
        assert!(url.ends_with("?paymentType=subscription"));
    }

    #[test]
    fn placeholder_url_aborts() {
        let cfg = Config {
            one_off_url: "https://example.com/YOUR_FORM_ID".into(),
            ..Config::default()
        };
        let err = payment_redirect_url(&cfg, &IntakeRecord::default(), PaymentKind::OneOff)
            .unwrap_err();
        assert_eq!(
            err,
            HandoffError::Unconfigured {
                kind: PaymentKind::OneOff
            }
        );
    }
}
