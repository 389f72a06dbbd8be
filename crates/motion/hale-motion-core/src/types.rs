//! Data model for declarative motion requests.
//!
//! An [`EffectDef`] is everything the external engine needs to run one
//! effect: target selector, property deltas, timing, and an optional
//! viewport trigger. Wire names follow the engine's own vocabulary so an
//! adapter can pass definitions through with minimal translation.

use serde::{Deserialize, Serialize};

/// Property deltas applied by a set or tween. `None` leaves the property
/// untouched; `clear_props` removes inline styles after completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertySet {
    pub opacity: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    pub clear_props: bool,
}

impl PropertySet {
    pub fn opacity(v: f32) -> Self {
        PropertySet {
            opacity: Some(v),
            ..Default::default()
        }
    }

    pub fn hidden_shifted(y: f32) -> Self {
        PropertySet {
            opacity: Some(0.0),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn revealed() -> Self {
        PropertySet {
            opacity: Some(1.0),
            y: Some(0.0),
            ..Default::default()
        }
    }
}

/// Easing curves used by the site, named as the engine names them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Ease {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "power1.out")]
    Power1Out,
    #[default]
    #[serde(rename = "power2.out")]
    Power2Out,
    #[serde(rename = "power2.inOut")]
    Power2InOut,
    #[serde(rename = "power3.out")]
    Power3Out,
    #[serde(rename = "back.out(1.7)")]
    BackOut,
}

impl Ease {
    pub fn as_str(self) -> &'static str {
        match self {
            Ease::None => "none",
            Ease::Power1Out => "power1.out",
            Ease::Power2Out => "power2.out",
            Ease::Power2InOut => "power2.inOut",
            Ease::Power3Out => "power3.out",
            Ease::BackOut => "back.out(1.7)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timing {
    pub duration: f32,
    pub delay: f32,
    /// Per-element offset when the target matches several elements.
    pub stagger: f32,
    pub ease: Ease,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            duration: 0.6,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::Power2Out,
        }
    }
}

/// Viewport trigger bounds, in the scroll engine's position grammar
/// ("top 85%" = element top meets 85% of viewport height).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerSpec {
    /// Selector driving the trigger; empty means the effect's own target.
    pub trigger: String,
    pub start: String,
    pub end: Option<String>,
    /// Ties progress to scroll position (parallax); value is the catch-up lag.
    pub scrub: Option<f32>,
    pub once: bool,
    pub toggle_actions: Option<String>,
}

impl Default for TriggerSpec {
    fn default() -> Self {
        TriggerSpec {
            trigger: String::new(),
            start: "top 80%".to_string(),
            end: None,
            scrub: None,
            once: false,
            toggle_actions: None,
        }
    }
}

/// What kind of effect this is. `Counter` and `ChartDraw` are requests the
/// backend interprets against the element's own data (count target attribute,
/// path length); everything else is a plain property tween.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Entrance,
    ScrollReveal,
    Parallax,
    Counter,
    ChartDraw,
}

/// One declarative animation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectDef {
    pub target: String,
    pub phase: Phase,
    /// Starting properties when the tween sets its own origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<PropertySet>,
    pub to: PropertySet,
    #[serde(default)]
    pub timing: Timing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TriggerSpec>,
    /// Timeline position for entrance sequencing ("-=0.5" overlaps the
    /// previous tween by half a second).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    #[default]
    Desktop,
    Mobile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_wire_names_match_engine_vocabulary() {
        let v = serde_json::to_value(Ease::BackOut).unwrap();
        assert_eq!(v, serde_json::json!("back.out(1.7)"));
        assert_eq!(Ease::Power2InOut.as_str(), "power2.inOut");
    }

    #[test]
    fn effect_def_round_trips() {
        let def = EffectDef {
            target: ".step-card".into(),
            phase: Phase::ScrollReveal,
            from: None,
            to: PropertySet::revealed(),
            timing: Timing {
                duration: 0.7,
                stagger: 0.2,
                ..Default::default()
            },
            trigger: Some(TriggerSpec {
                trigger: ".steps-grid".into(),
                ..Default::default()
            }),
            position: None,
        };
        let v = serde_json::to_value(&def).unwrap();
        assert_eq!(v["phase"], "scrollReveal");
        let back: EffectDef = serde_json::from_value(v).unwrap();
        assert_eq!(back, def);
    }
}
