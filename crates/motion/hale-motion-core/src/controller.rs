//! Mounts the effect plan against an injected backend and reacts to
//! preference and viewport signals.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::MotionConfig;
use crate::plan::{initial_states, site_plan, visible_state, HERO_TARGETS, REVEAL_TARGETS};
use crate::types::{EffectDef, Phase, PropertySet, ViewportClass};

/// Host-provided effects engine. The adapter implements this over the real
/// tween/scroll library; tests implement it with a recorder.
pub trait MotionBackend {
    /// Apply properties immediately, without animation.
    fn set(&mut self, target: &str, props: &PropertySet);
    /// Mount one effect definition.
    fn tween(&mut self, def: &EffectDef);
    /// Tear down every mounted effect and trigger.
    fn kill_all(&mut self);
    /// Recompute trigger positions after a layout change.
    fn refresh(&mut self);
    /// Ask the host to reload the page. Used when motion is re-enabled:
    /// entrance state cannot be reconstructed mid-session.
    fn request_reload(&mut self);
}

/// Runtime signals sampled by the host at startup.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub reduced_motion: bool,
    pub viewport: ViewportClass,
}

/// Owns the mounted plan for one page session.
pub struct MotionController {
    cfg: MotionConfig,
    prefs: Preferences,
    mounted: bool,
}

impl MotionController {
    pub fn new(cfg: MotionConfig) -> Self {
        MotionController {
            cfg,
            prefs: Preferences::default(),
            mounted: false,
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.cfg
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    /// Classify a viewport width against the configured breakpoint.
    pub fn classify_width(&self, width_px: u32) -> ViewportClass {
        if width_px <= self.cfg.mobile_breakpoint_px {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    /// Mount the site plan. With reduced motion everything is made visible
    /// instead, and only the counters still run.
    pub fn init(&mut self, prefs: Preferences, backend: &mut dyn MotionBackend) {
        self.prefs = prefs;
        if prefs.reduced_motion {
            self.apply_reduced_fallback(backend);
        } else {
            for (target, props) in initial_states(prefs.viewport) {
                backend.set(&target, &props);
            }
            for def in site_plan(prefs.viewport) {
                backend.tween(&def);
            }
        }
        self.mounted = true;
    }

    /// Live change of the reduced-motion preference. Enabling strips the
    /// page back to its static state; disabling needs a reload because the
    /// entrance sequence has already been consumed.
    pub fn set_reduced_motion(&mut self, enabled: bool, backend: &mut dyn MotionBackend) {
        if self.prefs.reduced_motion == enabled {
            return;
        }
        self.prefs.reduced_motion = enabled;
        if enabled {
            info!("reduced motion enabled; tearing down effects");
            backend.kill_all();
            self.apply_reduced_fallback(backend);
        } else {
            info!("reduced motion disabled; requesting reload");
            backend.request_reload();
        }
    }

    /// Orientation changed: trigger positions are stale, so ask the engine
    /// to re-measure. The host is responsible for debouncing the event.
    pub fn orientation_changed(&mut self, backend: &mut dyn MotionBackend) {
        backend.refresh();
    }

    fn apply_reduced_fallback(&self, backend: &mut dyn MotionBackend) {
        let visible = visible_state();
        for target in HERO_TARGETS.iter().chain(REVEAL_TARGETS) {
            backend.set(target, &visible);
        }
        backend.set(".hero-video", &visible);
        // Counters are informational, not decorative; keep them.
        for def in site_plan(self.prefs.viewport) {
            if def.phase == Phase::Counter {
                backend.tween(&def);
            }
        }
    }
}
