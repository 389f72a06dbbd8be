//! wasm-bindgen wrapper around the motion controller.
//!
//! The page script supplies a callbacks object bridging to the tween/scroll
//! engine; the controller decides what to mount and when to tear down, and
//! the callbacks do the DOM work. Missing callbacks are tolerated so a page
//! can opt out of pieces it does not use (e.g. no counters).

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use hale_motion_core::{
    site_plan, EffectDef, MotionBackend, MotionConfig, MotionController, Preferences, PropertySet,
    ViewportClass,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn callback(obj: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(obj, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
}

/// Bump when the JS-visible surface changes shape.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

/// Backend over host callbacks. Callback failures are swallowed: a broken
/// animation must never take the page down.
struct JsBackend {
    set: Option<js_sys::Function>,
    tween: Option<js_sys::Function>,
    kill_all: Option<js_sys::Function>,
    refresh: Option<js_sys::Function>,
    request_reload: Option<js_sys::Function>,
}

impl JsBackend {
    fn from_callbacks(callbacks: &JsValue) -> Self {
        JsBackend {
            set: callback(callbacks, "set"),
            tween: callback(callbacks, "tween"),
            kill_all: callback(callbacks, "killAll"),
            refresh: callback(callbacks, "refresh"),
            request_reload: callback(callbacks, "requestReload"),
        }
    }
}

impl MotionBackend for JsBackend {
    fn set(&mut self, target: &str, props: &PropertySet) {
        if let (Some(f), Ok(props)) = (&self.set, swb::to_value(props)) {
            let _ = f.call2(&JsValue::NULL, &JsValue::from_str(target), &props);
        }
    }

    fn tween(&mut self, def: &EffectDef) {
        if let (Some(f), Ok(def)) = (&self.tween, swb::to_value(def)) {
            let _ = f.call1(&JsValue::NULL, &def);
        }
    }

    fn kill_all(&mut self) {
        if let Some(f) = &self.kill_all {
            let _ = f.call0(&JsValue::NULL);
        }
    }

    fn refresh(&mut self) {
        if let Some(f) = &self.refresh {
            let _ = f.call0(&JsValue::NULL);
        }
    }

    fn request_reload(&mut self) {
        if let Some(f) = &self.request_reload {
            let _ = f.call0(&JsValue::NULL);
        }
    }
}

#[wasm_bindgen]
pub struct HaleMotion {
    core: MotionController,
    backend: JsBackend,
}

#[wasm_bindgen]
impl HaleMotion {
    /// Create a controller. `config` is a JSON config object or
    /// undefined/null for defaults; `callbacks` bridges to the engine:
    ///   new HaleMotion(null, { set, tween, killAll, refresh, requestReload })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, callbacks: JsValue) -> Result<HaleMotion, JsError> {
        console_error_panic_hook::set_once();

        let cfg: MotionConfig = if jsvalue_is_undefined_or_null(&config) {
            MotionConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(HaleMotion {
            core: MotionController::new(cfg),
            backend: JsBackend::from_callbacks(&callbacks),
        })
    }

    /// Mount the plan for the sampled preferences:
    ///   motion.init({ reducedMotion: false, viewport: "desktop" })
    pub fn init(&mut self, prefs: JsValue) -> Result<(), JsError> {
        let prefs: Preferences = if jsvalue_is_undefined_or_null(&prefs) {
            Preferences::default()
        } else {
            swb::from_value(prefs).map_err(|e| JsError::new(&format!("prefs parse error: {e}")))?
        };
        self.core.init(prefs, &mut self.backend);
        Ok(())
    }

    /// Live `prefers-reduced-motion` change.
    #[wasm_bindgen(js_name = set_reduced_motion)]
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.core.set_reduced_motion(enabled, &mut self.backend);
    }

    /// Orientation change (host debounces); re-measures trigger positions.
    #[wasm_bindgen(js_name = orientation_changed)]
    pub fn orientation_changed(&mut self) {
        self.core.orientation_changed(&mut self.backend);
    }

    /// Tear down every mounted effect and trigger (page teardown).
    pub fn kill(&mut self) {
        self.backend.kill_all();
    }

    /// Viewport class ("desktop" | "mobile") for a width in CSS pixels.
    #[wasm_bindgen(js_name = classify_width)]
    pub fn classify_width(&self, width_px: u32) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.classify_width(width_px))
            .map_err(|e| JsError::new(&format!("viewport error: {e}")))
    }

    /// The effect plan for a viewport class, for inspection and tests.
    pub fn plan(&self, viewport: JsValue) -> Result<JsValue, JsError> {
        let viewport: ViewportClass = if jsvalue_is_undefined_or_null(&viewport) {
            ViewportClass::default()
        } else {
            swb::from_value(viewport)
                .map_err(|e| JsError::new(&format!("viewport parse error: {e}")))?
        };
        swb::to_value(&site_plan(viewport)).map_err(|e| JsError::new(&format!("plan error: {e}")))
    }
}
