//! Hale Motion Core (engine-agnostic)
//!
//! Declarative entrance/scroll/parallax effect plan for the marketing pages,
//! plus a controller that mounts it against an injected effects backend. The
//! core never does tweening or scroll-position math; it only describes what
//! the external engine should run, and reacts to reduced-motion and
//! orientation signals.

pub mod config;
pub mod controller;
pub mod plan;
pub mod types;

// Re-exports for consumers (adapters)
pub use config::MotionConfig;
pub use controller::{MotionBackend, MotionController, Preferences};
pub use plan::{initial_states, plan_by_phase, site_plan, visible_state};
pub use types::{Ease, EffectDef, Phase, PropertySet, Timing, TriggerSpec, ViewportClass};
