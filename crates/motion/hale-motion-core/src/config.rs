//! Core configuration for hale-motion-core.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionConfig {
    /// Widths at or below this are treated as the mobile viewport class.
    pub mobile_breakpoint_px: u32,
    /// Ask the scroll engine to ignore mobile URL-bar resizes.
    pub ignore_mobile_resize: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            ignore_mobile_resize: true,
        }
    }
}
