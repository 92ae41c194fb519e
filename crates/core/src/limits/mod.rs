//! Category limits module - limit profiles, level adjustment, violation
//! detection and presets.

mod limits_model;
mod limits_service;
mod presets;

#[cfg(test)]
mod limits_service_tests;

pub use limits_model::{CategoryLimit, LimitProfile, LimitViolation, ViolationKind};
pub use limits_service::{apply_level_reduction, detect_violations};
pub use presets::{
    builtin_presets, create_custom_preset, preset_for_dominance, DominanceRange, LimitPreset,
    DEFAULT_PRESET_ID,
};
