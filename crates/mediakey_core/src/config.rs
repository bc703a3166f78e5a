//! Patch Configuration

use serde::{Deserialize, Serialize};

use mediakey_host::PreferenceSource;

/// Emit diagnostic trace output
pub const PREF_DEBUG: &str = "pref_debug";

/// Target the LG vendor variant of the audio service
pub const PREF_COMPATIBILITY_MODE_LG: &str = "pref_compatibility_mode_lg";

/// Whether volume keys control the music stream or the ringer volume
pub const PREF_VOLUME_KEYS_CONTROL_MUSIC: &str = "pref_volume_keys_control_music";

/// Options resolved once at initialization; immutable afterward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchConfig {
    /// Emit diagnostic trace output
    pub debug_logging: bool,

    /// Target the LG vendor variant class/field names
    pub vendor_compat: bool,

    /// Install the stream override at all
    pub volume_keys_control_music: bool,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            debug_logging: false,
            vendor_compat: false,
            volume_keys_control_music: true,
        }
    }
}

impl PatchConfig {
    /// Resolve the configuration from a preference source
    pub fn from_prefs(prefs: &dyn PreferenceSource) -> Self {
        Self {
            debug_logging: prefs.bool_pref(PREF_DEBUG, false),
            vendor_compat: prefs.bool_pref(PREF_COMPATIBILITY_MODE_LG, false),
            volume_keys_control_music: prefs.bool_pref(PREF_VOLUME_KEYS_CONTROL_MUSIC, true),
        }
    }
}
