//! Mediakey Core - Default-Stream Override Patch
//!
//! Forces the music stream as the default active stream on the host audio
//! service, so volume keys favor music playback when no stream type was
//! explicitly requested. This crate provides:
//! - Configuration resolution from a preference source
//! - The stream-override policy ladder
//! - The call guard installed on `getActiveStreamType(int)`
//! - The one-shot [`init`] entry point returning owned handles
//!
//! # Architecture
//!
//! ```text
//! host startup ──▶ init(prefs, runtime)
//!                    │ resolve PatchConfig + HookTarget, verify classes
//!                    ▼
//!              StreamTypeGuard installed on getActiveStreamType(int)
//!                    │ per call: versioned reader over live receiver
//!                    ▼
//!              evaluate(...) ──▶ NoOverride | OverrideToMusicStream
//! ```
//!
//! The module never writes host fields; its only host-visible effect is the
//! intercepted call's result slot.

mod config;
mod guard;
mod patch;
mod policy;

#[cfg(test)]
mod testutil;

pub use config::{
    PatchConfig, PREF_COMPATIBILITY_MODE_LG, PREF_DEBUG, PREF_VOLUME_KEYS_CONTROL_MUSIC,
};
pub use guard::StreamTypeGuard;
pub use patch::{init, PatchHandles, ACTIVE_STREAM_METHOD};
pub use policy::{evaluate, Decision, RECENT_MUSIC_WINDOW_MS};

// Re-export host types for convenience
pub use mediakey_host::{
    ApiLevel, AudioServiceState, FilePreferences, GuardToken, HookRuntime, HookTarget, HostError,
    HostResult, PreferenceSource, StreamType,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_exports() {
        // Verify public API is accessible
        let _config = PatchConfig::default();
        let _decision = Decision::NoOverride;
        assert_eq!(ACTIVE_STREAM_METHOD.name, "getActiveStreamType");
    }
}
