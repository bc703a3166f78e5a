//! Patch Initialization
//!
//! The one-shot entry point the host-integration layer calls at process
//! startup. Resolves configuration, picks the target class names, verifies
//! they exist on this host build, and conditionally installs the stream
//! guard. Runs exactly once per process lifetime; there is no
//! re-initialization path.

use std::sync::Arc;

use tracing::info;

use mediakey_host::{
    GuardToken, HookRuntime, HookTarget, HostResult, MethodSig, PreferenceSource,
};

use crate::config::PatchConfig;
use crate::guard::StreamTypeGuard;

/// The intercepted host method
pub const ACTIVE_STREAM_METHOD: MethodSig = MethodSig::new("getActiveStreamType", &["int"]);

/// Owned handles returned by [`init`]
#[derive(Debug, Clone)]
pub struct PatchHandles {
    /// The resolved configuration
    pub config: PatchConfig,

    /// The class/field names the patch targeted
    pub target: HookTarget,

    /// Installed-guard token; `None` when volume keys are left on the ringer
    pub guard: Option<GuardToken>,
}

/// Set the patch up against a host runtime
///
/// Target class resolution failure (a vendor variant absent on this build,
/// or vice versa) is fatal: the error propagates unmodified and nothing is
/// installed, leaving the host's own routing logic in charge.
pub fn init(
    prefs: &dyn PreferenceSource,
    runtime: &dyn HookRuntime,
) -> HostResult<PatchHandles> {
    let config = PatchConfig::from_prefs(prefs);
    let level = runtime.api_level();

    if config.debug_logging {
        info!("{}", level);
        for (key, value) in prefs.entries() {
            info!("{}={}", key, value);
        }
        if config.vendor_compat {
            info!("Using LG compatibility mode");
        }
    }

    let target = HookTarget::select(config.vendor_compat);
    let service_class = runtime.find_class(target.service_class)?;
    let audio_system = runtime.find_class(target.system_class)?;

    if config.debug_logging {
        info!(
            "Volume keys control {}",
            if config.volume_keys_control_music {
                "music"
            } else {
                "ringer"
            }
        );
    }

    let guard = if config.volume_keys_control_music {
        let audio_manager = runtime.audio_manager()?;
        let guard = Arc::new(StreamTypeGuard::new(
            level,
            audio_manager,
            audio_system,
            config.debug_logging,
        ));
        Some(runtime.hook_before(&service_class, &ACTIVE_STREAM_METHOD, guard)?)
    } else {
        None
    };

    Ok(PatchHandles {
        config,
        target,
        guard,
    })
}
