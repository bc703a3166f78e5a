//! Stream Type Call Guard
//!
//! The guard installed on `getActiveStreamType(int)`. Each invocation builds
//! the version-appropriate state reader over the live receiver, evaluates the
//! override policy, and on an override writes the music stream into the
//! call's result slot, suppressing the host's own method body.

use std::sync::Arc;

use tracing::debug;

use mediakey_host::{
    service_state_for, ApiLevel, CallGuard, HostClass, HostObject, HostResult, InterceptedCall,
    StreamType,
};

use crate::policy::{evaluate, Decision};

/// Before-call guard forcing the music stream as the default active stream
///
/// Holds only handles resolved at initialization; read-only afterward. All
/// per-call state is borrowed from the intercepted call and discarded when
/// the callback returns.
pub struct StreamTypeGuard {
    level: ApiLevel,
    audio_manager: Arc<dyn HostObject>,
    audio_system: Arc<dyn HostClass>,
    debug_logging: bool,
}

impl StreamTypeGuard {
    pub fn new(
        level: ApiLevel,
        audio_manager: Arc<dyn HostObject>,
        audio_system: Arc<dyn HostClass>,
        debug_logging: bool,
    ) -> Self {
        Self {
            level,
            audio_manager,
            audio_system,
            debug_logging,
        }
    }
}

impl CallGuard for StreamTypeGuard {
    fn before_call(&self, call: &mut dyn InterceptedCall) -> HostResult<()> {
        let requested = StreamType(call.int_arg(0)?);

        let decision = {
            let state = service_state_for(
                self.level,
                call.receiver(),
                self.audio_manager.as_ref(),
                self.audio_system.as_ref(),
            );
            evaluate(requested, state.as_ref())?
        };

        if decision == Decision::OverrideToMusicStream {
            call.override_result(StreamType::MUSIC.raw());
            if self.debug_logging {
                debug!("Intercepted active stream query; forcing music stream");
            }
        }

        Ok(())
    }
}
