//! Stream Override Policy
//!
//! The conditional ladder evaluated on every intercepted call, before the
//! host's own method body runs. Each step that trips defers to the host; only
//! a call that passes every gate gets its result forced to the music stream.

use mediakey_host::{AudioServiceState, HostResult, StreamType};

/// Window for the recent-music-activity query, in milliseconds
pub const RECENT_MUSIC_WINDOW_MS: u32 = 5000;

/// Outcome of one policy evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Leave the host's own result standing
    NoOverride,

    /// Replace the call's result with the music stream
    OverrideToMusicStream,
}

/// Evaluate the override policy for one intercepted call
///
/// `requested` is the stream type argument as passed to the call; `state` is
/// the live view of the host audio service. Queries run lazily in ladder
/// order, so a tripped gate stops all later host reads (the remote-stream
/// query in particular also updates host-side bookkeeping and must stay
/// last). The individual reads take no lock; the host serializes calls into
/// its audio service, and a torn view across reads is inherited host
/// behavior.
///
/// Host read failures propagate unmodified; there is no fallback decision.
pub fn evaluate(requested: StreamType, state: &dyn AudioServiceState) -> HostResult<Decision> {
    if !state.voice_capable()? {
        return Ok(Decision::NoOverride);
    }

    if state.in_communication()? {
        return Ok(Decision::NoOverride);
    }

    if state.volume_fixed()? {
        return Ok(Decision::NoOverride);
    }

    // The caller already asked for something specific; do not interfere
    if !requested.is_default_request() {
        return Ok(Decision::NoOverride);
    }

    if state.music_active_recently(RECENT_MUSIC_WINDOW_MS)? {
        return Ok(Decision::NoOverride);
    }

    if state.remote_stream_active(StreamType::MUSIC)? {
        return Ok(Decision::NoOverride);
    }

    Ok(Decision::OverrideToMusicStream)
}
