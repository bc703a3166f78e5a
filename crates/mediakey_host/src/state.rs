//! Audio Service State Readers
//!
//! The override policy consumes a version-agnostic view of the live audio
//! service; the readers here map that view onto the fields and methods each
//! host generation actually has. Selection happens once at setup, but every
//! reader is a per-call borrow over the live receiver: queries run lazily, in
//! whatever order the policy asks, and nothing is cached between calls.

use crate::error::HostResult;
use crate::object::{HostClass, HostObject, HostValue};
use crate::stream::StreamType;
use crate::version::ApiLevel;

const FIELD_VOICE_CAPABLE: &str = "mVoiceCapable";
const FIELD_MEDIA_FOCUS_CONTROL: &str = "mMediaFocusControl";
const METHOD_IN_COMMUNICATION: &str = "isInCommunication";
const METHOD_VOLUME_FIXED: &str = "isVolumeFixed";
const METHOD_MUSIC_ACTIVE_RECENTLY: &str = "isAfMusicActiveRecently";
const METHOD_STREAM_ACTIVE: &str = "isStreamActive";
const METHOD_REMOTE_STATE_ACTIVE: &str = "checkUpdateRemoteStateIfActive";

/// Version-agnostic view of the audio service state one policy evaluation
/// reads
///
/// Every method is a live host query; the remote-stream check also refreshes
/// host-side remote playback bookkeeping, so callers must only invoke it when
/// the decision actually reaches that step.
pub trait AudioServiceState {
    /// Whether the device routes telephony-style voice
    ///
    /// Hosts whose service no longer carries the flag report `true`.
    fn voice_capable(&self) -> HostResult<bool>;

    /// Whether a communication session (e.g., an active call) is in progress
    fn in_communication(&self) -> HostResult<bool>;

    /// Whether system volume is fixed (read-only-volume hardware)
    fn volume_fixed(&self) -> HostResult<bool>;

    /// Whether the music path was active within the last `window_ms`
    fn music_active_recently(&self, window_ms: u32) -> HostResult<bool>;

    /// Update and report whether a remote playback stream is active for
    /// `stream`
    fn remote_stream_active(&self, stream: StreamType) -> HostResult<bool>;
}

/// Reader for hosts below the KitKat boundary
///
/// Recent-music activity comes from the static audio system class and the
/// remote-stream query lives on the service object itself.
pub struct LegacyServiceReader<'a> {
    service: &'a dyn HostObject,
    audio_system: &'a dyn HostClass,
    audio_manager: &'a dyn HostObject,
}

impl<'a> LegacyServiceReader<'a> {
    pub fn new(
        service: &'a dyn HostObject,
        audio_system: &'a dyn HostClass,
        audio_manager: &'a dyn HostObject,
    ) -> Self {
        Self {
            service,
            audio_system,
            audio_manager,
        }
    }
}

impl AudioServiceState for LegacyServiceReader<'_> {
    fn voice_capable(&self) -> HostResult<bool> {
        self.service.get_bool(FIELD_VOICE_CAPABLE)
    }

    fn in_communication(&self) -> HostResult<bool> {
        self.service.call_bool(METHOD_IN_COMMUNICATION, &[])
    }

    fn volume_fixed(&self) -> HostResult<bool> {
        self.audio_manager.call_bool(METHOD_VOLUME_FIXED, &[])
    }

    fn music_active_recently(&self, window_ms: u32) -> HostResult<bool> {
        self.audio_system.call_static_bool(
            METHOD_STREAM_ACTIVE,
            &[
                HostValue::Int(StreamType::MUSIC.raw()),
                HostValue::Int(window_ms as i32),
            ],
        )
    }

    fn remote_stream_active(&self, stream: StreamType) -> HostResult<bool> {
        self.service
            .call_bool(METHOD_REMOTE_STATE_ACTIVE, &[HostValue::Int(stream.raw())])
    }
}

/// Reader for hosts at or above the KitKat boundary
///
/// Recent-music activity is tracked by the service and the remote-stream
/// query moved to the media focus controller sub-object. KitKat itself still
/// carries the voice-capable field; later levels do not, and the gate is
/// simply open there.
pub struct ModernServiceReader<'a> {
    level: ApiLevel,
    service: &'a dyn HostObject,
    audio_manager: &'a dyn HostObject,
}

impl<'a> ModernServiceReader<'a> {
    pub fn new(
        level: ApiLevel,
        service: &'a dyn HostObject,
        audio_manager: &'a dyn HostObject,
    ) -> Self {
        Self {
            level,
            service,
            audio_manager,
        }
    }
}

impl AudioServiceState for ModernServiceReader<'_> {
    fn voice_capable(&self) -> HostResult<bool> {
        if self.level.has_voice_capable_flag() {
            self.service.get_bool(FIELD_VOICE_CAPABLE)
        } else {
            Ok(true)
        }
    }

    fn in_communication(&self) -> HostResult<bool> {
        self.service.call_bool(METHOD_IN_COMMUNICATION, &[])
    }

    fn volume_fixed(&self) -> HostResult<bool> {
        self.audio_manager.call_bool(METHOD_VOLUME_FIXED, &[])
    }

    fn music_active_recently(&self, window_ms: u32) -> HostResult<bool> {
        self.service.call_bool(
            METHOD_MUSIC_ACTIVE_RECENTLY,
            &[HostValue::Int(window_ms as i32)],
        )
    }

    fn remote_stream_active(&self, stream: StreamType) -> HostResult<bool> {
        let focus_control = self.service.get_object(FIELD_MEDIA_FOCUS_CONTROL)?;
        focus_control.call_bool(METHOD_REMOTE_STATE_ACTIVE, &[HostValue::Int(stream.raw())])
    }
}

/// Pick the state reader for the given host level
pub fn service_state_for<'a>(
    level: ApiLevel,
    service: &'a dyn HostObject,
    audio_manager: &'a dyn HostObject,
    audio_system: &'a dyn HostClass,
) -> Box<dyn AudioServiceState + 'a> {
    if level.tracks_media_focus() {
        Box::new(ModernServiceReader::new(level, service, audio_manager))
    } else {
        Box::new(LegacyServiceReader::new(
            service,
            audio_system,
            audio_manager,
        ))
    }
}
