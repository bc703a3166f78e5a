//! Audio Stream Type Identifiers
//!
//! Integer identifiers for the host's audio routing classes, plus the
//! "caller did not specify" sentinel that triggers the override policy.

use serde::{Deserialize, Serialize};

/// A host audio stream type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamType(pub i32);

impl StreamType {
    /// Telephony voice routing
    pub const VOICE_CALL: StreamType = StreamType(0);

    /// System sounds
    pub const SYSTEM: StreamType = StreamType(1);

    /// Ringer
    pub const RING: StreamType = StreamType(2);

    /// Music / media playback
    pub const MUSIC: StreamType = StreamType(3);

    /// Alarms
    pub const ALARM: StreamType = StreamType(4);

    /// Notifications
    pub const NOTIFICATION: StreamType = StreamType(5);

    /// Sentinel: the caller asked for the default stream type
    pub const USE_DEFAULT: StreamType = StreamType(-1);

    /// Whether this is the "use default stream" sentinel
    pub fn is_default_request(&self) -> bool {
        *self == Self::USE_DEFAULT
    }

    /// Raw host constant value
    pub fn raw(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for StreamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match *self {
            Self::VOICE_CALL => "voice_call",
            Self::SYSTEM => "system",
            Self::RING => "ring",
            Self::MUSIC => "music",
            Self::ALARM => "alarm",
            Self::NOTIFICATION => "notification",
            Self::USE_DEFAULT => "use_default",
            _ => return write!(f, "stream({})", self.0),
        };
        f.write_str(name)
    }
}
