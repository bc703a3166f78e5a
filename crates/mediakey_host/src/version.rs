//! Host OS Version Model
//!
//! The audio service changed shape across releases: the voice-capable flag
//! was removed after KitKat, while the media-focus bookkeeping (recent-music
//! tracking and the remote-stream controller) appeared with it. Callers ask
//! the level what the host build supports instead of comparing raw SDK
//! integers at every site.

/// Host SDK level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApiLevel {
    /// Integer SDK level (e.g., 18, 19, 21)
    pub sdk: u32,
}

impl ApiLevel {
    /// KitKat, the boundary release for audio service shape changes
    pub const KITKAT: ApiLevel = ApiLevel { sdk: 19 };

    pub const fn new(sdk: u32) -> Self {
        Self { sdk }
    }

    /// Whether the service still carries the `mVoiceCapable` field
    ///
    /// The field exists up to and including KitKat; reading it on later
    /// builds fails with a field lookup error.
    pub fn has_voice_capable_flag(&self) -> bool {
        self.sdk <= Self::KITKAT.sdk
    }

    /// Whether recent-music and remote-stream state live on the media focus
    /// path (service-side recent-activity query, focus-controller sub-object)
    ///
    /// Before KitKat both queries go through the service/static audio system
    /// instead.
    pub fn tracks_media_focus(&self) -> bool {
        self.sdk >= Self::KITKAT.sdk
    }

    /// Human-readable release name for this level
    pub fn release_name(&self) -> &'static str {
        match self.sdk {
            ..=15 => "Ice Cream Sandwich",
            16..=18 => "Jelly Bean",
            19 => "KitKat",
            20 => "KitKat Watch",
            21 | 22 => "Lollipop",
            23 => "Marshmallow",
            24 | 25 => "Nougat",
            26 | 27 => "Oreo",
            28 => "Pie",
            _ => "Android 10+",
        }
    }
}

impl std::fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Android {} (SDK {})", self.release_name(), self.sdk)
    }
}
