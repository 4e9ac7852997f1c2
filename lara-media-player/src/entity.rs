//! Media-player entity contract shared with the host platform
//!
//! The host schedules [`MediaPlayerEntity::update`], reads the accessors to
//! render the entity and routes user actions to the command methods. State
//! names and media-type strings follow the host's conventions
//! (`"playing"`, `"channel"`, ...).

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DeviceError;

/// Playback state reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPlayerState {
    /// Device is playing
    Playing,
    /// Device is reachable and not playing
    Paused,
    /// Device could not be reached during the last refresh
    Off,
}

impl MediaPlayerState {
    /// Host-facing state string
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaPlayerState::Playing => "playing",
            MediaPlayerState::Paused => "paused",
            MediaPlayerState::Off => "off",
        }
    }

    /// Playing when `playing` is true, paused otherwise
    pub fn from_playing(playing: bool) -> Self {
        if playing {
            MediaPlayerState::Playing
        } else {
            MediaPlayerState::Paused
        }
    }
}

impl fmt::Display for MediaPlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type of a media item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    Channel,
    Music,
    Playlist,
    Url,
    /// Any type string the host sends that has no dedicated variant
    Other(String),
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Channel => "channel",
            MediaType::Music => "music",
            MediaType::Playlist => "playlist",
            MediaType::Url => "url",
            MediaType::Other(other) => other,
        }
    }
}

impl FromStr for MediaType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "channel" => MediaType::Channel,
            "music" => MediaType::Music,
            "playlist" => MediaType::Playlist,
            "url" => MediaType::Url,
            _ => MediaType::Other(s.to_string()),
        })
    }
}

impl From<&str> for MediaType {
    fn from(s: &str) -> Self {
        match s.parse::<MediaType>() {
            Ok(media_type) => media_type,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of commands an entity accepts
///
/// Bit values match the host's media-player feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityFeatures(u32);

impl EntityFeatures {
    pub const PAUSE: EntityFeatures = EntityFeatures(1);
    pub const VOLUME_SET: EntityFeatures = EntityFeatures(4);
    pub const VOLUME_MUTE: EntityFeatures = EntityFeatures(8);
    pub const PREVIOUS_TRACK: EntityFeatures = EntityFeatures(16);
    pub const NEXT_TRACK: EntityFeatures = EntityFeatures(32);
    pub const SELECT_SOURCE: EntityFeatures = EntityFeatures(2048);
    pub const PLAY: EntityFeatures = EntityFeatures(16384);
    pub const VOLUME_STEP: EntityFeatures = EntityFeatures(1024);

    pub const fn empty() -> Self {
        EntityFeatures(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Flags set in either operand; usable in `const` context
    pub const fn union(self, other: EntityFeatures) -> Self {
        EntityFeatures(self.0 | other.0)
    }

    /// Whether every flag in `other` is set
    pub const fn contains(self, other: EntityFeatures) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for EntityFeatures {
    type Output = EntityFeatures;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for EntityFeatures {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Surface the host platform drives
///
/// Accessors never touch the network. `update` re-synchronizes cached state
/// with the device; commands forward to the device and may update the
/// cache before the device confirms.
pub trait MediaPlayerEntity {
    /// Display name
    fn name(&self) -> &str;

    fn state(&self) -> MediaPlayerState;

    fn is_volume_muted(&self) -> bool;

    /// Volume in 0.0-1.0
    fn volume_level(&self) -> f64;

    fn source(&self) -> Option<&str>;

    fn source_list(&self) -> &[String];

    fn media_title(&self) -> Option<&str>;

    fn media_image_url(&self) -> Option<&str>;

    fn media_content_type(&self) -> MediaType;

    fn supported_features(&self) -> EntityFeatures;

    /// Refresh cached state from the device
    fn update(&mut self) -> Result<(), DeviceError>;

    fn volume_up(&mut self) -> Result<(), DeviceError>;

    fn volume_down(&mut self) -> Result<(), DeviceError>;

    fn set_volume_level(&mut self, volume: f64) -> Result<(), DeviceError>;

    fn mute_volume(&mut self, mute: bool) -> Result<(), DeviceError>;

    fn media_play_pause(&mut self) -> Result<(), DeviceError>;

    fn media_play(&mut self) -> Result<(), DeviceError>;

    fn media_pause(&mut self) -> Result<(), DeviceError>;

    fn media_next_track(&mut self) -> Result<(), DeviceError>;

    fn media_previous_track(&mut self) -> Result<(), DeviceError>;

    fn select_source(&mut self, source: &str) -> Result<(), DeviceError>;

    fn play_media(&mut self, media_type: &MediaType, media_id: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MediaPlayerState::Playing, "playing")]
    #[case(MediaPlayerState::Paused, "paused")]
    #[case(MediaPlayerState::Off, "off")]
    fn test_state_strings(#[case] state: MediaPlayerState, #[case] expected: &str) {
        assert_eq!(state.to_string(), expected);
        assert_eq!(serde_json::to_string(&state).unwrap(), format!("\"{}\"", expected));
    }

    #[test]
    fn test_state_from_playing() {
        assert_eq!(MediaPlayerState::from_playing(true), MediaPlayerState::Playing);
        assert_eq!(MediaPlayerState::from_playing(false), MediaPlayerState::Paused);
    }

    #[rstest]
    #[case("channel", MediaType::Channel)]
    #[case("MUSIC", MediaType::Music)]
    #[case("playlist", MediaType::Playlist)]
    #[case("url", MediaType::Url)]
    #[case("podcast", MediaType::Other("podcast".to_string()))]
    fn test_media_type_parse(#[case] input: &str, #[case] expected: MediaType) {
        assert_eq!(MediaType::from(input), expected);
    }

    #[test]
    fn test_features_compose() {
        let features = EntityFeatures::PLAY | EntityFeatures::PAUSE;
        assert!(features.contains(EntityFeatures::PLAY));
        assert!(features.contains(EntityFeatures::PAUSE));
        assert!(!features.contains(EntityFeatures::SELECT_SOURCE));
        assert_eq!(features.bits(), 16385);

        let mut features = EntityFeatures::empty();
        features |= EntityFeatures::VOLUME_STEP;
        assert_eq!(features, EntityFeatures::VOLUME_STEP);
    }
}
