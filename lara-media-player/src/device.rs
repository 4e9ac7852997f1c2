//! Lara device entity
//!
//! Wraps one [`LaraClient`] and presents it to the host as a media player.
//! State is cached: it changes on [`update`](MediaPlayerEntity::update) and,
//! optimistically, when a command is issued. A command that fails on the
//! client side leaves the optimistic write in place until the next refresh.

use std::path::{Path, PathBuf};
use std::time::Duration;

use lara_client::LaraClient;
use tracing::Span;

use crate::config::Customize;
use crate::entity::{EntityFeatures, MediaPlayerEntity, MediaPlayerState, MediaType};
use crate::DeviceError;

/// Commands a Lara device accepts
pub const SUPPORTED_FEATURES: EntityFeatures = EntityFeatures::NEXT_TRACK
    .union(EntityFeatures::PAUSE)
    .union(EntityFeatures::PREVIOUS_TRACK)
    .union(EntityFeatures::VOLUME_MUTE)
    .union(EntityFeatures::VOLUME_SET)
    .union(EntityFeatures::VOLUME_STEP)
    .union(EntityFeatures::SELECT_SOURCE)
    .union(EntityFeatures::PLAY);

/// Static settings of one Lara entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSettings {
    pub host: String,
    pub name: String,
    pub customize: Customize,
    /// Resolved path of the local config file. Carried, not read.
    pub config_path: PathBuf,
    pub timeout: Duration,
}

/// Media-player entity backed by a Lara client
///
/// # Example
///
/// ```rust,ignore
/// let mut device = LaraDevice::new(client, settings, tracing::info_span!("lara"));
/// device.update()?;
/// if device.state() == MediaPlayerState::Playing {
///     device.set_volume_level(0.4)?;
/// }
/// ```
#[derive(Debug)]
pub struct LaraDevice<C: LaraClient> {
    client: C,
    settings: DeviceSettings,
    span: Span,
    state: MediaPlayerState,
    volume: f64,
    source: Option<String>,
}

impl<C: LaraClient> LaraDevice<C> {
    /// Initialize `client` and build the entity from what it reports
    ///
    /// Initialization failure is logged and otherwise ignored; the next
    /// refresh retries it. `span` scopes every log line this entity emits.
    pub fn new(mut client: C, settings: DeviceSettings, span: Span) -> Self {
        {
            let _enter = span.enter();
            let result = client.init();
            tracing::warn!("Lara device initialization {:?}", result);
        }

        let state = MediaPlayerState::from_playing(client.is_playing());
        let volume = client.volume_level();
        let source = client.station().map(str::to_string);

        Self {
            client,
            settings,
            span,
            state,
            volume,
            source,
        }
    }

    pub fn host(&self) -> &str {
        &self.settings.host
    }

    pub fn customize(&self) -> &Customize {
        &self.settings.customize
    }

    pub fn config_path(&self) -> &Path {
        &self.settings.config_path
    }

    pub fn timeout(&self) -> Duration {
        self.settings.timeout
    }

    pub fn settings(&self) -> &DeviceSettings {
        &self.settings
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    fn load_status(&mut self) -> Result<(), DeviceError> {
        let code = match self.client.send_load_status_packet() {
            Ok(code) => code,
            Err(e) if e.is_transport_unavailable() => {
                tracing::debug!("Lara device unreachable: {}", e);
                self.state = MediaPlayerState::Off;
                self.source = None;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if code.is_success() {
            self.source = self.client.station().map(str::to_string);
            self.state = MediaPlayerState::from_playing(self.client.is_playing());
            self.volume = self.client.volume_level();
        } else {
            tracing::debug!("Lara status request returned {}", code);
            self.source = Some(String::new());
            self.state = MediaPlayerState::Paused;
            self.volume = 0.0;
        }
        Ok(())
    }
}

impl<C: LaraClient> MediaPlayerEntity for LaraDevice<C> {
    fn name(&self) -> &str {
        &self.settings.name
    }

    fn state(&self) -> MediaPlayerState {
        self.state
    }

    /// Mute is a device toggle, not tracked state: always `false`
    fn is_volume_muted(&self) -> bool {
        false
    }

    fn volume_level(&self) -> f64 {
        self.volume
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn source_list(&self) -> &[String] {
        self.client.stations()
    }

    fn media_title(&self) -> Option<&str> {
        self.source()
    }

    fn media_image_url(&self) -> Option<&str> {
        None
    }

    fn media_content_type(&self) -> MediaType {
        MediaType::Channel
    }

    fn supported_features(&self) -> EntityFeatures {
        SUPPORTED_FEATURES
    }

    fn update(&mut self) -> Result<(), DeviceError> {
        let span = self.span.clone();
        let _enter = span.enter();

        if !self.client.is_initialized() {
            if let Err(e) = self.client.init() {
                tracing::debug!("Lara re-initialization failed, keeping cached state: {}", e);
                return Ok(());
            }
        }

        self.load_status()
    }

    fn volume_up(&mut self) -> Result<(), DeviceError> {
        let _enter = self.span.enter();
        self.client.volume_up()?;
        Ok(())
    }

    fn volume_down(&mut self) -> Result<(), DeviceError> {
        let _enter = self.span.enter();
        self.client.volume_down()?;
        Ok(())
    }

    fn set_volume_level(&mut self, volume: f64) -> Result<(), DeviceError> {
        let _enter = self.span.enter();
        self.volume = volume;
        self.client.volume_set(device_volume(volume))?;
        Ok(())
    }

    /// Zeroes the cached volume and toggles mute on the device.
    /// `mute` is not consulted.
    fn mute_volume(&mut self, _mute: bool) -> Result<(), DeviceError> {
        let _enter = self.span.enter();
        self.volume = 0.0;
        self.client.volume_mute()?;
        Ok(())
    }

    fn media_play_pause(&mut self) -> Result<(), DeviceError> {
        let _enter = self.span.enter();
        if self.state == MediaPlayerState::Playing {
            self.state = MediaPlayerState::Paused;
            self.client.pause()?;
        } else {
            self.state = MediaPlayerState::Playing;
            self.client.play()?;
        }
        Ok(())
    }

    fn media_play(&mut self) -> Result<(), DeviceError> {
        let _enter = self.span.enter();
        if self.state == MediaPlayerState::Paused {
            self.state = MediaPlayerState::Playing;
            self.client.play()?;
        }
        Ok(())
    }

    fn media_pause(&mut self) -> Result<(), DeviceError> {
        let _enter = self.span.enter();
        if self.state == MediaPlayerState::Playing {
            self.state = MediaPlayerState::Paused;
            self.client.pause()?;
        }
        Ok(())
    }

    fn media_next_track(&mut self) -> Result<(), DeviceError> {
        let _enter = self.span.enter();
        self.client.next()?;
        Ok(())
    }

    fn media_previous_track(&mut self) -> Result<(), DeviceError> {
        let _enter = self.span.enter();
        self.client.previous()?;
        Ok(())
    }

    fn select_source(&mut self, source: &str) -> Result<(), DeviceError> {
        let _enter = self.span.enter();
        let index = self
            .client
            .stations()
            .iter()
            .position(|station| station == source)
            .ok_or_else(|| DeviceError::SourceNotFound(source.to_string()))?;
        self.client.select_station(index)?;
        Ok(())
    }

    /// Accepted and logged; the device has no way to play arbitrary media
    fn play_media(&mut self, media_type: &MediaType, media_id: &str) {
        let _enter = self.span.enter();
        tracing::debug!("Call play media type <{}>, Id <{}>", media_type, media_id);
    }
}

/// Host volume (0.0-1.0) on the device's 0-100 scale
fn device_volume(volume: f64) -> u8 {
    (volume.clamp(0.0, 1.0) * 100.0).round() as u8
}
