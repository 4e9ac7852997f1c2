//! # ElkoEP Lara media player
//!
//! Presents an ElkoEP Lara network radio to a home automation host as a
//! media-player entity. All device communication goes through a
//! [`LaraClient`](lara_client::LaraClient); this crate only maps host calls
//! onto it and caches what the host displays.
//!
//! ```rust,ignore
//! use elkoep_lara::{setup_platform, PlatformConfig};
//!
//! let config = PlatformConfig::from_json_str(r#"{"host": "192.168.1.40"}"#)?;
//! setup_platform(&mut host, &config, None, |host, timeout| {
//!     MyLaraClient::new(host, timeout)
//! })?;
//! // The host now calls `update()` on its own schedule and routes
//! // play/pause/volume/source commands to the registered entity.
//! ```
//!
//! ## Architecture
//!
//! ```text
//! host platform (scheduling, UI)
//!     ↓ MediaPlayerEntity
//! LaraDevice (cached state, command mapping)
//!     ↓ LaraClient
//! device client (protocol, connection)
//! ```

pub use config::{ConfigDir, Customize, PlatformConfig};
pub use device::{DeviceSettings, LaraDevice, SUPPORTED_FEATURES};
pub use discovery::DiscoveryInfo;
pub use entity::{EntityFeatures, MediaPlayerEntity, MediaPlayerState, MediaType};
pub use error::{ConfigError, DeviceError, SetupError};
pub use platform::{build_device, setup_platform, HostPlatform};

pub use lara_client::{ClientError, LaraClient, StatusCode};

pub mod config;
pub mod logging;

mod device;
mod discovery;
mod entity;
mod error;
mod platform;
