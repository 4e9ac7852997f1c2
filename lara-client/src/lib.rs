//! Client handle contract for ElkoEP Lara network audio devices
//!
//! The Lara device speaks its own protocol and keeps its own connection.
//! This crate does not implement that protocol. It fixes the surface a
//! client implementation must offer so that higher layers (the media-player
//! adapter in `elkoep-lara`) can drive any implementation, including the
//! scripted [`MockLaraClient`] used in tests.
//!
//! ```rust,ignore
//! use lara_client::LaraClient;
//!
//! fn report(client: &mut impl LaraClient) -> lara_client::Result<()> {
//!     if client.send_load_status_packet()?.is_success() {
//!         println!("{:?} at {}", client.station(), client.volume_level());
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod status;

#[cfg(any(test, feature = "test-support"))]
mod mock;

pub use error::{ClientError, Result};
pub use status::StatusCode;

#[cfg(any(test, feature = "test-support"))]
pub use mock::{ClientCall, MockLaraClient};

/// Operations and properties of a Lara device connection
///
/// Properties reflect whatever the client last loaded from the device. They
/// are refreshed by [`init`](LaraClient::init) and
/// [`send_load_status_packet`](LaraClient::send_load_status_packet), never
/// implicitly.
pub trait LaraClient {
    /// Connect and load the initial device state
    fn init(&mut self) -> Result<()>;

    /// Whether `init` has completed successfully
    fn is_initialized(&self) -> bool;

    /// Ask the device for its current status and cache the reply
    fn send_load_status_packet(&mut self) -> Result<StatusCode>;

    /// Label of the station currently selected
    fn station(&self) -> Option<&str>;

    /// Selectable stations in device order
    fn stations(&self) -> &[String];

    /// Whether the device reports playback
    fn is_playing(&self) -> bool;

    /// Volume as reported by the device (0.0-1.0)
    fn volume_level(&self) -> f64;

    /// Resume playback of the selected station
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Switch to the next station
    fn next(&mut self) -> Result<()>;

    /// Switch to the previous station
    fn previous(&mut self) -> Result<()>;

    /// Raise the volume by one device step
    fn volume_up(&mut self) -> Result<()>;

    /// Lower the volume by one device step
    fn volume_down(&mut self) -> Result<()>;

    /// Set the absolute volume on the device scale (0-100)
    fn volume_set(&mut self, volume: u8) -> Result<()>;

    /// Toggle mute on the device
    fn volume_mute(&mut self) -> Result<()>;

    /// Select a station by its position in [`stations`](LaraClient::stations)
    fn select_station(&mut self, index: usize) -> Result<()>;
}
