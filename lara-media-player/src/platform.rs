//! Platform setup: turns configuration into a registered entity

use std::path::PathBuf;
use std::time::Duration;

use lara_client::LaraClient;

use crate::config::PlatformConfig;
use crate::device::{DeviceSettings, LaraDevice};
use crate::discovery::DiscoveryInfo;
use crate::entity::MediaPlayerEntity;
use crate::SetupError;

/// Services the host platform provides during setup
pub trait HostPlatform {
    /// Absolute path of `filename` inside the host's config directory
    fn config_path(&self, filename: &str) -> PathBuf;

    /// Register entities. With `update_before_add` the host refreshes each
    /// entity before it first reads state from it.
    fn add_entities(&mut self, entities: Vec<Box<dyn MediaPlayerEntity>>, update_before_add: bool);
}

/// Set up one Lara entity
///
/// Builds the device with [`build_device`] and registers it with the host,
/// asking for a refresh before it is first displayed.
///
/// # Example
///
/// ```rust,ignore
/// let config = PlatformConfig::from_json_str(r#"{"host": "192.168.1.40"}"#)?;
/// setup_platform(&mut host, &config, None, |host, timeout| {
///     MyLaraClient::new(host, timeout)
/// })?;
/// ```
pub fn setup_platform<P, C, F>(
    platform: &mut P,
    config: &PlatformConfig,
    discovery_info: Option<&DiscoveryInfo>,
    connect: F,
) -> Result<(), SetupError>
where
    P: HostPlatform + ?Sized,
    C: LaraClient + 'static,
    F: FnOnce(&str, Duration) -> C,
{
    let device = build_device(platform, config, discovery_info, connect)?;
    platform.add_entities(vec![Box::new(device)], true);
    Ok(())
}

/// Build the Lara entity described by `config` without registering it
///
/// The host comes from `discovery_info` when present, otherwise from
/// `config.host`. The config file name is resolved through
/// [`HostPlatform::config_path`] and `connect` builds the client for the
/// host with the configured timeout.
pub fn build_device<P, C, F>(
    platform: &P,
    config: &PlatformConfig,
    discovery_info: Option<&DiscoveryInfo>,
    connect: F,
) -> Result<LaraDevice<C>, SetupError>
where
    P: HostPlatform + ?Sized,
    C: LaraClient,
    F: FnOnce(&str, Duration) -> C,
{
    config.validate()?;

    let host = match discovery_info {
        Some(info) => info.hostname(),
        None => config.host.clone(),
    };

    let Some(host) = host else {
        tracing::error!("No Lara found in configuration file or with discovery");
        return Err(SetupError::NoHost);
    };

    let settings = DeviceSettings {
        host: host.clone(),
        name: config.name.clone(),
        customize: config.customize.clone(),
        config_path: platform.config_path(&config.filename),
        timeout: config.timeout_duration(),
    };

    tracing::debug!("Setting up Lara device {} at {}", settings.name, host);

    let span = tracing::info_span!("elkoep_lara", host = %host, name = %settings.name);
    let client = connect(&host, settings.timeout);
    Ok(LaraDevice::new(client, settings, span))
}
