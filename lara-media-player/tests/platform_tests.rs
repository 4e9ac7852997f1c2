//! Platform setup from configuration and discovery

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

use elkoep_lara::{
    build_device, setup_platform, Customize, DiscoveryInfo, HostPlatform, MediaPlayerEntity,
    MediaPlayerState, PlatformConfig, SetupError, SUPPORTED_FEATURES,
};
use lara_client::MockLaraClient;
use rstest::rstest;
use serde_json::json;

/// Host double that keeps registered entities and honors `update_before_add`
#[derive(Default)]
struct RecordingPlatform {
    entities: Vec<Box<dyn MediaPlayerEntity>>,
    update_flags: Vec<bool>,
    requested_files: RefCell<Vec<String>>,
}

impl HostPlatform for RecordingPlatform {
    fn config_path(&self, filename: &str) -> PathBuf {
        self.requested_files.borrow_mut().push(filename.to_string());
        PathBuf::from("/config").join(filename)
    }

    fn add_entities(&mut self, entities: Vec<Box<dyn MediaPlayerEntity>>, update_before_add: bool) {
        self.update_flags.push(update_before_add);
        for mut entity in entities {
            if update_before_add {
                entity.update().unwrap();
            }
            self.entities.push(entity);
        }
    }
}

#[test]
fn test_setup_from_configured_host() {
    let mut platform = RecordingPlatform::default();
    let config = PlatformConfig::from_json_value(json!({
        "host": "192.168.1.40",
        "name": "Kitchen Radio",
        "timeout": 3
    }))
    .unwrap();

    let mut connected = None;
    setup_platform(&mut platform, &config, None, |host, timeout| {
        connected = Some((host.to_string(), timeout));
        MockLaraClient::new().with_playing(true).with_station("FM1")
    })
    .unwrap();

    assert_eq!(
        connected,
        Some(("192.168.1.40".to_string(), Duration::from_secs(3)))
    );
    assert_eq!(platform.update_flags, vec![true]);
    assert_eq!(platform.entities.len(), 1);

    let entity = &platform.entities[0];
    assert_eq!(entity.name(), "Kitchen Radio");
    assert_eq!(entity.state(), MediaPlayerState::Playing);
    assert_eq!(entity.source(), Some("FM1"));
    assert_eq!(entity.supported_features(), SUPPORTED_FEATURES);
}

#[rstest]
#[case(Some("10.0.0.9"))]
#[case(None)]
fn test_discovery_overrides_config(#[case] configured: Option<&str>) {
    let mut platform = RecordingPlatform::default();
    let config = PlatformConfig {
        host: configured.map(str::to_string),
        ..Default::default()
    };
    let info = DiscoveryInfo::new("lara", "http://Lara-Living.local:8080/desc.xml");

    let mut connected_host = String::new();
    setup_platform(&mut platform, &config, Some(&info), |host, _| {
        connected_host = host.to_string();
        MockLaraClient::new()
    })
    .unwrap();

    assert_eq!(connected_host, "lara-living.local");
    assert_eq!(platform.entities[0].name(), "Lara Radio");
}

#[test]
fn test_discovery_without_hostname_fails() {
    let mut platform = RecordingPlatform::default();
    let config = PlatformConfig::with_host("192.168.1.40");
    let info = DiscoveryInfo::new("lara", "not a url");

    let result = setup_platform(&mut platform, &config, Some(&info), |_, _| MockLaraClient::new());

    assert!(matches!(result, Err(SetupError::NoHost)));
    assert!(platform.entities.is_empty());
}

#[test]
fn test_missing_host_fails() {
    let mut platform = RecordingPlatform::default();
    let config = PlatformConfig::from_json_str("{}").unwrap();

    let result = setup_platform(&mut platform, &config, None, |_, _| MockLaraClient::new());

    assert!(matches!(result, Err(SetupError::NoHost)));
    assert!(platform.update_flags.is_empty());
}

#[test]
fn test_unreachable_device_is_registered_off() {
    let mut platform = RecordingPlatform::default();
    let config = PlatformConfig::with_host("192.168.1.40");

    setup_platform(&mut platform, &config, None, |_, _| {
        let mut client = MockLaraClient::new().with_playing(true).with_station("FM1");
        client.push_transport_error("no route to host");
        client
    })
    .unwrap();

    let entity = &platform.entities[0];
    assert_eq!(entity.state(), MediaPlayerState::Off);
    assert_eq!(entity.source(), None);
}

#[test]
fn test_setup_resolves_config_file_through_host() {
    let mut platform = RecordingPlatform::default();
    let config = PlatformConfig::from_json_value(json!({
        "host": "192.168.1.40",
        "filename": "kitchen.conf"
    }))
    .unwrap();

    setup_platform(&mut platform, &config, None, |_, _| MockLaraClient::new()).unwrap();

    assert_eq!(*platform.requested_files.borrow(), vec!["kitchen.conf".to_string()]);
}

#[test]
fn test_build_device_carries_config() {
    let platform = RecordingPlatform::default();
    let config = PlatformConfig::from_json_value(json!({
        "host": "192.168.1.40",
        "name": "Kitchen Radio",
        "customize": { "sources": ["FM1", "Jazz"] },
        "filename": "kitchen.conf",
        "timeout": 5
    }))
    .unwrap();

    let device = build_device(&platform, &config, None, |_, _| MockLaraClient::new()).unwrap();

    assert_eq!(device.config_path(), Path::new("/config/kitchen.conf"));
    assert_eq!(
        device.customize(),
        &Customize {
            sources: Some(vec!["FM1".to_string(), "Jazz".to_string()]),
        }
    );
    assert_eq!(device.host(), "192.168.1.40");
    assert_eq!(device.name(), "Kitchen Radio");
    assert_eq!(device.timeout(), Duration::from_secs(5));
    // Not registered: that is setup_platform's job
    assert!(platform.entities.is_empty());
}

#[test]
fn test_build_device_default_filename() {
    let platform = RecordingPlatform::default();
    let config = PlatformConfig::with_host("lara.local");

    let device = build_device(&platform, &config, None, |_, _| MockLaraClient::new()).unwrap();

    assert_eq!(device.config_path(), Path::new("/config/elkoep_lara.conf"));
    assert_eq!(device.customize(), &Customize::default());
}
