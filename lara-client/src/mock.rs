//! Scripted in-memory client for tests

use std::collections::VecDeque;

use crate::{ClientError, LaraClient, Result, StatusCode};

/// A call received by [`MockLaraClient`]
#[derive(Debug, Clone, PartialEq)]
pub enum ClientCall {
    Init,
    SendLoadStatusPacket,
    Play,
    Pause,
    Next,
    Previous,
    VolumeUp,
    VolumeDown,
    VolumeSet(u8),
    VolumeMute,
    SelectStation(usize),
}

/// Outcome scripted for the next `init` call
#[derive(Debug, Clone, Copy)]
enum InitScript {
    Succeed,
    Fail,
}

/// Outcome scripted for the next status request
#[derive(Debug, Clone)]
enum StatusScript {
    Code(StatusCode),
    TransportError(String),
    NotInitialized,
}

/// Client double that records calls and replays scripted results
///
/// Properties are plain fields set through the `with_*`/`set_*` methods.
/// `init` and `send_load_status_packet` pop from queues; once a queue is
/// empty they succeed. Successful status requests do not change any
/// property, so tests set the values the "device" should report first.
#[derive(Debug, Clone)]
pub struct MockLaraClient {
    initialized: bool,
    station: Option<String>,
    stations: Vec<String>,
    playing: bool,
    volume_level: f64,
    init_results: VecDeque<InitScript>,
    status_results: VecDeque<StatusScript>,
    fail_commands: bool,
    calls: Vec<ClientCall>,
}

impl Default for MockLaraClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLaraClient {
    /// A stopped device with no stations at volume 0
    pub fn new() -> Self {
        Self {
            initialized: false,
            station: None,
            stations: Vec::new(),
            playing: false,
            volume_level: 0.0,
            init_results: VecDeque::new(),
            status_results: VecDeque::new(),
            fail_commands: false,
            calls: Vec::new(),
        }
    }

    pub fn with_stations<I, S>(mut self, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stations = stations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_station(mut self, station: impl Into<String>) -> Self {
        self.station = Some(station.into());
        self
    }

    pub fn with_playing(mut self, playing: bool) -> Self {
        self.playing = playing;
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume_level = volume;
        self
    }

    pub fn set_station(&mut self, station: Option<&str>) {
        self.station = station.map(str::to_string);
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume_level = volume;
    }

    /// Drop the connection so the next refresh has to re-initialize
    pub fn set_initialized(&mut self, initialized: bool) {
        self.initialized = initialized;
    }

    /// Make the next `init` call fail
    pub fn fail_next_init(&mut self) {
        self.init_results.push_back(InitScript::Fail);
    }

    /// Make the next status request return `code`
    pub fn push_status(&mut self, code: impl Into<StatusCode>) {
        self.status_results.push_back(StatusScript::Code(code.into()));
    }

    /// Make the next status request fail as if the device were unreachable
    pub fn push_transport_error(&mut self, reason: impl Into<String>) {
        self.status_results
            .push_back(StatusScript::TransportError(reason.into()));
    }

    /// Make the next status request fail with a non-transport error
    pub fn push_not_initialized(&mut self) {
        self.status_results.push_back(StatusScript::NotInitialized);
    }

    /// Make every command return a transport error
    pub fn fail_commands(&mut self, fail: bool) {
        self.fail_commands = fail;
    }

    /// Calls received so far, oldest first
    pub fn calls(&self) -> &[ClientCall] {
        &self.calls
    }

    /// Forget recorded calls
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn command(&mut self, call: ClientCall) -> Result<()> {
        self.calls.push(call);
        if self.fail_commands {
            return Err(ClientError::connection_closed("mock configured to fail"));
        }
        Ok(())
    }
}

impl LaraClient for MockLaraClient {
    fn init(&mut self) -> Result<()> {
        self.calls.push(ClientCall::Init);
        match self.init_results.pop_front().unwrap_or(InitScript::Succeed) {
            InitScript::Succeed => {
                self.initialized = true;
                Ok(())
            }
            InitScript::Fail => {
                self.initialized = false;
                Err(ClientError::connection_closed("mock init failure"))
            }
        }
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn send_load_status_packet(&mut self) -> Result<StatusCode> {
        self.calls.push(ClientCall::SendLoadStatusPacket);
        match self.status_results.pop_front() {
            None => Ok(StatusCode::OK),
            Some(StatusScript::Code(code)) => Ok(code),
            Some(StatusScript::TransportError(reason)) => Err(ClientError::TransportUnavailable(reason)),
            Some(StatusScript::NotInitialized) => Err(ClientError::NotInitialized),
        }
    }

    fn station(&self) -> Option<&str> {
        self.station.as_deref()
    }

    fn stations(&self) -> &[String] {
        &self.stations
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn volume_level(&self) -> f64 {
        self.volume_level
    }

    fn play(&mut self) -> Result<()> {
        self.command(ClientCall::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.command(ClientCall::Pause)
    }

    fn next(&mut self) -> Result<()> {
        self.command(ClientCall::Next)
    }

    fn previous(&mut self) -> Result<()> {
        self.command(ClientCall::Previous)
    }

    fn volume_up(&mut self) -> Result<()> {
        self.command(ClientCall::VolumeUp)
    }

    fn volume_down(&mut self) -> Result<()> {
        self.command(ClientCall::VolumeDown)
    }

    fn volume_set(&mut self, volume: u8) -> Result<()> {
        self.command(ClientCall::VolumeSet(volume))
    }

    fn volume_mute(&mut self) -> Result<()> {
        self.command(ClientCall::VolumeMute)
    }

    fn select_station(&mut self, index: usize) -> Result<()> {
        self.command(ClientCall::SelectStation(index))
    }
}
