//! Session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Serial device used when none is given.
pub const DEFAULT_DEVICE: &str = "/dev/ttyACM0";
/// Line rate of the module's control port.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;
/// Reply deadline for a request.
pub const DEFAULT_TIMEOUT_MS: u64 = 1_000;
/// Upper bound on a single transport read.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10;

/// Level at which a session logs raw frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpLevel {
    /// Frames are not dumped.
    Off,
    /// Frames are dumped at DEBUG.
    Debug,
    /// Frames are dumped at TRACE.
    #[default]
    Trace,
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Serial device path.
    #[serde(default = "default_device")]
    pub device: String,
    /// Baud rate.
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    /// Reply deadline in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Single read timeout in milliseconds.
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
    /// Where raw frames go in the log.
    #[serde(default)]
    pub dump_frames: DumpLevel,
}

fn default_device() -> String {
    DEFAULT_DEVICE.to_string()
}

fn default_baud_rate() -> u32 {
    DEFAULT_BAUD_RATE
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_read_timeout_ms() -> u64 {
    DEFAULT_READ_TIMEOUT_MS
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            device: default_device(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            dump_frames: DumpLevel::default(),
        }
    }
}

impl SessionConfig {
    /// Reply deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Single read timeout.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.device, "/dev/ttyACM0");
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert_eq!(config.dump_frames, DumpLevel::Trace);
    }

    #[test]
    fn test_partial_yaml() {
        let config: SessionConfig = serde_yaml::from_str("timeout_ms: 250\ndump_frames: debug\n").unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert_eq!(config.dump_frames, DumpLevel::Debug);
        assert_eq!(config.baud_rate, DEFAULT_BAUD_RATE);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_yaml::from_str::<SessionConfig>("timeout: 5\n").is_err());
    }
}
