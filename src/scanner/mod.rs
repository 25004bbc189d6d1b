//! WiFi Scanner Module
//!
//! Scan acquisition behind a trait, plus the record type and the two
//! conversions used for display.
//! - Termux (Android): runs `termux-wifi-scaninfo` and decodes its JSON

use serde::Deserialize;
use thiserror::Error;

mod termux;

pub use termux::{TermuxScanner, SCAN_COMMAND};

/// A network reported by one scan
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Network {
    /// Absent, null or empty for hidden networks
    #[serde(default)]
    pub ssid: Option<String>,
    pub rssi: i32,      // Signal strength in dBm (negative, -30 best, -90 worst)
    pub frequency: i32, // Center frequency in MHz
}

impl Network {
    /// SSID to show, or `None` when the network hides it
    pub fn visible_ssid(&self) -> Option<&str> {
        self.ssid.as_deref().filter(|s| !s.is_empty())
    }

    pub fn channel(&self) -> i64 {
        freq_to_channel(self.frequency)
    }

    pub fn tier(&self) -> SignalTier {
        rssi_to_tier(self.rssi)
    }
}

/// Five-step signal strength classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTier {
    Strong,
    Good,
    Fair,
    Weak,
    VeryWeak,
}

/// Classify an RSSI reading. Lower bounds are inclusive.
pub fn rssi_to_tier(rssi: i32) -> SignalTier {
    match rssi {
        r if r >= -55 => SignalTier::Strong,
        r if r >= -65 => SignalTier::Good,
        r if r >= -75 => SignalTier::Fair,
        r if r >= -85 => SignalTier::Weak,
        _ => SignalTier::VeryWeak,
    }
}

/// Convert frequency (MHz) to WiFi channel number
///
/// Anything below 3000 MHz is treated as 2.4 GHz, everything else as 5 GHz.
/// Frequencies outside those bands give meaningless channels rather than errors.
/// Computed in `i64` so any decodable `i32` frequency stays in range.
pub fn freq_to_channel(freq_mhz: i32) -> i64 {
    let freq = i64::from(freq_mhz);
    if freq < 3000 {
        (freq - 2407).div_euclid(5)
    } else {
        (freq - 5000).div_euclid(5)
    }
}

/// Scanner error types
///
/// `NoNetworks` is not a failure: it ends the run cleanly with exit code 0.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Scan command is not installed
    #[error("Termux API is not installed.")]
    MissingDependency,
    /// Scan command refused to run because location is off
    #[error("Location services are disabled.")]
    LocationDisabled,
    /// Scan command failed for any other reason (stderr or OS error text)
    #[error("An unexpected error occurred: {0}")]
    CommandFailed(String),
    /// Scan command output was not the expected JSON
    #[error("Failed to parse Wi-Fi scan data.")]
    ParseError(#[from] serde_json::Error),
    /// Scan command printed nothing
    #[error("No Wi-Fi networks found.")]
    NoNetworks,
}

impl ScanError {
    /// Follow-up line printed under the message, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingDependency => Some("Please install it by running: pkg install termux-api"),
            Self::LocationDisabled => {
                Some("Please enable location services to scan for Wi-Fi networks.")
            }
            Self::ParseError(_) => Some("The command output was not valid JSON."),
            Self::CommandFailed(_) | Self::NoNetworks => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::NoNetworks)
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> u8 {
        if self.is_failure() {
            1
        } else {
            0
        }
    }
}

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Trait defining the WiFi scanner interface
pub trait WiFiScanner {
    /// Scan for nearby WiFi networks, in the order the platform reports them
    fn scan(&self) -> ScanResult<Vec<Network>>;

    /// Check if the scan backend can be found
    fn is_available(&self) -> bool;
}

/// Create the scanner for this platform
pub fn create_scanner() -> Box<dyn WiFiScanner> {
    Box::new(TermuxScanner::new())
}

/// Decode the JSON array printed by the scan command
pub fn parse_scan_output(output: &str) -> ScanResult<Vec<Network>> {
    Ok(serde_json::from_str(output)?)
}
