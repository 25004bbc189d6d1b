//! Termux WiFi Scanner Implementation
//!
//! Android gives no unprivileged access to the wireless stack from a shell, so
//! scanning goes through the Termux:API companion app. Its
//! `termux-wifi-scaninfo` helper prints the last scan results as a JSON array
//! and writes diagnostics to stderr.
//!
//! The helper needs the app's location permission. When location is switched
//! off it exits non-zero with "Location is disabled" in its stderr text.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use super::{parse_scan_output, Network, ScanError, ScanResult, WiFiScanner};

/// Program provided by the termux-api package
pub const SCAN_COMMAND: &str = "termux-wifi-scaninfo";

/// Marker the helper prints when location services are off
const LOCATION_DISABLED_MARKER: &str = "Location is disabled";

/// Scanner backed by `termux-wifi-scaninfo`
pub struct TermuxScanner {
    program: OsString,
    args: Vec<OsString>,
}

impl TermuxScanner {
    pub fn new() -> Self {
        Self::with_command(SCAN_COMMAND, Vec::<OsString>::new())
    }

    /// Use another program in place of the Termux helper
    pub fn with_command<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run the helper and return its stdout
    fn scan_raw(&self) -> ScanResult<String> {
        info!(command = ?self.program, "Running scan command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    ScanError::MissingDependency
                } else {
                    ScanError::CommandFailed(format!("Failed to execute {:?}: {}", self.program, e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            debug!(status = %output.status, stderr = %stderr, "Scan command failed");
            return Err(classify_failure(stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.trim().is_empty() {
            debug!("Scan command produced no output");
            return Err(ScanError::NoNetworks);
        }

        Ok(stdout)
    }
}

impl Default for TermuxScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl WiFiScanner for TermuxScanner {
    fn scan(&self) -> ScanResult<Vec<Network>> {
        let stdout = self.scan_raw()?;
        let networks = parse_scan_output(&stdout)?;

        info!(network_count = networks.len(), "Termux scan complete");
        Ok(networks)
    }

    fn is_available(&self) -> bool {
        find_in_path(&self.program)
    }
}

/// Map the helper's stderr text to an error
fn classify_failure(stderr: &str) -> ScanError {
    if stderr.contains(LOCATION_DISABLED_MARKER) {
        ScanError::LocationDisabled
    } else {
        ScanError::CommandFailed(stderr.to_string())
    }
}

/// Check whether a program resolves on PATH (or exists, for explicit paths)
fn find_in_path(program: &OsStr) -> bool {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate);
    }

    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| is_executable(&dir.join(program))))
        .unwrap_or(false)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
