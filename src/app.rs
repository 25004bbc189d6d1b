//! Scan Orchestration
//!
//! One pass: acquire, decode, order by signal strength.

use tracing::debug;

use crate::scanner::{Network, ScanResult, WiFiScanner};
use crate::ui;

/// Run a scan and return the networks strongest first
pub fn run(scanner: &dyn WiFiScanner) -> ScanResult<Vec<Network>> {
    if !scanner.is_available() {
        debug!("Scan backend not found on PATH, trying anyway");
    }

    let mut networks = scanner.scan()?;
    for net in &networks {
        debug!(ssid = ?net.ssid, rssi = net.rssi, frequency = net.frequency, "Network");
    }

    sort_by_signal(&mut networks);
    Ok(networks)
}

/// Sort by RSSI, strongest first. Stable, so equal readings keep scan order.
pub fn sort_by_signal(networks: &mut [Network]) {
    networks.sort_by(|a, b| b.rssi.cmp(&a.rssi));
}

/// Text to print and process exit status for a finished scan
pub fn report(result: ScanResult<Vec<Network>>, color: bool) -> (String, u8) {
    match result {
        Ok(networks) => (ui::render_table(&networks, color), 0),
        Err(e) => (ui::render_error(&e, color), e.exit_code()),
    }
}
