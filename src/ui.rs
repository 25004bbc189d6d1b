//! Table Rendering Module
//!
//! Builds the network table and status messages as plain strings. Colour is
//! applied with crossterm styling only when asked for, so the same code serves
//! terminals and redirected output.

use crossterm::style::{Color, Stylize};

use crate::scanner::{Network, ScanError, SignalTier};

/// Width of the SSID column
const SSID_WIDTH: usize = 20;

/// Shown in place of an empty SSID
const HIDDEN_SSID: &str = "[Hidden]";

/// Render the header, separator and one row per network, in the given order
pub fn render_table(networks: &[Network], color: bool) -> String {
    let header = format!("{:<20} {:<10} {:>7}", "SSID", "Strength", "Channel");
    let mut out = if color {
        header.bold().to_string()
    } else {
        header
    };
    out.push('\n');
    out.push_str(&"-".repeat(38));
    out.push('\n');

    for network in networks {
        out.push_str(&format!(
            "{:<20} {} ({} dBm) {:>5}\n",
            display_ssid(network),
            rssi_to_bars(network.rssi, color),
            network.rssi,
            network.channel()
        ));
    }

    out
}

/// Single-character strength indicator, coloured by tier
pub fn rssi_to_bars(rssi: i32, color: bool) -> String {
    let tier = crate::scanner::rssi_to_tier(rssi);
    paint(tier_glyph(tier), tier_color(tier), color)
}

/// Glyph for a tier. Very weak is a blank cell.
pub fn tier_glyph(tier: SignalTier) -> &'static str {
    match tier {
        SignalTier::Strong => "█",
        SignalTier::Good => "▆",
        SignalTier::Fair => "▄",
        SignalTier::Weak => "▂",
        SignalTier::VeryWeak => " ",
    }
}

fn tier_color(tier: SignalTier) -> Option<Color> {
    match tier {
        SignalTier::Strong | SignalTier::Good => Some(Color::DarkGreen),
        SignalTier::Fair => None,
        SignalTier::Weak | SignalTier::VeryWeak => Some(Color::DarkRed),
    }
}

/// Render an outcome that ends the run before a table is printed
pub fn render_error(err: &ScanError, color: bool) -> String {
    let headline_color = if err.is_failure() {
        Color::DarkRed
    } else {
        Color::DarkYellow
    };
    let prefix = if err.is_failure() && !matches!(err, ScanError::CommandFailed(_)) {
        "[!] Error: "
    } else {
        "[!] "
    };

    let mut out = paint(&format!("{}{}", prefix, err), Some(headline_color), color);
    out.push('\n');
    if let Some(hint) = err.hint() {
        out.push_str(hint);
        out.push('\n');
    }
    out
}

/// SSID cut to the column width, counted in characters
fn display_ssid(network: &Network) -> String {
    match network.visible_ssid() {
        Some(ssid) => ssid.chars().take(SSID_WIDTH).collect(),
        None => HIDDEN_SSID.to_string(),
    }
}

fn paint(text: &str, fg: Option<Color>, color: bool) -> String {
    match fg {
        Some(fg) if color => text.with(fg).to_string(),
        _ => text.to_string(),
    }
}
