//! Termux WiFi Scan - nearby network table for Android/Termux
//!
//! Runs `termux-wifi-scaninfo` once and prints SSID, signal strength and
//! channel for each network, strongest first.

use std::io::{self, stdout};
use std::process::ExitCode;

use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use termux_wifi_scan::{app, scanner};

fn main() -> ExitCode {
    // stdout carries the table, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let color = stdout().is_tty();
    let scanner = scanner::create_scanner();

    let (text, code) = app::report(app::run(scanner.as_ref()), color);
    print!("{}", text);
    ExitCode::from(code)
}
