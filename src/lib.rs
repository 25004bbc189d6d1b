//! Termux WiFi Scan
//!
//! Lists nearby WiFi networks reported by `termux-wifi-scaninfo` as a table
//! sorted by signal strength.
//!
//! - [`scanner`]: runs the platform helper and decodes its JSON
//! - [`app`]: one scan pass, strongest network first
//! - [`ui`]: table and message rendering

pub mod app;
pub mod scanner;
pub mod ui;
