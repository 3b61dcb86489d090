//! Shared formatting utilities for size display and console output

use console::Emoji;
use std::sync::atomic::{AtomicBool, Ordering};

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

static EMOJI_ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn console emoji on or off for the rest of the process
///
/// When off, [`emoji`] always yields the plain-text fallback.
pub fn set_emoji_enabled(enabled: bool) {
    EMOJI_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Render an emoji for console output, honoring [`set_emoji_enabled`]
pub fn emoji(icon: Emoji<'static, 'static>) -> String {
    if EMOJI_ENABLED.load(Ordering::Relaxed) {
        icon.to_string()
    } else {
        icon.1.to_string()
    }
}

/// Placeholder shown for a missing value
pub const NOT_AVAILABLE: &str = "N/A";

const KB: f64 = 1024.0;

/// Format an optional example size in kilobytes with three decimals
///
/// # Examples
///
/// ```
/// use wasm_size_report::fmt::format_size;
///
/// assert_eq!(format_size(None), "N/A");
/// assert_eq!(format_size(Some(0)), "0");
/// assert_eq!(format_size(Some(1024)), "1.000");
/// ```
pub fn format_size(bytes: Option<u64>) -> String {
    match bytes {
        None => NOT_AVAILABLE.to_string(),
        Some(0) => "0".to_string(),
        Some(bytes) => format!("{:.3}", bytes as f64 / KB),
    }
}

/// Format a signed byte delta in kilobytes with a forced sign
///
/// ```
/// use wasm_size_report::fmt::format_delta_kb;
///
/// assert_eq!(format_delta_kb(20), "+0.020");
/// assert_eq!(format_delta_kb(-2048), "-2.000");
/// ```
pub fn format_delta_kb(delta_bytes: i128) -> String {
    format!("{:+.3}", delta_bytes as f64 / KB)
}

/// Format a fractional change as a signed percentage
///
/// ```
/// use wasm_size_report::fmt::format_percent;
///
/// assert_eq!(format_percent(0.02), "+2.000%");
/// assert_eq!(format_percent(-0.5), "-50.000%");
/// ```
pub fn format_percent(fraction: f64) -> String {
    format!("{:+.3}%", fraction * 100.0)
}

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use wasm_size_report::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;

    if bytes >= MIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}
