//! # Unit Formatting
//!
//! Human-readable sizes and clock-style durations for the menu header.

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats a byte count with one decimal place, scaling by 1024.
/// Sizes beyond the last unit stay in `GB` (e.g. `1024.0 GB`).
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut index = 0;
    while index + 1 < SIZE_UNITS.len() && bytes >= 1024u64.pow(index as u32 + 1) {
        index += 1;
    }

    let scaled = bytes as f64 / 1024f64.powi(index as i32);
    format!("{:.1} {}", scaled, SIZE_UNITS[index])
}

/// Formats milliseconds as `HH:MM:SS`. Non-finite input renders `--:--:--`.
pub fn format_duration(milliseconds: f64) -> String {
    if !milliseconds.is_finite() {
        return "--:--:--".to_string();
    }

    let ms = milliseconds.max(0.0) as u64;
    let hours = ms / 3_600_000;
    let minutes = ms % 3_600_000 / 60_000;
    let seconds = ms % 60_000 / 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
