//! Output formatting for CLI responses

use anyhow::Error;
use colored::Colorize;

/// Renders a frame as space-separated two-digit hex, the way it appears in
/// BLE captures.
pub fn format_frame_hex(frame: &[u8]) -> String {
    frame
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_frame_sent(label: &str, frame: &[u8]) {
    println!(
        "{} {} ({} bytes): {}",
        "Sent".green().bold(),
        label,
        frame.len(),
        format_frame_hex(frame)
    );
}

pub fn print_error(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_frame_hex() {
        assert_eq!(format_frame_hex(&[0x03, 0x0A, 0xFF]), "03 0a ff");
        assert_eq!(format_frame_hex(&[]), "");
    }
}
