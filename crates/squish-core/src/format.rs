//! Human-readable sizes for UIs.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with two decimals and a binary unit.
///
/// Divides by 1024 while the value is at least 1024 and a larger unit is
/// available. Ties round away from zero, so `1152` bytes is `"1.13 KB"`.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    let rounded = (size * 100.0).round() / 100.0;
    format!("{:.2} {}", rounded, UNITS[unit])
}

/// Share of `original` removed by compressing it to `compressed`, in percent.
///
/// Negative when the output grew; `0.0` for an empty original.
pub fn savings_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - compressed as f64) / original as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_examples() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1_048_576), "1.00 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
    }

    #[test]
    fn test_format_size_rounds_ties_up() {
        assert_eq!(format_size(1152), "1.13 KB"); // 1.125
        assert_eq!(format_size(1_048_575), "1024.00 KB");
    }

    #[test]
    fn test_format_size_caps_at_gigabytes() {
        assert_eq!(format_size(1_099_511_627_776), "1024.00 GB");
    }

    #[test]
    fn test_savings_percent() {
        assert_eq!(savings_percent(200, 50), 75.0);
        assert_eq!(savings_percent(100, 100), 0.0);
        assert_eq!(savings_percent(100, 150), -50.0);
        assert_eq!(savings_percent(0, 10), 0.0);
    }
}
