//! Human-readable formatting for sizes and timestamps.

use chrono::{DateTime, Local};

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Binary-unit size label with at most two decimals, e.g. `1536` → `"1.5 KB"`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    let rounded = (scaled * 100.0).round() / 100.0;
    let number = format!("{rounded:.2}");
    let number = number.trim_end_matches('0').trim_end_matches('.');
    format!("{number} {}", UNITS[unit])
}

/// Local wall-clock time as `HH:MM:SS`.
pub fn format_time(time: &DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(label: &str) -> (f64, usize) {
        let (number, unit) = label.split_once(' ').unwrap();
        let index = UNITS.iter().position(|u| *u == unit).unwrap();
        (number.parse().unwrap(), index)
    }

    #[test]
    fn formats_known_sizes() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(1), "1 Bytes");
        assert_eq!(format_bytes(500), "500 Bytes");
        assert_eq!(format_bytes(1023), "1023 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1234), "1.21 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn ordering_is_preserved() {
        let samples = [
            0u64, 1, 10, 500, 1000, 1023, 1024, 1025, 1536, 2047, 4096, 100_000, 1_048_575,
            1_048_576, 3_000_000, 1 << 30, 1 << 40,
        ];
        for pair in samples.windows(2) {
            let (a, b) = (parse(&format_bytes(pair[0])), parse(&format_bytes(pair[1])));
            let ordered = a.1 < b.1 || (a.1 == b.1 && a.0 <= b.0);
            assert!(ordered, "{} vs {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn time_is_zero_padded() {
        let time = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(format_time(&time), "07:05:03");
    }
}
