use chrono::DateTime;

/// Shorten an address to its first 6 and last 4 characters for fixed-width
/// display. Empty input yields an empty string. Slicing is character-based,
/// so this never panics; for inputs shorter than 10 characters the two
/// slices may overlap, which is accepted.
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let head: String = address.chars().take(6).collect();
    let tail_start = address.chars().count().saturating_sub(4);
    let tail: String = address.chars().skip(tail_start).collect();
    format!("{head}...{tail}")
}

/// Render a millisecond epoch timestamp as e.g. `Jan 1, 12:00 AM` (UTC,
/// English month names). Values outside chrono's representable range yield
/// an empty string instead of panicking.
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%b %-d, %I:%M %p").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_shows_head_and_tail() {
        let addr = "0x8f3b1c2d4e5f60718293a4b5c6d7e8f9000000000000000000000000000000ab";
        assert_eq!(format_address(addr), "0x8f3b...00ab");
    }

    #[test]
    fn empty_address_stays_empty() {
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn short_addresses_do_not_panic() {
        // Overlapping head/tail is fine, crashing is not.
        assert_eq!(format_address("0xab"), "0xab...0xab");
        assert_eq!(format_address("a"), "a...a");
    }

    #[test]
    fn multibyte_addresses_do_not_panic() {
        let formatted = format_address("日本語のアドレス文字列");
        assert!(formatted.contains("..."));
    }

    #[test]
    fn epoch_renders_in_utc() {
        assert_eq!(format_timestamp(0), "Jan 1, 12:00 AM");
    }

    #[test]
    fn known_timestamp_renders() {
        // 2024-07-04 15:30:00 UTC
        assert_eq!(format_timestamp(1_720_107_000_000), "Jul 4, 03:30 PM");
    }

    #[test]
    fn out_of_range_timestamps_yield_empty() {
        assert_eq!(format_timestamp(i64::MAX), "");
        assert_eq!(format_timestamp(i64::MIN), "");
    }
}
