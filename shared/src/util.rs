/// Current UTC time as an RFC 3339 string, the format stored on all records
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Generate a human-readable order number.
///
/// Format: `PX-YYYYMMDD-XXXXXXXX` (store prefix, UTC date, 8 uppercase hex
/// characters from a v4 UUID). Date-prefixed so numbers sort roughly by
/// creation time; the random suffix keeps them unique within a day.
pub fn order_number() -> String {
    let date = chrono::Utc::now().format("%Y%m%d");
    let suffix = uuid::Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("PX-{}-{}", date, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_number_format() {
        let number = order_number();
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "PX");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_order_numbers_are_unique() {
        let a = order_number();
        let b = order_number();
        assert_ne!(a, b);
    }

    #[test]
    fn test_now_iso_parses_back() {
        let ts = now_iso();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
