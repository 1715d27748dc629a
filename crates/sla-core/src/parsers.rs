//! String parsing helpers shared by the date and loader layers.

/// Parse a date string in ISO 8601 calendar format (`YYYY-MM-DD`).
///
/// Leading and trailing whitespace is ignored.  A time-of-day suffix
/// separated by `T` or a space (`2024-03-15T00:00:00`,
/// `2024-03-15 00:00:00`) is accepted and discarded.
///
/// Returns `(year, month, day)` on success.  Range checking is left to the
/// caller.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let date_part = s.split(['T', ' ']).next()?;
    let mut parts = date_part.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() || year.len() != 4 || month.is_empty() || day.is_empty() {
        return None;
    }
    let year: u16 = year.parse().ok()?;
    let month: u8 = month.parse().ok()?;
    let day: u8 = day.parse().ok()?;
    Some((year, month, day))
}

/// Parse a non-negative integer cell, tolerating a trailing `.0` as written
/// by spreadsheet exports (`"4.0"`).
pub fn parse_whole_number(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Ok(n) = s.parse::<u32>() {
        return Some(n);
    }
    let (int, frac) = s.split_once('.')?;
    if !frac.chars().all(|c| c == '0') {
        return None;
    }
    int.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-06-15"), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date(" 2023-06-15 "), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date("2023-06-15 00:00:00"), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date("2023-06-15T08:30:00"), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date("bad"), None);
        assert_eq!(parse_iso_date("15/06/2023"), None);
        assert_eq!(parse_iso_date("23-06-15"), None);
        assert_eq!(parse_iso_date("2023-06-15-01"), None);
    }

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_whole_number("4"), Some(4));
        assert_eq!(parse_whole_number(" 5.0 "), Some(5));
        assert_eq!(parse_whole_number("3.5"), None);
        assert_eq!(parse_whole_number("-1"), None);
        assert_eq!(parse_whole_number(""), None);
    }
}
