use time::UtcOffset;

/// Create a [`UtcOffset`] from whole hours.
///
/// # Examples
///
/// ```
/// use logger::utc_offset_hours;
///
/// let jakarta = utc_offset_hours(7);
/// let utc = utc_offset_hours(0);
/// ```
pub fn utc_offset_hours(hours: i8) -> UtcOffset {
    UtcOffset::from_hms(hours, 0, 0).expect("Invalid UTC offset hours")
}

/// Create a [`UtcOffset`] from hours, minutes and seconds, for half-hour
/// and 45-minute zones.
///
/// # Examples
///
/// ```
/// use logger::utc_offset_hms;
///
/// let india = utc_offset_hms(5, 30, 0);
/// let nepal = utc_offset_hms(5, 45, 0);
/// ```
pub fn utc_offset_hms(hours: i8, minutes: i8, seconds: i8) -> UtcOffset {
    UtcOffset::from_hms(hours, minutes, seconds).expect("Invalid UTC offset")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_hour_offsets() {
        assert_eq!(utc_offset_hours(7).whole_hours(), 7);
        assert_eq!(utc_offset_hours(-5).whole_hours(), -5);
        assert_eq!(utc_offset_hours(0), UtcOffset::UTC);
    }

    #[test]
    fn test_fractional_offsets() {
        let india = utc_offset_hms(5, 30, 0);
        assert_eq!(india.whole_minutes(), 5 * 60 + 30);
    }
}
