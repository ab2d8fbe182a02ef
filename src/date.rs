//! Serial dates for the 1900 date system

use chrono::NaiveDate;

/// Day zero of the 1900 date system as spreadsheet applications compute it.
///
/// Anchoring on 1899-12-30 rather than 1899-12-31 absorbs the fictitious
/// 1900-02-29, so every date from 1900-03-01 onwards matches exactly.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1899, 12, 30) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Convert a calendar date to its serial day number
pub fn serial_date(date: NaiveDate) -> i64 {
    date.signed_duration_since(EPOCH).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_offsets() {
        assert_eq!(serial_date(ymd(1899, 12, 31)), 1);
        assert_eq!(serial_date(ymd(1900, 3, 1)), 61);
    }

    #[test]
    fn test_known_serials() {
        assert_eq!(serial_date(ymd(2000, 1, 1)), 36526);
        assert_eq!(serial_date(ymd(2024, 1, 1)), 45292);
        assert_eq!(serial_date(ymd(2024, 1, 15)), 45306);
        assert_eq!(serial_date(ymd(2024, 2, 29)), 45351);
    }
}
