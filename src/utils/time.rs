use chrono::NaiveDate;

/// `YYYYMMDD`, the date shape vendor query parameters expect.
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
