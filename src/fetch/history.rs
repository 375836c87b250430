use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use log::warn;

use crate::mapping::TimestampFormat;
use crate::trader::{china_tz, round_to, BarData, HistoryRequest};

use super::table::VendorTable;

/// Decimal places kept on every price field.
pub const PRICE_DECIMALS: i32 = 6;

/// Turn vendor rows into bars for `req`, one bar per timestamp.
///
/// Rows sharing a timestamp collapse onto the last one in vendor order. The
/// result is ascending by timestamp. Rows whose date cannot be parsed are
/// skipped. Numeric cells still missing here count as zero.
pub fn build_bars(req: &HistoryRequest, table: &VendorTable, gateway_name: &str) -> Vec<BarData> {
    let format = TimestampFormat::for_interval(req.interval);
    let mut bars: BTreeMap<DateTime<FixedOffset>, BarData> = BTreeMap::new();

    for row in &table.rows {
        let Some(datetime) = parse_row_timestamp(&row.date, format) else {
            warn!(
                "Skipping {} row with unparseable date `{}`",
                req.vt_symbol(),
                row.date
            );
            continue;
        };

        let value = |cell: Option<f64>| cell.unwrap_or(0.0);

        let bar = BarData {
            symbol: req.symbol.clone(),
            exchange: req.exchange,
            datetime,
            interval: req.interval,
            volume: value(row.volume),
            turnover: value(row.turnover_rate),
            open_interest: 0.0,
            open_price: round_to(value(row.open), PRICE_DECIMALS),
            high_price: round_to(value(row.high), PRICE_DECIMALS),
            low_price: round_to(value(row.low), PRICE_DECIMALS),
            close_price: round_to(value(row.close), PRICE_DECIMALS),
            gateway_name: gateway_name.to_string(),
        };

        bars.insert(datetime, bar);
    }

    bars.into_values().collect()
}

/// Parse a vendor date cell as China wall-clock time.
pub fn parse_row_timestamp(value: &str, format: TimestampFormat) -> Option<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    let pattern = format.pattern();
    let naive = match format {
        TimestampFormat::Date => {
            let date = NaiveDate::parse_from_str(trimmed, pattern).ok()?;
            date.and_hms_opt(0, 0, 0)?
        }
        TimestampFormat::DateTime => NaiveDateTime::parse_from_str(trimmed, pattern).ok()?,
    };

    naive.and_local_timezone(china_tz()).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::table::VendorRow;
    use crate::trader::{Exchange, Interval};
    use chrono::{TimeZone, Timelike};

    fn request(interval: Interval) -> HistoryRequest {
        HistoryRequest::new(
            "600000",
            Exchange::Sse,
            interval,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
        )
    }

    fn row(date: &str, close: f64) -> VendorRow {
        VendorRow {
            date: date.to_string(),
            open: Some(1.0),
            close: Some(close),
            high: Some(close.max(1.0)),
            low: Some(close.min(1.0)),
            volume: Some(100.0),
            turnover_rate: Some(0.5),
            ..VendorRow::default()
        }
    }

    #[test]
    fn duplicate_timestamps_keep_last_row() {
        let rows = vec![row("2023-01-03", 10.0), row("2023-01-03", 11.0)];
        let table = VendorTable::from_rows(rows);

        let bars = build_bars(&request(Interval::Daily), &table, "EF");

        assert_eq!(bars.len(), 1);
        assert!((bars[0].close_price - 11.0).abs() < 1e-6);
    }

    #[test]
    fn bars_are_ascending() {
        let table = VendorTable::from_rows(vec![
            row("2023-01-05", 3.0),
            row("2023-01-03", 1.0),
            row("2023-01-04", 2.0),
        ]);

        let bars = build_bars(&request(Interval::Daily), &table, "EF");

        assert_eq!(bars.len(), 3);
        let ascending = bars.windows(2).all(|w| w[0].datetime < w[1].datetime);
        assert!(ascending);
        assert!((bars[0].close_price - 1.0).abs() < 1e-6);
        assert!((bars[2].close_price - 3.0).abs() < 1e-6);
    }

    #[test]
    fn missing_volume_becomes_zero() {
        let mut incomplete = row("2023-01-03", 10.0);
        incomplete.volume = None;
        let table = VendorTable::from_rows(vec![incomplete]);

        let bars = build_bars(&request(Interval::Daily), &table, "EF");

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].volume, 0.0);
    }

    #[test]
    fn daily_rows_parse_as_dates_in_china_time() {
        let date = TimestampFormat::Date;
        let ts = parse_row_timestamp("2023-01-03", date).unwrap();
        let midnight = china_tz().with_ymd_and_hms(2023, 1, 3, 0, 0, 0).unwrap();
        assert_eq!(ts, midnight);
        assert_eq!(ts.offset().local_minus_utc(), 8 * 3600);
        assert!(parse_row_timestamp("2023-01-03 09:31", date).is_none());
    }

    #[test]
    fn intraday_rows_parse_with_time() {
        let date_time = TimestampFormat::DateTime;
        let ts = parse_row_timestamp("2023-01-03 09:31", date_time).unwrap();
        assert_eq!(ts.hour(), 9);
        assert_eq!(ts.minute(), 31);
        assert_eq!(ts.offset().local_minus_utc(), 8 * 3600);
        assert!(parse_row_timestamp("2023-01-03", date_time).is_none());
    }

    #[test]
    fn unparseable_rows_are_skipped() {
        let rows = vec![row("not a date", 1.0), row("2023-01-04", 2.0)];
        let table = VendorTable::from_rows(rows);

        let bars = build_bars(&request(Interval::Daily), &table, "EF");

        assert_eq!(bars.len(), 1);
    }

    #[test]
    fn prices_are_rounded_and_open_interest_is_zero() {
        let mut precise = row("2023-01-03 10:00", 10.123_456_789);
        precise.open = Some(10.000_000_4);
        let table = VendorTable::from_rows(vec![precise]);

        let bars = build_bars(&request(Interval::Hour), &table, "EF");

        assert!((bars[0].close_price - 10.123_457).abs() < 1e-12);
        assert!((bars[0].open_price - 10.0).abs() < 1e-12);
        assert_eq!(bars[0].open_interest, 0.0);
        assert_eq!(bars[0].gateway_name, "EF");
        assert_eq!(bars[0].interval, Interval::Hour);
    }
}
