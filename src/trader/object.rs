use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::constant::{Exchange, Interval};

/// Candlestick bar for a single instrument and interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    pub symbol: String,
    pub exchange: Exchange,
    pub datetime: DateTime<FixedOffset>,
    pub interval: Interval,
    pub volume: f64,
    pub turnover: f64,
    pub open_interest: f64,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub gateway_name: String,
}

impl BarData {
    pub fn vt_symbol(&self) -> String {
        format!("{}.{}", self.symbol, self.exchange)
    }
}

/// Request for a range of historical bars; both dates are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequest {
    pub symbol: String,
    pub exchange: Exchange,
    pub interval: Interval,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HistoryRequest {
    pub fn new(
        symbol: impl Into<String>,
        exchange: Exchange,
        interval: Interval,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange,
            interval,
            start,
            end,
        }
    }

    pub fn vt_symbol(&self) -> String {
        format!("{}.{}", self.symbol, self.exchange)
    }
}
