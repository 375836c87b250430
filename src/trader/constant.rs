use std::fmt;

use serde::{Deserialize, Serialize};

/// Exchange identifiers understood by the trading platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    // Chinese equities
    Sse,
    Szse,
    Bse,
    // Chinese futures
    Cffex,
    Shfe,
    Czce,
    Dce,
    Ine,
    Gfex,
    // Others
    Sehk,
    Hkfe,
    Smart,
    Nyse,
    Nasdaq,
    Cme,
    Local,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Sse => "SSE",
            Exchange::Szse => "SZSE",
            Exchange::Bse => "BSE",
            Exchange::Cffex => "CFFEX",
            Exchange::Shfe => "SHFE",
            Exchange::Czce => "CZCE",
            Exchange::Dce => "DCE",
            Exchange::Ine => "INE",
            Exchange::Gfex => "GFEX",
            Exchange::Sehk => "SEHK",
            Exchange::Hkfe => "HKFE",
            Exchange::Smart => "SMART",
            Exchange::Nyse => "NYSE",
            Exchange::Nasdaq => "NASDAQ",
            Exchange::Cme => "CME",
            Exchange::Local => "LOCAL",
        }
    }

    pub const ALL: [Exchange; 16] = [
        Exchange::Sse,
        Exchange::Szse,
        Exchange::Bse,
        Exchange::Cffex,
        Exchange::Shfe,
        Exchange::Czce,
        Exchange::Dce,
        Exchange::Ine,
        Exchange::Gfex,
        Exchange::Sehk,
        Exchange::Hkfe,
        Exchange::Smart,
        Exchange::Nyse,
        Exchange::Nasdaq,
        Exchange::Cme,
        Exchange::Local,
    ];
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bar sampling granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    Minute,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1h")]
    Hour,
    #[serde(rename = "d")]
    Daily,
    #[serde(rename = "w")]
    Weekly,
    #[serde(rename = "M")]
    Monthly,
    #[serde(rename = "tick")]
    Tick,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Minute => "1m",
            Interval::Minute5 => "5m",
            Interval::Minute15 => "15m",
            Interval::Minute30 => "30m",
            Interval::Hour => "1h",
            Interval::Daily => "d",
            Interval::Weekly => "w",
            Interval::Monthly => "M",
            Interval::Tick => "tick",
        }
    }

    pub const ALL: [Interval; 9] = [
        Interval::Minute,
        Interval::Minute5,
        Interval::Minute15,
        Interval::Minute30,
        Interval::Hour,
        Interval::Daily,
        Interval::Weekly,
        Interval::Monthly,
        Interval::Tick,
    ];
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
