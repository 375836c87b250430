//! Lookup tables between platform enums and the vendor's query conventions.

use crate::trader::{Exchange, Interval};

/// Equity exchanges served by the vendor's stock quote surface.
pub const STOCK_EXCHANGES: [Exchange; 3] = [Exchange::Sse, Exchange::Szse, Exchange::Bse];

/// Futures exchanges served by the vendor's futures quote surface.
pub const FUTURE_EXCHANGES: [Exchange; 5] = [
    Exchange::Cffex,
    Exchange::Shfe,
    Exchange::Czce,
    Exchange::Dce,
    Exchange::Ine,
];

/// Vendor market code for an exchange.
///
/// GFEX has a code but is in neither exchange class, so no query reaches it.
pub fn vendor_exchange_code(exchange: Exchange) -> Option<&'static str> {
    match exchange {
        Exchange::Cffex => Some("8"),
        Exchange::Shfe => Some("113"),
        Exchange::Czce => Some("115"),
        Exchange::Dce => Some("114"),
        Exchange::Ine => Some("142"),
        Exchange::Gfex => Some("225"),
        Exchange::Sse => Some("SSE"),
        Exchange::Szse => Some("SZSE"),
        _ => None,
    }
}

/// Which vendor dataset a query goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteCategory {
    Stock,
    Futures,
}

impl QuoteCategory {
    pub fn from_exchange(exchange: Exchange) -> Option<Self> {
        if STOCK_EXCHANGES.contains(&exchange) {
            Some(QuoteCategory::Stock)
        } else if FUTURE_EXCHANGES.contains(&exchange) {
            Some(QuoteCategory::Futures)
        } else {
            None
        }
    }
}

/// Translate a platform symbol into the vendor's quote identifier.
pub fn to_vendor_symbol(symbol: &str, exchange: Exchange) -> Option<String> {
    match QuoteCategory::from_exchange(exchange)? {
        QuoteCategory::Stock => Some(symbol.to_string()),
        QuoteCategory::Futures => {
            let code = vendor_exchange_code(exchange)?;
            Some(format!("{code}.{symbol}").to_lowercase())
        }
    }
}

/// Vendor kline type (`klt`) for an interval. 5/15/30-minute and monthly bars
/// are not offered through this datafeed.
pub fn to_vendor_interval(interval: Interval) -> Option<u32> {
    match interval {
        Interval::Minute => Some(1),
        Interval::Hour => Some(60),
        Interval::Daily => Some(101),
        Interval::Weekly => Some(102),
        _ => None,
    }
}

/// Shape of the vendor's date column for a given interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    Date,
    DateTime,
}

impl TimestampFormat {
    pub fn for_interval(interval: Interval) -> Self {
        match interval {
            Interval::Daily | Interval::Weekly | Interval::Monthly => TimestampFormat::Date,
            Interval::Minute
            | Interval::Minute5
            | Interval::Minute15
            | Interval::Minute30
            | Interval::Hour
            | Interval::Tick => TimestampFormat::DateTime,
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::Date => "%Y-%m-%d",
            TimestampFormat::DateTime => "%Y-%m-%d %H:%M",
        }
    }
}
