use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::AdjustMode;
use crate::error::Context;

use super::FetchResult;

/// Field groups requested from the kline endpoint. `fields2` fixes the column
/// order of each kline row: date, open, close, high, low, volume, amount,
/// amplitude, change %, change, turnover rate.
const KLINE_FIELDS1: &str = "f1,f2,f3,f4,f5,f6,f7,f8,f9,f10,f11,f12,f13";
const KLINE_FIELDS2: &str = "f51,f52,f53,f54,f55,f56,f57,f58,f59,f60,f61";

pub fn kline_query(
    secid: &str,
    beg: &str,
    end: &str,
    klt: u32,
    adjust: AdjustMode,
) -> Vec<(&'static str, String)> {
    vec![
        ("fields1", KLINE_FIELDS1.to_string()),
        ("fields2", KLINE_FIELDS2.to_string()),
        ("beg", beg.to_string()),
        ("end", end.to_string()),
        ("rtntype", "6".to_string()),
        ("secid", secid.to_string()),
        ("klt", klt.to_string()),
        ("fqt", adjust.fqt().to_string()),
    ]
}

pub fn build_headers(headers: &HashMap<String, String>) -> FetchResult<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .with_context(|| format!("Invalid header name: {}", key))?;
        let header_value = HeaderValue::from_str(value)
            .with_context(|| format!("Invalid header value for {}", key))?;
        map.insert(name, header_value);
    }
    Ok(map)
}
