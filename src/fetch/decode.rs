use std::io::Cursor;

use serde::Deserialize;

use crate::error::{AppError, Context};

use super::table::{VendorRow, VendorTable};
use super::FetchResult;

const DATE: usize = 0;
const OPEN: usize = 1;
const CLOSE: usize = 2;
const HIGH: usize = 3;
const LOW: usize = 4;
const VOLUME: usize = 5;
const AMOUNT: usize = 6;
const AMPLITUDE: usize = 7;
const CHANGE_PCT: usize = 8;
const CHANGE: usize = 9;
const TURNOVER_RATE: usize = 10;

#[derive(Debug, Deserialize)]
struct KlineEnvelope {
    #[serde(default)]
    rc: i64,
    data: Option<KlineData>,
}

#[derive(Debug, Deserialize)]
struct KlineData {
    code: Option<String>,
    name: Option<String>,
    #[serde(default)]
    klines: Vec<String>,
}

/// Decode a kline endpoint body. A `null` data block means the vendor has no
/// bars for the query and yields an empty table.
pub fn decode_kline_response(body: &str, secid: &str) -> FetchResult<VendorTable> {
    let envelope: KlineEnvelope = serde_json::from_str(body)
        .with_context(|| format!("Failed to parse kline JSON for {}", secid))?;

    if envelope.rc != 0 {
        return Err(AppError::message(format!(
            "Kline request for {} rejected with rc={}",
            secid, envelope.rc
        )));
    }

    let Some(data) = envelope.data else {
        return Ok(VendorTable::default());
    };

    let rows = parse_kline_rows(&data.klines)
        .with_context(|| format!("Failed to read kline rows for {}", secid))?;

    Ok(VendorTable {
        code: data.code,
        name: data.name,
        rows,
    })
}

pub fn parse_kline_rows(klines: &[String]) -> csv::Result<Vec<VendorRow>> {
    let joined = klines.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(joined));

    let mut rows = Vec::with_capacity(klines.len());
    for result in reader.records() {
        let record = result?;
        let date = match record.get(DATE).map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => continue,
        };

        let cell = |idx: usize| record.get(idx).and_then(parse_cell);

        rows.push(VendorRow {
            date,
            open: cell(OPEN),
            close: cell(CLOSE),
            high: cell(HIGH),
            low: cell(LOW),
            volume: cell(VOLUME),
            amount: cell(AMOUNT),
            amplitude: cell(AMPLITUDE),
            change_pct: cell(CHANGE_PCT),
            change: cell(CHANGE),
            turnover_rate: cell(TURNOVER_RATE),
        });
    }

    Ok(rows)
}

pub fn parse_cell(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
