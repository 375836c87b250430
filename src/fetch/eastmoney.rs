use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::config::EastmoneyConfig;
use crate::error::Context;

use super::decode::decode_kline_response;
use super::request::{build_headers, kline_query};
use super::table::VendorTable;
use super::{FetchResult, QuoteSurface};

const SH_MARKET: &str = "1";
const SZ_MARKET: &str = "0";

/// Blocking client for the Eastmoney kline endpoint.
pub struct EastmoneyClient {
    client: Client,
    config: EastmoneyConfig,
}

impl EastmoneyClient {
    pub fn new(config: EastmoneyConfig) -> FetchResult<Self> {
        let headers = build_headers(&config.headers)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .context("Failed to construct kline HTTP client")?;

        Ok(Self { client, config })
    }

    /// Issue one kline request for a fully qualified `secid` (`market.code`).
    pub fn fetch_klines(
        &self,
        secid: &str,
        beg: &str,
        end: &str,
        klt: u32,
    ) -> FetchResult<VendorTable> {
        let query = kline_query(secid, beg, end, klt, self.config.adjust);
        debug!(
            "GET {} secid={} klt={} beg={} end={}",
            self.config.kline_endpoint, secid, klt, beg, end
        );

        let response = self
            .client
            .get(&self.config.kline_endpoint)
            .query(&query)
            .send()
            .with_context(|| format!("Kline request failed for {}", secid))?
            .error_for_status()
            .with_context(|| format!("Kline request returned error status for {}", secid))?;

        let body = response
            .text()
            .with_context(|| format!("Failed to read kline body for {}", secid))?;

        let table = decode_kline_response(&body, secid)?;
        let code = table.code.as_deref().unwrap_or(secid);
        let name = table.name.as_deref().unwrap_or("-");
        let rows = table.len();
        debug!("received {} kline rows for {} {}", rows, code, name);
        Ok(table)
    }
}

/// Resolve an A-share code to the vendor's `market.code` identifier.
/// Shanghai listings (5xx funds, 6xx shares, 900 B-shares) live in market 1;
/// Shenzhen and Beijing (including the 920 range) live in market 0.
pub fn equity_secid(code: &str) -> String {
    if code.contains('.') {
        return code.to_string();
    }

    let market = if code.starts_with("92") {
        SZ_MARKET
    } else {
        match code.chars().next() {
            Some('5' | '6' | '9') => SH_MARKET,
            _ => SZ_MARKET,
        }
    };

    format!("{market}.{code}")
}

/// Stock quote surface: equity codes are qualified with their market before the request.
pub struct StockQuotes {
    client: Arc<EastmoneyClient>,
}

impl StockQuotes {
    pub fn new(client: Arc<EastmoneyClient>) -> Self {
        Self { client }
    }
}

impl QuoteSurface for StockQuotes {
    fn get_quote_history(
        &self,
        symbol: &str,
        beg: &str,
        end: &str,
        klt: u32,
    ) -> FetchResult<VendorTable> {
        let secid = equity_secid(symbol);
        self.client.fetch_klines(&secid, beg, end, klt)
    }
}

/// Futures quote surface: symbols already carry the vendor market code.
pub struct FuturesQuotes {
    client: Arc<EastmoneyClient>,
}

impl FuturesQuotes {
    pub fn new(client: Arc<EastmoneyClient>) -> Self {
        Self { client }
    }
}

impl QuoteSurface for FuturesQuotes {
    fn get_quote_history(
        &self,
        symbol: &str,
        beg: &str,
        end: &str,
        klt: u32,
    ) -> FetchResult<VendorTable> {
        self.client.fetch_klines(symbol, beg, end, klt)
    }
}
