use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::{validator, DatafeedConfig};
use crate::error::Result;
use crate::fetch::{build_bars, EastmoneyClient, FuturesQuotes, QuoteSurfaces, StockQuotes};
use crate::mapping::{to_vendor_interval, to_vendor_symbol, QuoteCategory};
use crate::trader::{BarData, Datafeed, HistoryRequest, Output};
use crate::utils::compact_date;

/// Historical bar service backed by Eastmoney kline data.
pub struct EfinanceDatafeed {
    inited: bool,
    gateway_name: String,
    surfaces: QuoteSurfaces,
}

impl EfinanceDatafeed {
    pub fn new(config: DatafeedConfig) -> Result<Self> {
        validator::validate_config(&config)?;

        let client = Arc::new(EastmoneyClient::new(config.eastmoney)?);
        let surfaces = QuoteSurfaces::new(
            Box::new(StockQuotes::new(Arc::clone(&client))),
            Box::new(FuturesQuotes::new(client)),
        );

        Ok(Self::with_surfaces(config.gateway_name, surfaces))
    }

    pub fn with_surfaces(gateway_name: impl Into<String>, surfaces: QuoteSurfaces) -> Self {
        Self {
            inited: false,
            gateway_name: gateway_name.into(),
            surfaces,
        }
    }

    pub fn is_inited(&self) -> bool {
        self.inited
    }

    /// Initialize on first use; later calls are no-ops.
    pub fn ensure_ready(&mut self, output: Output<'_>) -> bool {
        if self.inited {
            return true;
        }
        self.init(output)
    }
}

impl Datafeed for EfinanceDatafeed {
    fn init(&mut self, _output: Output<'_>) -> bool {
        if self.inited {
            return true;
        }

        self.inited = true;
        info!(
            "efinance datafeed initialized (gateway {})",
            self.gateway_name
        );

        true
    }

    fn query_bar_history(
        &mut self,
        req: &HistoryRequest,
        output: Output<'_>,
    ) -> Option<Vec<BarData>> {
        self.ensure_ready(&mut *output);

        let start = compact_date(req.start);
        let end = compact_date(req.end);

        let Some(vendor_symbol) = to_vendor_symbol(&req.symbol, req.exchange) else {
            debug!("{} is not served by efinance", req.vt_symbol());
            return None;
        };
        let Some(klt) = to_vendor_interval(req.interval) else {
            debug!("interval {} is not served by efinance", req.interval);
            return None;
        };
        let category = QuoteCategory::from_exchange(req.exchange)?;

        let mut table = match self
            .surfaces
            .select(category)
            .get_quote_history(&vendor_symbol, &start, &end, klt)
        {
            Ok(table) => table,
            Err(err) => {
                warn!("kline query for {} failed: {err}", req.vt_symbol());
                if err.is_transport() {
                    output(&format!(
                        "I/O error while querying {}: {err}",
                        req.vt_symbol()
                    ));
                } else {
                    output(&format!(
                        "Unexpected kline response for {}: {err}",
                        req.vt_symbol()
                    ));
                }
                return Some(Vec::new());
            }
        };

        table.fill_missing();
        let bars = build_bars(req, &table, &self.gateway_name);
        debug!(
            "built {} bars from {} rows for {}",
            bars.len(),
            table.len(),
            req.vt_symbol()
        );

        Some(bars)
    }
}
