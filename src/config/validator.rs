use crate::error::{AppError, Result};

use super::DatafeedConfig;

pub fn validate_config(config: &DatafeedConfig) -> Result<()> {
    let mut issues = Vec::new();

    if config.gateway_name.trim().is_empty() {
        issues.push("gateway_name must not be empty".to_string());
    }

    let eastmoney = &config.eastmoney;
    let endpoint = eastmoney.kline_endpoint.trim();
    if endpoint.is_empty() {
        issues.push("eastmoney.kline_endpoint must not be empty".to_string());
    } else if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        issues.push(format!(
            "eastmoney.kline_endpoint must be an http(s) URL, found `{endpoint}`"
        ));
    }

    if eastmoney.timeout_secs == 0 {
        issues.push("eastmoney.timeout_secs must be greater than zero".to_string());
    }

    for name in eastmoney.headers.keys() {
        if name.trim().is_empty() {
            issues.push("eastmoney.headers contains an empty header name".to_string());
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "invalid datafeed config: {}",
            issues.join("; ")
        )))
    }
}
