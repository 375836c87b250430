use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

use crate::error::{AppError, Context, Result};

use super::{validator, AdjustMode, DatafeedConfig, EastmoneyConfig};

/// Load a datafeed configuration from JSON, filling absent fields from the builtin defaults.
pub fn load_config(path: &Path) -> Result<DatafeedConfig> {
    let shown = path.display();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read datafeed config JSON at {}", shown))?;

    let raw: RawDatafeedConfig = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse datafeed config JSON at {}", shown))?;

    let config = raw.into_config()?;
    validator::validate_config(&config)?;

    Ok(config)
}

#[derive(Debug, Deserialize, Default)]
struct RawDatafeedConfig {
    #[serde(default)]
    gateway_name: Option<String>,
    #[serde(default)]
    eastmoney: RawEastmoneyConfig,
}

#[derive(Debug, Deserialize, Default)]
struct RawEastmoneyConfig {
    #[serde(default)]
    kline_endpoint: Option<String>,
    #[serde(default)]
    headers: Option<HashMap<String, String>>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    adjust: Option<String>,
}

impl RawDatafeedConfig {
    fn into_config(self) -> Result<DatafeedConfig> {
        let defaults = DatafeedConfig::builtin();

        Ok(DatafeedConfig {
            gateway_name: self.gateway_name.unwrap_or(defaults.gateway_name),
            eastmoney: self.eastmoney.into_config(defaults.eastmoney)?,
        })
    }
}

impl RawEastmoneyConfig {
    fn into_config(self, defaults: EastmoneyConfig) -> Result<EastmoneyConfig> {
        let adjust = match self.adjust {
            Some(value) => parse_adjust_mode(&value)?,
            None => defaults.adjust,
        };

        Ok(EastmoneyConfig {
            kline_endpoint: self.kline_endpoint.unwrap_or(defaults.kline_endpoint),
            headers: self.headers.unwrap_or(defaults.headers),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
            adjust,
        })
    }
}

fn parse_adjust_mode(value: &str) -> Result<AdjustMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "0" => Ok(AdjustMode::None),
        "forward" | "qfq" | "1" => Ok(AdjustMode::Forward),
        "backward" | "hfq" | "2" => Ok(AdjustMode::Backward),
        other => Err(AppError::message(format!(
            "unknown adjust mode `{other}` (expected none, forward or backward)"
        ))),
    }
}
