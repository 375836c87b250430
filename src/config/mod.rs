use std::collections::HashMap;

pub mod loader;
pub mod validator;

pub use loader::load_config;

pub const DEFAULT_GATEWAY_NAME: &str = "EF";
pub const DEFAULT_KLINE_ENDPOINT: &str = "https://push2his.eastmoney.com/api/qt/stock/kline/get";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Price adjustment applied by the vendor (`fqt` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjustMode {
    None,
    #[default]
    Forward,
    Backward,
}

impl AdjustMode {
    pub fn fqt(&self) -> u8 {
        match self {
            AdjustMode::None => 0,
            AdjustMode::Forward => 1,
            AdjustMode::Backward => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EastmoneyConfig {
    pub kline_endpoint: String,
    pub headers: HashMap<String, String>,
    pub timeout_secs: u64,
    pub adjust: AdjustMode,
}

#[derive(Debug, Clone)]
pub struct DatafeedConfig {
    pub gateway_name: String,
    pub eastmoney: EastmoneyConfig,
}

impl EastmoneyConfig {
    pub fn builtin() -> Self {
        let headers = HashMap::from([
            (
                "User-Agent".to_string(),
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            ),
            (
                "Referer".to_string(),
                "https://quote.eastmoney.com/".to_string(),
            ),
            (
                "Accept-Language".to_string(),
                "en-US,en;q=0.9".to_string(),
            ),
        ]);

        Self {
            kline_endpoint: DEFAULT_KLINE_ENDPOINT.to_string(),
            headers,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            adjust: AdjustMode::default(),
        }
    }
}

impl DatafeedConfig {
    pub fn builtin() -> Self {
        Self {
            gateway_name: DEFAULT_GATEWAY_NAME.to_string(),
            eastmoney: EastmoneyConfig::builtin(),
        }
    }
}

impl Default for DatafeedConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
