use chrono::FixedOffset;

const CHINA_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// China Standard Time. Mainland China has observed UTC+8 without DST since 1991.
pub fn china_tz() -> FixedOffset {
    FixedOffset::east_opt(CHINA_UTC_OFFSET_SECS).expect("UTC+8 is a valid offset")
}

/// Round `value` to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
