/// Core type definitions for the market clock
use serde::{Deserialize, Serialize};

/// One refresh of the market state, derived fresh from a single instant.
///
/// Every field is recomputed per call; nothing is carried between polls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// True during regular hours on a trading day
    pub is_open: bool,
    /// Seconds to the next state boundary: close if open, next open if closed
    pub seconds_remaining: i64,
    /// `seconds_remaining` as zero-padded HH:MM:SS (hours uncapped)
    pub countdown: String,
    /// "MARKET OPEN" or "MARKET CLOSED"
    pub status_label: String,
    /// "TIME UNTIL MARKET CLOSE" or "TIME UNTIL MARKET OPEN"
    pub countdown_label: String,
    /// "TODAY", "TOMORROW", or an upper-cased English weekday name
    pub next_trading_day: String,
    /// Wall clock in the exchange zone, HH:MM:SS
    pub ny_clock: String,
    /// Wall clock in the host's local zone, HH:MM:SS
    pub local_clock: String,
    /// Local zone abbreviation ("EST", "PST", ...), display only
    pub local_tz_abbr: String,
}

/// Driver configuration. Trading hours and holiday rules are fixed and
/// deliberately absent from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_refresh_secs() -> u64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_log_level(),
            refresh_secs: default_refresh_secs(),
        }
    }
}
