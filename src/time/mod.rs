pub mod session;
pub mod holidays;
pub mod format;

// Re-export specific items to avoid ambiguity
pub use session::{is_market_open, next_market_open, MARKET_OPEN, MARKET_CLOSE};
pub use holidays::{easter_sunday, good_friday, is_market_holiday, is_trading_day};
pub use format::{format_countdown, next_day_label};
