use crate::utils::error::Result;
use crate::utils::validation::{validate_non_zero_duration, Validate};
use std::time::Duration;

/// 啟動時輸出一次的識別訊息
pub const BANNER: &str = "[example] starting...";

/// 每次 tick 輸出的前綴，後面接十進位計數值
pub const TICK_PREFIX: &str = "[example] tick ";

/// 兩次 tick 之間的固定間隔 (牆上時間)
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Runtime settings for the ticker loop.
///
/// The binary always runs with [`TickerConfig::default`]; nothing is read from
/// flags, files or the environment. A shorter interval is only meant for
/// callers embedding the loop, such as tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerConfig {
    pub interval: Duration,
}

impl TickerConfig {
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval: TICK_INTERVAL,
        }
    }
}

impl Validate for TickerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_zero_duration("interval", self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_one_second() {
        let config = TickerConfig::default();
        assert_eq!(config.interval, Duration::from_millis(1000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let config = TickerConfig::with_interval(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fixed_texts_are_single_non_empty_lines() {
        // 固定字串若被改壞，輸出格式就會跟著壞
        assert!(!BANNER.trim().is_empty());
        for text in [BANNER, TICK_PREFIX] {
            assert!(!text.contains('\n') && !text.contains('\r'), "{:?}", text);
        }
    }

    #[test]
    fn test_tick_prefix_ends_with_space() {
        assert!(TICK_PREFIX.ends_with(' '));
        assert!(TICK_PREFIX.starts_with("[example]"));
    }
}
