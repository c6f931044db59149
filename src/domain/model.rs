use crate::config::{BANNER, TICK_PREFIX};
use std::fmt;

/// Non-negative tick index owned by the ticker loop.
///
/// Starts at 0 and advances by exactly one after each emitted tick line.
/// Advancing past `u64::MAX` wraps to zero; at one tick per second that is
/// roughly 584 billion years of uptime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter(u64);

impl Counter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

#[cfg(test)]
impl From<u64> for Counter {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single line of process output, without its trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Banner,
    Tick(u64),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Banner => f.write_str(BANNER),
            Line::Tick(value) => write!(f, "{}{}", TICK_PREFIX, value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    Starting,
    Ticking,
}

impl TickerState {
    /// `Starting` always moves on to `Ticking`, which re-enters itself.
    pub fn next(self) -> Self {
        match self {
            TickerState::Starting | TickerState::Ticking => TickerState::Ticking,
        }
    }
}
