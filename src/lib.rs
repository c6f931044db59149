pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::stdout::{StdoutSink, WriterSink};
pub use config::TickerConfig;
pub use core::{
    shutdown::{ShutdownHandle, ShutdownSignal},
    ticker::Ticker,
};
pub use utils::error::{Result, TickerError};
