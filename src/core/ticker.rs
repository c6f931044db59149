use crate::config::TickerConfig;
use crate::core::shutdown::ShutdownSignal;
use crate::core::{Counter, Line, LineSink, Result, TickerState};
use crate::utils::validation::Validate;

/// The heartbeat loop: one banner, then one tick line per interval, forever.
pub struct Ticker<S: LineSink> {
    sink: S,
    config: TickerConfig,
    counter: Counter,
}

impl<S: LineSink> Ticker<S> {
    pub fn new(sink: S, config: TickerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sink,
            config,
            counter: Counter::new(),
        })
    }

    /// Run until `shutdown` fires or the sink fails.
    ///
    /// With [`ShutdownSignal::never`] this only ever returns an error.
    pub async fn run(mut self, mut shutdown: ShutdownSignal) -> Result<()> {
        let mut state = TickerState::Starting;

        loop {
            if shutdown.shutdown_requested() {
                tracing::info!(next = self.counter.value(), "🛑 Shutdown requested, ticker stopped");
                return Ok(());
            }

            match state {
                TickerState::Starting => {
                    self.sink.emit(&Line::Banner).await?;
                    tracing::info!(interval = ?self.config.interval, "🚀 Ticker started");
                }
                TickerState::Ticking => {
                    let value = self.counter.value();
                    self.sink.emit(&Line::Tick(value)).await?;
                    tracing::debug!(counter = value, "tick");
                    self.counter.advance();

                    if shutdown.shutdown_requested() {
                        continue;
                    }

                    tokio::select! {
                        _ = tokio::time::sleep(self.config.interval) => {}
                        _ = shutdown.wait() => continue,
                    }
                }
            }

            state = state.next();
        }
    }
}
