use example_ticker::utils::logger;
use example_ticker::{ShutdownSignal, StdoutSink, Ticker, TickerConfig, TickerError};
use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // 初始化日誌 (只寫到 stderr)
    logger::init_logger();

    let ticker = match Ticker::new(StdoutSink::stdout(), TickerConfig::default()) {
        Ok(ticker) => ticker,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            exit_with(e);
        }
    };

    // 沒有安裝訊號處理，中斷或終止訊號依系統預設方式結束程序
    if let Err(e) = ticker.run(ShutdownSignal::never()).await {
        tracing::error!("❌ Ticker stopped: {} (exit code {})", e, e.exit_code());
        exit_with(e);
    }
}

/// stderr may share the closed pipe with stdout, so the message is best effort
/// and the exit code always comes from the error.
fn exit_with(e: TickerError) -> ! {
    let _ = writeln!(std::io::stderr(), "❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
