use thiserror::Error;

/// sysexits.h `EX_IOERR`
pub const EXIT_IO_ERROR: i32 = 74;
/// sysexits.h `EX_CONFIG`
pub const EXIT_CONFIG_ERROR: i32 = 78;

#[derive(Error, Debug)]
pub enum TickerError {
    #[error("Output failure: {0}")]
    OutputFailure(#[from] std::io::Error),

    #[error("Invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TickerError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TickerError::OutputFailure(_) => EXIT_IO_ERROR,
            TickerError::InvalidConfigValueError { .. } => EXIT_CONFIG_ERROR,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TickerError::OutputFailure(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                "Output stream was closed by its reader".to_string()
            }
            TickerError::OutputFailure(e) => format!("Cannot write to output stream: {}", e),
            TickerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TickerError>;
