pub mod shutdown;
pub mod ticker;

pub use crate::domain::model::{Counter, Line, TickerState};
pub use crate::domain::ports::LineSink;
pub use crate::utils::error::Result;
