use crate::domain::model::Line;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LineSink: Send {
    /// Write one complete, newline-terminated line and flush it.
    async fn emit(&mut self, line: &Line) -> Result<()>;
}
