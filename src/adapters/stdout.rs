use crate::domain::model::Line;
use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Line sink over any async writer.
///
/// Each line is rendered with its newline into one buffer and handed to a
/// single `write_all`, then flushed, so readers never observe half a line
/// from a completed emission.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

pub type StdoutSink = WriterSink<tokio::io::Stdout>;

impl<W> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.writer
    }
}

impl StdoutSink {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W> LineSink for WriterSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn emit(&mut self, line: &Line) -> Result<()> {
        let buf = format!("{}\n", line);
        self.writer.write_all(buf.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}
