//! Shell-first streaming of a rendered page.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use vitrine_core::TimingContext;

/// Error raised while streaming.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    /// The shell was sent twice, or the sink is already finished.
    #[error("Invalid sink state: {0}")]
    InvalidState(&'static str),

    #[error("Streaming error: {0}")]
    Write(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Initial,
    ShellSent,
    Finished,
}

/// Streams the shell, then sections, then the closing markup.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell opening. Must come first.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), StreamError> {
        if self.state != SinkState::Initial {
            return Err(StreamError::InvalidState("shell already sent"));
        }

        self.write(html).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;
        Ok(())
    }

    /// Send a named section.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => return Err(StreamError::ShellNotSent),
            SinkState::Finished => return Err(StreamError::InvalidState("sink finished")),
            SinkState::ShellSent => {}
        }

        self.write(html).await?;
        self.timing.mark(&format!("section_{}_sent", name));
        self.sections_sent.push(name.to_string());
        Ok(())
    }

    /// Send the closing markup and close the underlying sink.
    pub async fn finish(&mut self, closing: &str) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => return Err(StreamError::ShellNotSent),
            SinkState::Finished => return Err(StreamError::InvalidState("sink finished")),
            SinkState::ShellSent => {}
        }

        self.write(closing).await?;
        self.inner
            .close()
            .await
            .map_err(|e| StreamError::Write(e.to_string()))?;
        self.timing.mark("finished");
        self.state = SinkState::Finished;
        Ok(())
    }

    async fn write(&mut self, html: &str) -> Result<(), StreamError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| StreamError::Write(e.to_string()))
    }

    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn sink() -> StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> {
        StreamingSink::new(Vec::new(), TimingContext::new())
    }

    #[test]
    fn test_shell_first() {
        let mut sink = sink();
        assert_eq!(
            block_on(sink.send_section("hero", "<section>")),
            Err(StreamError::ShellNotSent)
        );
        assert_eq!(block_on(sink.finish("</html>")), Err(StreamError::ShellNotSent));
    }

    #[test]
    fn test_stream_in_order() {
        let mut sink = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.send_section("hero", "<hero>").await.unwrap();
            sink.send_section("categories", "<cats>").await.unwrap();
            sink.finish("</html>").await.unwrap();
        });

        assert_eq!(sink.sections_sent(), ["hero", "categories"]);
        assert!(sink.timing().since_start("section_categories_sent").is_some());
        let chunks: Vec<String> = sink
            .into_inner()
            .into_iter()
            .map(|c| String::from_utf8(c).unwrap())
            .collect();
        assert_eq!(chunks, vec!["<html>", "<hero>", "<cats>", "</html>"]);
    }

    #[test]
    fn test_nothing_after_finish() {
        let mut sink = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.finish("</html>").await.unwrap();
        });
        assert!(matches!(
            block_on(sink.send_section("late", "x")),
            Err(StreamError::InvalidState(_))
        ));
        assert!(block_on(sink.send_shell("<html>")).is_err());
    }
}
