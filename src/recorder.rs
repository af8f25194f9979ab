use crate::error::ThinkResult;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Prefix written in front of every recorded thought
pub const THOUGHT_PREFIX: &str = "Received thought: ";

/// Acknowledgement returned for every recorded thought
pub const RECORDED: &str = "Recorded";

/// Destination for recorded thought lines
#[cfg_attr(test, mockall::automock)]
pub trait ThoughtSink: Send + Sync {
    /// Write one line; the sink appends its own terminator
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes each line plus `\n` to a single writer
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

/// Standard error sink. Standard output belongs to the stdio transport.
pub type StderrSink = WriterSink<io::Stderr>;

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ThoughtSink for WriterSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        // One write_all per line so other stderr writers cannot split it
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        writer.write_all(buf.as_bytes())?;
        writer.flush()
    }
}

/// Keeps lines in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ThoughtSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
        Ok(())
    }
}

/// Logs thoughts to a sink and acknowledges them.
///
/// The thought is opaque text: it is never parsed, trimmed or truncated, and
/// nothing about it is retained once the line has been written.
#[derive(Clone)]
pub struct ThoughtRecorder {
    sink: Arc<dyn ThoughtSink>,
}

impl ThoughtRecorder {
    pub fn new(sink: Arc<dyn ThoughtSink>) -> Self {
        Self { sink }
    }

    /// Recorder writing to standard error
    pub fn stderr() -> Self {
        Self::new(Arc::new(StderrSink::stderr()))
    }

    /// Write `Received thought: <thought>` and return `Recorded`.
    ///
    /// Sink failures are returned as-is.
    pub fn record(&self, thought: &str) -> ThinkResult<&'static str> {
        tracing::debug!("Recording thought ({} bytes)", thought.len());
        self.sink.write_line(&format!("{}{}", THOUGHT_PREFIX, thought))?;
        Ok(RECORDED)
    }
}

impl std::fmt::Debug for ThoughtRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThoughtRecorder").finish_non_exhaustive()
    }
}
