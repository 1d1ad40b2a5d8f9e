//! Print handler for configurable output.
//!
//! `print` output can be directed to different destinations:
//! - Native: stdout (default)
//! - Embedding and tests: a buffer for capture and assertions
//!
//! Uses enum dispatch instead of trait objects: the set of destinations is
//! closed and this sits on every `print` call.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Print handler that captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print destination.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout,
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    ///
    /// Stdout write failures (e.g. a closed pipe) are ignored: output is a
    /// side effect of the program, not part of its result.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = writeln!(out, "{msg}");
            }
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Get all captured output.
    ///
    /// Returns an empty string for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout => String::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_handler_println_captures_with_newline() {
        let handler = BufferPrintHandler::new();
        handler.println("hello");
        handler.println("world");
        assert_eq!(handler.get_output(), "hello\nworld\n");
    }

    #[test]
    fn shared_buffer_handler_captures() {
        let handler = buffer_handler();
        let alias = SharedPrintHandler::clone(&handler);
        alias.println("hello");
        assert_eq!(handler.get_output(), "hello\n");
    }

    #[test]
    fn stdout_handler_captures_nothing() {
        assert_eq!(stdout_handler().get_output(), "");
    }
}
