use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use tracing::warn;

/// Where `puts` writes its lines.
///
/// The sink is chosen by the host when the evaluator is built: the binary
/// uses stdout, tests capture into a buffer, and benchmarks or embedders
/// that do not care about output can discard it.
#[derive(Debug)]
pub enum OutputSink {
    /// Writes to the process's standard output.
    Stdout,
    /// Captures output in memory.
    Buffer(RefCell<String>),
    /// Discards all output.
    Silent,
}

impl OutputSink {
    /// Writes `line` followed by a newline.
    ///
    /// A failed write to stdout (for example a closed pipe) is logged and
    /// otherwise ignored; script evaluation continues.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                if let Err(error) = writeln!(stdout, "{line}") {
                    warn!(%error, "failed to write program output");
                }
            },
            Self::Buffer(buffer) => {
                let mut buffer = buffer.borrow_mut();
                buffer.push_str(line);
                buffer.push('\n');
            },
            Self::Silent => {},
        }
    }

    /// Everything captured so far. Empty for sinks that do not capture.
    #[must_use]
    pub fn contents(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.borrow().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drops captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.borrow_mut().clear();
        }
    }
}

/// Shared handle to an output sink, held by the evaluator and the host.
pub type SharedOutput = Rc<OutputSink>;

/// Creates a sink writing to stdout.
#[must_use]
pub fn stdout_sink() -> SharedOutput {
    Rc::new(OutputSink::Stdout)
}

/// Creates a sink capturing into memory.
///
/// # Example
/// ```
/// use stargust::interpreter::output::buffer_sink;
///
/// let sink = buffer_sink();
/// sink.println("hello");
///
/// assert_eq!(sink.contents(), "hello\n");
/// ```
#[must_use]
pub fn buffer_sink() -> SharedOutput {
    Rc::new(OutputSink::Buffer(RefCell::new(String::new())))
}

/// Creates a sink that discards everything.
#[must_use]
pub fn silent_sink() -> SharedOutput {
    Rc::new(OutputSink::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_collects_lines_until_cleared() {
        let sink = buffer_sink();
        sink.println("a");
        sink.println("b c");
        assert_eq!(sink.contents(), "a\nb c\n");

        sink.clear();
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn silent_sink_captures_nothing() {
        let sink = silent_sink();
        sink.println("ignored");
        assert_eq!(sink.contents(), "");
    }
}
