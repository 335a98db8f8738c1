use ufmt::{uWrite, uwrite, uwriteln};

use crate::logger::{LogEntry, Logger};

/// Line-oriented text console over any `ufmt` writer.
///
/// Write errors are swallowed; the console is diagnostics only.
pub struct SerialConsole<W> {
    writer: W,
}

impl<W: uWrite> SerialConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_str(&mut self, s: &str) {
        self.writer.write_str(s).ok();
    }

    pub fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    pub fn write_entry(&mut self, entry: &LogEntry) {
        uwrite!(
            self.writer,
            "{} {} slot={} value={}",
            entry.tick,
            entry.kind.name(),
            entry.slot,
            entry.value
        )
        .ok();
        self.write_str("\r\n");
    }

    /// Print and empty the log, then report overwritten entries if any.
    pub fn dump(&mut self, logger: &mut Logger) {
        let dropped = logger.dropped();
        logger.drain(|entry| self.write_entry(entry));
        if dropped > 0 {
            uwriteln!(self.writer, "{} entries dropped\r", dropped).ok();
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    struct TextSink(std::string::String);

    impl uWrite for TextSink {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
            self.0.push_str(s);
            Ok(())
        }
    }

    fn console() -> SerialConsole<TextSink> {
        SerialConsole::new(TextSink(std::string::String::new()))
    }

    #[test]
    fn write_line_ends_with_crlf() {
        let mut console = console();
        console.write_line("DMX panel");
        assert_eq!(console.into_inner().0, "DMX panel\r\n");
    }

    #[test]
    fn dump_renders_entries_and_empties_log() {
        let mut logger = Logger::new();
        logger.log_press(12, 3, 3);
        logger.log_reset(13, 3);

        let mut console = console();
        console.dump(&mut logger);

        assert_eq!(
            console.into_inner().0,
            "12 press slot=3 value=3\r\n13 reset slot=3 value=0\r\n"
        );
        assert!(logger.is_empty());
    }

    #[test]
    fn dump_reports_dropped_entries() {
        let mut logger = Logger::new();
        for tick in 0..20 {
            logger.log_press(tick, 0, 0);
        }

        let mut console = console();
        console.dump(&mut logger);

        let text = console.into_inner().0;
        assert!(text.starts_with("4 press slot=0 value=0\r\n"));
        assert!(text.ends_with("4 entries dropped\r\n"));
    }
}
