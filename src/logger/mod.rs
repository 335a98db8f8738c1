//! Panel event log
//!
//! Fixed-size ring kept in RAM. Nothing is persisted; the `debug` build drains
//! it to the serial console once per poll cycle.

const LOG_CAPACITY: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogType {
    Press = 0,
    Release = 1,
    Toggle = 2,
    Reset = 3,
    Fault = 4,
}

impl LogType {
    pub fn name(self) -> &'static str {
        match self {
            LogType::Press => "press",
            LogType::Release => "release",
            LogType::Toggle => "toggle",
            LogType::Reset => "reset",
            LogType::Fault => "fault",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub tick: u32,
    pub kind: LogType,
    pub slot: u8,
    pub value: u8,
}

impl LogEntry {
    const EMPTY: LogEntry = LogEntry {
        tick: 0,
        kind: LogType::Reset,
        slot: 0,
        value: 0,
    };
}

pub struct Logger {
    buffer: [LogEntry; LOG_CAPACITY],
    head: usize,
    len: usize,
    dropped: u16,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            buffer: [LogEntry::EMPTY; LOG_CAPACITY],
            head: 0,
            len: 0,
            dropped: 0,
        }
    }

    pub fn log_press(&mut self, tick: u32, slot: u8, role: u8) {
        self.log_entry(tick, LogType::Press, slot, role);
    }

    pub fn log_release(&mut self, tick: u32, slot: u8, role: u8) {
        self.log_entry(tick, LogType::Release, slot, role);
    }

    pub fn log_toggle(&mut self, tick: u32, slot: u8, state: bool) {
        self.log_entry(tick, LogType::Toggle, slot, state as u8);
    }

    pub fn log_reset(&mut self, tick: u32, slot: u8) {
        self.log_entry(tick, LogType::Reset, slot, 0);
    }

    pub fn log_fault(&mut self, tick: u32, slot: u8, source: u8) {
        self.log_entry(tick, LogType::Fault, slot, source);
    }

    fn log_entry(&mut self, tick: u32, kind: LogType, slot: u8, value: u8) {
        let entry = LogEntry {
            tick,
            kind,
            slot,
            value,
        };

        let tail = (self.head + self.len) % LOG_CAPACITY;
        self.buffer[tail] = entry;

        if self.len == LOG_CAPACITY {
            // Full: the write above replaced the oldest entry
            self.head = (self.head + 1) % LOG_CAPACITY;
            self.dropped = self.dropped.saturating_add(1);
        } else {
            self.len += 1;
        }
    }

    /// Hand every entry to `f`, oldest first, and empty the log.
    pub fn drain(&mut self, mut f: impl FnMut(&LogEntry)) {
        self.dropped = 0;
        while self.len > 0 {
            f(&self.buffer[self.head]);
            self.head = (self.head + 1) % LOG_CAPACITY;
            self.len -= 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries overwritten since the last drain.
    pub fn dropped(&self) -> u16 {
        self.dropped
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
