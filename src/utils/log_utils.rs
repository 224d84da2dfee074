//! Plain stdout logging with `-v`-driven verbosity.

/// Verbosity thresholds for [`Logger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Always printed (the transfer status lines).
    Normal = 0,
    /// One `-v`.
    Info = 1,
    /// Two `-v`.
    Debug = 2,
}

/// Logger carried through the transfer operations.
pub struct Logger {
    verbosity: u8,
}

impl Logger {
    #[must_use]
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    pub fn log(&self, msg: &str, level: LogLevel) {
        log(msg, self.verbosity, level);
    }

    /// Status lines; printed regardless of verbosity.
    pub fn normal(&self, msg: &str) {
        self.log(msg, LogLevel::Normal);
    }

    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }

    #[must_use]
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }
}

/// Module-level variant for call sites that only carry a verbosity value.
pub fn log(msg: &str, verbosity: u8, level: LogLevel) {
    if verbosity >= level as u8 {
        match level {
            LogLevel::Normal => println!("{msg}"),
            LogLevel::Info => println!("info: {msg}"),
            LogLevel::Debug => println!("dbg: {msg}"),
        }
    }
}

/// Log at debug level (verbose >= 2).
pub fn debug(msg: &str, verbosity: u8) {
    log(msg, verbosity, LogLevel::Debug);
}
