use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install the logger once per process. Used by the unit tests.
pub fn setup() {
    INIT.call_once(|| {
        SimpleLogger::new().with_level(LevelFilter::Debug).init().unwrap();
    });
}

/// Install the logger with an explicit level. Fails if a logger is already set.
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    SimpleLogger::new().with_level(level).init()
}
