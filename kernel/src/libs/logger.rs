// src/libs/logger.rs
use crate::config::LOG_LEVEL;
use crate::println;
use log::{Log, Metadata, Record};

/// Routes `log` records to the kernel console.
pub struct KernelLogger;

impl Log for KernelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install [`KernelLogger`] with the configured level.
pub fn init_logger() {
    static LOGGER: KernelLogger = KernelLogger;
    log::set_logger(&LOGGER).expect("Failed to set logger");
    log::set_max_level(LOG_LEVEL);
}
