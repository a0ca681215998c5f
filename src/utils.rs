use crate::command_parser::LogLevel;
use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn init_logger(log_level: &LogLevel) {
    let level = level_filter(*log_level);
    if level == LevelFilter::Off {
        return;
    }

    SimpleLogger::new().with_level(level).init().ok();
}

fn level_filter(log_level: LogLevel) -> LevelFilter {
    match log_level {
        LogLevel::Off => LevelFilter::Off,
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}
