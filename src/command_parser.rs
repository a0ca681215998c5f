use palc::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    long_about = "citellus-cpu-count reports the number of CPUs of a system, either live or from a captured /proc/cpuinfo snapshot.",
    after_long_help = "Configuration is read from the environment:\nRC_OKAY / RC_SKIPPED / RC_INFO / RC_FAILED  exit codes (default 0)\nCITELLUS_ROOT  snapshot root prefix\nCITELLUS_LIVE  1 = live, 0 = snapshot\n\n--log-level accepts off, error, warn, info, debug, trace"
)]
pub struct Args {
    /// Log level for diagnostics on stderr (off keeps stderr to the report line)
    #[arg(long, default_value_t = log_level())]
    pub log_level: LogLevel,

    /// Log both data sources and exit with RC_OKAY instead of reporting
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl Args {
    pub fn par() -> Self {
        Self::parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn log_level() -> LogLevel {
    LogLevel::Off
}
