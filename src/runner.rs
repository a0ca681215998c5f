use crate::config::{Config, LiveMode};
use crate::get_info::cpu::{live_cpu_count, snapshot_cpu_count};
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Okay,
    Skipped,
    Info,
    Failed,
}

/// Outcome of one invocation: the status and the single line for stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    pub message: String,
}

impl Report {
    fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn exit_code(&self, config: &Config) -> i32 {
        match self.status {
            Status::Okay => config.rc_okay,
            Status::Skipped => config.rc_skipped,
            Status::Info => config.rc_info,
            Status::Failed => config.rc_failed,
        }
    }
}

pub fn run(config: &Config) -> Report {
    match config.live {
        LiveMode::Live => Report::new(Status::Info, live_cpu_count().to_string()),
        LiveMode::Offline => {
            let path = config.cpuinfo_path();
            match snapshot_cpu_count(&path) {
                Ok(count) => Report::new(Status::Info, count.to_string()),
                Err(e) => {
                    debug!("Snapshot unavailable: {e}");
                    Report::new(
                        Status::Skipped,
                        format!("Failure to open required file {}", e.path().display()),
                    )
                }
            }
        }
        LiveMode::Undefined => {
            warn!("CITELLUS_LIVE is neither 0 nor 1");
            Report::new(Status::Failed, "Undefined CITELLUS_LIVE status")
        }
    }
}
