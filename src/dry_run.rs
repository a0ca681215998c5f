use crate::config::Config;
use crate::get_info::cpu::{live_cpu_count, snapshot_cpu_count};
use crate::runner::{Report, Status};
use log::{info, warn};

/// Logs what both data sources report, without choosing one.
pub fn dry_run(config: &Config) -> Report {
    info!("The following configuration was read from the environment:");
    info!(
        "Exit codes: OKAY {} | SKIPPED {} | INFO {} | FAILED {}",
        config.rc_okay, config.rc_skipped, config.rc_info, config.rc_failed
    );
    info!("Mode: {:?} | Root: {:?}", config.live, config.root);

    info!("");

    info!("Live CPUs: {}", live_cpu_count());

    let path = config.cpuinfo_path();
    match snapshot_cpu_count(&path) {
        Ok(count) => info!("Snapshot CPUs: {count} ({})", path.display()),
        Err(e) => warn!("Snapshot unavailable: {e}"),
    }

    Report {
        status: Status::Okay,
        message: String::new(),
    }
}
