use log::{trace, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;
use sysinfo::{CpuRefreshKind, System};
use thiserror::Error;

const PROCESSOR_TOKEN: &str = "processor";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

impl SnapshotError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

/// Number of logical CPUs this process may run on.
///
/// On Linux this is the scheduler affinity mask, ignoring cgroup CPU quotas.
pub fn live_cpu_count() -> usize {
    let count = match affinity_cpu_count() {
        Some(count) => count,
        None => match thread::available_parallelism() {
            Ok(count) => count.get(),
            Err(e) => {
                warn!("available_parallelism failed, falling back to the system CPU list: {e}");
                system_cpu_count()
            }
        },
    };
    trace!("LIVE CPU COUNT successfully retrieved: {count}");
    count
}

#[cfg(target_os = "linux")]
fn affinity_cpu_count() -> Option<usize> {
    let mut cpuset: libc::cpu_set_t = unsafe { std::mem::zeroed() };
    let ret = unsafe {
        libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &raw mut cpuset)
    };
    if ret != 0 {
        trace!("sched_getaffinity failed: {}", io::Error::last_os_error());
        return None;
    }
    let count = unsafe { libc::CPU_COUNT(&cpuset) };
    usize::try_from(count).ok().filter(|&count| count > 0)
}

#[cfg(not(target_os = "linux"))]
fn affinity_cpu_count() -> Option<usize> {
    None
}

fn system_cpu_count() -> usize {
    let mut sysinfo_sys = System::new();
    sysinfo_sys.refresh_cpu_list(
        CpuRefreshKind::nothing()
            .without_cpu_usage()
            .without_frequency(),
    );
    NonZeroUsize::new(sysinfo_sys.cpus().len()).map_or(1, NonZeroUsize::get)
}

/// Occurrences of every lower-cased, whitespace-delimited token.
pub fn word_frequency<R: Read>(mut reader: R) -> io::Result<HashMap<String, u64>> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let mut frequency: HashMap<String, u64> = HashMap::new();
    for token in String::from_utf8_lossy(&content).split_whitespace() {
        *frequency.entry(token.to_lowercase()).or_insert(0) += 1;
    }
    Ok(frequency)
}

/// Counts `processor` entries in a cpuinfo snapshot.
pub fn snapshot_cpu_count(path: &Path) -> Result<u64, SnapshotError> {
    let file = File::open(path).map_err(|source| SnapshotError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let frequency = word_frequency(file).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let count = frequency.get(PROCESSOR_TOKEN).copied().unwrap_or(0);
    trace!("SNAPSHOT CPU COUNT successfully retrieved from {}: {count}", path.display());
    Ok(count)
}
