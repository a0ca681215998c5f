use log::debug;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const RC_OKAY: &str = "RC_OKAY";
pub const RC_SKIPPED: &str = "RC_SKIPPED";
pub const RC_INFO: &str = "RC_INFO";
pub const RC_FAILED: &str = "RC_FAILED";
pub const CITELLUS_ROOT: &str = "CITELLUS_ROOT";
pub const CITELLUS_LIVE: &str = "CITELLUS_LIVE";

/// Which data source the framework asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveMode {
    /// `CITELLUS_LIVE=0`: parse the snapshot under `CITELLUS_ROOT`.
    Offline,
    /// `CITELLUS_LIVE=1`: ask the running system.
    Live,
    /// Anything else, including an absent or non-numeric value.
    Undefined,
}

impl LiveMode {
    fn from_value(value: Option<i32>) -> Self {
        match value {
            Some(0) => Self::Offline,
            Some(1) => Self::Live,
            _ => Self::Undefined,
        }
    }
}

/// The plugin contract as handed over by the framework, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rc_okay: i32,
    pub rc_skipped: i32,
    pub rc_info: i32,
    pub rc_failed: i32,
    pub root: OsString,
    pub live: LiveMode,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var_os(name))
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Exit codes that are missing or not numeric resolve to `0`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let code = |name: &str| parse_int(lookup(name).as_deref()).unwrap_or(0);

        let config = Self {
            rc_okay: code(RC_OKAY),
            rc_skipped: code(RC_SKIPPED),
            rc_info: code(RC_INFO),
            rc_failed: code(RC_FAILED),
            root: lookup(CITELLUS_ROOT).unwrap_or_default(),
            live: LiveMode::from_value(parse_int(lookup(CITELLUS_LIVE).as_deref())),
        };

        debug!("Resolved configuration: {config:?}");
        config
    }

    /// `<root>/proc/cpuinfo`, with the root kept byte for byte.
    pub fn cpuinfo_path(&self) -> PathBuf {
        let mut path = self.root.clone();
        path.push("/proc/cpuinfo");
        PathBuf::from(path)
    }
}

fn parse_int(value: Option<&OsStr>) -> Option<i32> {
    value?.to_str()?.parse::<i32>().ok()
}
