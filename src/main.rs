#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

use crate::command_parser::Args;
use crate::config::Config;
use crate::dry_run::dry_run;
use crate::runner::run;
use crate::utils::init_logger;
use log::info;
use std::io::{Write, stderr};
use std::process::exit;

mod command_parser;
mod config;
mod dry_run;
mod get_info;
mod runner;
mod utils;

fn main() {
    let args = Args::par();

    init_logger(&args.log_level);

    info!("Arguments read: {args:?}");

    let config = Config::from_env();

    let report = if args.dry_run {
        dry_run(&config)
    } else {
        run(&config)
    };

    if !report.message.is_empty() {
        let mut err = stderr().lock();
        err.write_all(report.message.as_bytes()).ok();
        err.flush().ok();
    }

    exit(report.exit_code(&config));
}
