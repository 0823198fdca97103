use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use tracing::{info, level_filters::LevelFilter, warn};

use crate::{
    config::TrackerConfig,
    summarizer::openai::{
        OpenAiSettings, API_KEY_VAR, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT,
    },
    tracker::start_tracker,
    utils::{
        logging::{enable_logging, TRACKER_PREFIX},
        runtime::single_thread_runtime,
    },
};

/// One week.
const MAX_INTERVAL_MINUTES: u64 = 7 * 24 * 60;
/// One day.
const MAX_POLL_SECONDS: u64 = 24 * 60 * 60;
const MAX_TIMEOUT_SECONDS: u64 = 60 * 60;

#[derive(Parser, Debug)]
#[command(name = "shotlog", version, long_about = None)]
#[command(about = "Takes a screenshot every few minutes and logs what you were working on")]
pub struct Args {
    #[arg(
        long,
        default_value = ".",
        help = "Base directory for screenshots/, reports/ and logs/"
    )]
    pub dir: PathBuf,
    #[arg(
        long,
        default_value_t = 15,
        value_parser = clap::value_parser!(u64).range(1..=MAX_INTERVAL_MINUTES),
        help = "Minutes between two screenshots"
    )]
    pub interval: u64,
    #[arg(
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..=MAX_POLL_SECONDS),
        help = "Seconds between checks whether a screenshot is due"
    )]
    pub poll: u64,
    #[arg(
        long,
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECONDS),
        help = "Seconds before a summary request is abandoned"
    )]
    pub timeout: u64,
    #[arg(long, default_value = DEFAULT_MODEL, help = "Vision model used for summaries")]
    pub model: String,
    #[arg(long = "api-base", default_value = DEFAULT_API_BASE, help = "Base url of an OpenAI compatible api")]
    pub api_base: String,
    #[arg(long = "log-filter")]
    pub log: Option<LevelFilter>,
    /// This option is for debugging purposes only.
    #[arg(long = "log-console")]
    pub log_console: bool,
}

impl Args {
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            interval: Duration::from_secs(self.interval.saturating_mul(60)),
            poll_interval: Duration::from_secs(self.poll),
            ..TrackerConfig::new(&self.dir)
        }
    }

    pub fn openai_settings(&self, api_key: String) -> OpenAiSettings {
        OpenAiSettings {
            api_key,
            api_base: self.api_base.clone(),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

pub fn run_cli() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            warn!("Failed to load .env {e:?}");
            println!("[Warning] Ignoring unreadable .env file: {e}");
        }
    }

    run(args, std::env::var(API_KEY_VAR).ok())
}

/// Starts the tracker unless `api_key` is missing or empty, in which case it only prints a
/// diagnostic and touches nothing on disk.
pub fn run(args: Args, api_key: Option<String>) -> Result<()> {
    let Some(api_key) = api_key.filter(|key| !key.is_empty()) else {
        println!("[Error] {API_KEY_VAR} not found in environment. Set it in .env.");
        return Ok(());
    };

    enable_logging(
        TRACKER_PREFIX,
        &args.dir.join("logs"),
        args.log,
        args.log_console,
    )?;
    info!("Starting with {args:?}");

    let config = args.tracker_config();
    let settings = args.openai_settings(api_key);
    single_thread_runtime()?.block_on(start_tracker(config, settings))
}
