use std::path::PathBuf;

use anyhow::Result;
use cycle::ActivityCycle;
use scheduler::Scheduler;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::{
    capture::{GenericCapturer, ScreenCapturer},
    config::TrackerConfig,
    report::generate_report,
    storage::activity_log::ActivityLog,
    summarizer::{
        openai::{OpenAiSettings, OpenAiSummarizer},
        Summarizer,
    },
    utils::clock::{Clock, DefaultClock},
};

pub mod cycle;
pub mod scheduler;
pub mod shutdown;

/// Represents the starting point for the tracker. Runs until interrupted and then writes the final
/// report.
pub async fn start_tracker(config: TrackerConfig, settings: OpenAiSettings) -> Result<()> {
    let capturer = GenericCapturer::new()?;
    let summarizer = OpenAiSummarizer::new(settings)?;

    let shutdown_token = CancellationToken::new();
    let watcher = tokio::spawn(shutdown::detect_shutdown(shutdown_token.clone()));

    let result = run_tracker(
        config,
        Box::new(capturer),
        Box::new(summarizer),
        shutdown_token,
        DefaultClock,
    )
    .await;

    watcher.abort();
    result.map(|_| ())
}

/// Prepares storage, runs the scheduler until `shutdown` is cancelled and generates the report.
/// Returns the report path if one was written.
pub async fn run_tracker(
    config: TrackerConfig,
    capturer: Box<dyn ScreenCapturer>,
    summarizer: Box<dyn Summarizer>,
    shutdown: CancellationToken,
    clock: impl Clock + Clone,
) -> Result<Option<PathBuf>> {
    config.paths.ensure()?;
    let log = ActivityLog::new(config.paths.log_path.clone());
    log.initialize()?;

    let scheduler = create_scheduler(&config, log, capturer, summarizer, &shutdown, clock.clone());

    info!("Tracker started with {config:?}");
    println!("Productivity Tracker running... Press Ctrl+C to stop.");

    let completed = scheduler.run().await?;
    info!("Tracker stopped after {completed} cycles");

    println!("\n[!] Stopped by user. Generating final report...");
    generate_report(&config.paths.log_path, &config.paths.report_dir, &clock)
}

fn create_scheduler(
    config: &TrackerConfig,
    log: ActivityLog,
    capturer: Box<dyn ScreenCapturer>,
    summarizer: Box<dyn Summarizer>,
    shutdown: &CancellationToken,
    clock: impl Clock + Clone,
) -> Scheduler {
    let cycle = ActivityCycle::new(
        config.paths.screenshot_dir.clone(),
        log,
        capturer,
        summarizer,
        Box::new(clock.clone()),
    );
    Scheduler::new(
        cycle,
        shutdown.clone(),
        config.interval,
        config.poll_interval,
        Box::new(clock),
    )
}
