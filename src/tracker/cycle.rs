use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, instrument};

use crate::{
    capture::{capture_screenshot, ScreenCapturer},
    storage::activity_log::{ActivityLog, ActivityRecord},
    summarizer::{summary_or_fallback, Summarizer},
    utils::clock::Clock,
};

/// One capture → summarize → log pass. A summarizer failure only changes the logged text, while
/// capture and log errors abort the pass before anything is appended.
pub struct ActivityCycle {
    screenshot_dir: PathBuf,
    log: ActivityLog,
    capturer: Box<dyn ScreenCapturer>,
    summarizer: Box<dyn Summarizer>,
    clock: Box<dyn Clock>,
}

impl ActivityCycle {
    pub fn new(
        screenshot_dir: PathBuf,
        log: ActivityLog,
        capturer: Box<dyn ScreenCapturer>,
        summarizer: Box<dyn Summarizer>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            screenshot_dir,
            log,
            capturer,
            summarizer,
            clock,
        }
    }

    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<ActivityRecord> {
        let screenshot = capture_screenshot(
            &self.screenshot_dir,
            self.capturer.as_mut(),
            self.clock.as_ref(),
        )?;

        let summary = summary_or_fallback(self.summarizer.summarize(&screenshot).await);

        let record = self.log.append(&screenshot, &summary, self.clock.as_ref())?;
        debug!("Cycle finished with {record:?}");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;
    use image::RgbaImage;
    use tempfile::tempdir;

    use super::*;
    use crate::{
        capture::MockScreenCapturer,
        storage::paths::StoragePaths,
        summarizer::{MockSummarizer, SummarizeError, FALLBACK_SUMMARY},
        utils::clock::TestClock,
    };

    fn test_clock() -> TestClock {
        TestClock::starting_at(
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        )
    }

    fn working_capturer() -> MockScreenCapturer {
        let mut capturer = MockScreenCapturer::new();
        capturer
            .expect_capture()
            .returning(|| Ok(RgbaImage::new(2, 2)));
        capturer
    }

    fn cycle_for(
        paths: &StoragePaths,
        capturer: MockScreenCapturer,
        summarizer: MockSummarizer,
    ) -> ActivityCycle {
        ActivityCycle::new(
            paths.screenshot_dir.clone(),
            ActivityLog::new(paths.log_path.clone()),
            Box::new(capturer),
            Box::new(summarizer),
            test_clock().boxed(),
        )
    }

    #[tokio::test]
    async fn logs_summary_of_fresh_screenshot() -> Result<()> {
        let dir = tempdir()?;
        let paths = StoragePaths::from_base(dir.path());
        paths.ensure()?;
        let mut summarizer = MockSummarizer::new();
        summarizer
            .expect_summarize()
            .withf(|path| path.extension().is_some_and(|ext| ext == "png") && path.exists())
            .times(1)
            .returning(|_| Ok("Writing tests".into()));

        let record = cycle_for(&paths, working_capturer(), summarizer).run().await?;

        let expected_path = paths.screenshot_dir.join("2024-01-01_10-00-00.png");
        assert_eq!(record.timestamp, "2024-01-01 10:00:00");
        assert_eq!(record.screenshot_path, expected_path.display().to_string());
        assert_eq!(record.summary, "Writing tests");
        assert_eq!(ActivityLog::new(paths.log_path).read_all()?, vec![record]);
        Ok(())
    }

    #[tokio::test]
    async fn summarizer_failure_still_logs_fallback() -> Result<()> {
        let dir = tempdir()?;
        let paths = StoragePaths::from_base(dir.path());
        paths.ensure()?;
        let mut summarizer = MockSummarizer::new();
        summarizer
            .expect_summarize()
            .returning(|_| Err(SummarizeError::EmptyResponse));

        let record = cycle_for(&paths, working_capturer(), summarizer).run().await?;

        assert_eq!(record.summary, FALLBACK_SUMMARY);
        assert!(std::path::Path::new(&record.screenshot_path).exists());
        assert_eq!(ActivityLog::new(paths.log_path).read_all()?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn capture_failure_aborts_without_row() -> Result<()> {
        let dir = tempdir()?;
        let paths = StoragePaths::from_base(dir.path());
        paths.ensure()?;
        let log = ActivityLog::new(paths.log_path.clone());
        log.initialize()?;
        let mut capturer = MockScreenCapturer::new();
        capturer
            .expect_capture()
            .returning(|| Err(anyhow!("no display")));
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_summarize().never();

        let result = cycle_for(&paths, capturer, summarizer).run().await;

        assert!(result.is_err());
        assert!(log.read_all()?.is_empty());
        Ok(())
    }
}
