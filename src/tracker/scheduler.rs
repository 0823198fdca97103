use std::time::Duration;

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, Instrument};

use crate::utils::clock::Clock;

use super::cycle::ActivityCycle;

/// Fixed period scheduler for [ActivityCycle].
///
/// The loop wakes up every `poll_interval` and runs the cycle when at least `interval` passed since
/// the previous one finished (or since start). The first cycle is due one `interval` after start. If
/// the process was suspended for several intervals the cycle still runs only once.
pub struct Scheduler {
    cycle: ActivityCycle,
    shutdown: CancellationToken,
    interval: Duration,
    poll_interval: Duration,
    time_provider: Box<dyn Clock>,
}

impl Scheduler {
    pub fn new(
        cycle: ActivityCycle,
        shutdown: CancellationToken,
        interval: Duration,
        poll_interval: Duration,
        time_provider: Box<dyn Clock>,
    ) -> Self {
        Self {
            cycle,
            shutdown,
            interval,
            poll_interval,
            time_provider,
        }
    }

    /// Executes the scheduler loop until shutdown is requested. Returns the number of completed
    /// cycles. Any error coming out of a cycle stops the loop.
    pub async fn run(mut self) -> Result<u64> {
        let mut next_due = self.time_provider.instant() + self.interval;
        let mut completed = 0;
        loop {
            let poll_point = self.time_provider.instant() + self.poll_interval;

            tokio::select! {
                biased;
                // Cancelation is only observed here, between polls. A running cycle always
                // completes.
                _ = self.shutdown.cancelled() => {
                    info!("Stopping scheduler after {completed} cycles");
                    return Ok(completed)
                }
                _ = self.time_provider.sleep_until(poll_point) => ()
            }

            let now = self.time_provider.instant();
            if now < next_due {
                continue;
            }

            let span = info_span!("Running activity cycle", number = completed + 1);
            let record = self.cycle.run().instrument(span).await?;
            completed += 1;
            info!("Completed cycle {completed}");
            debug!("Logged {record:?}");

            next_due = self.time_provider.instant() + self.interval;
        }
    }
}
