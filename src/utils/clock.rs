use async_trait::async_trait;
use chrono::{DateTime, Local};
use tokio::time::Instant;

/// Source of wall-clock timestamps and of the monotonic time the scheduler sleeps on. Swapping it
/// out lets tests pin the timestamps that end up in file names and log rows.
#[async_trait]
pub trait Clock: Sync + Send + 'static {
    fn time(&self) -> DateTime<Local>;

    fn instant(&self) -> Instant;

    async fn sleep_until(&self, instant: Instant);
}

#[derive(Clone)]
pub struct DefaultClock;

#[async_trait]
impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Local> {
        Local::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }

    async fn sleep_until(&self, instant: Instant) {
        tokio::time::sleep_until(instant).await;
    }
}

/// Clock that starts at a fixed local time and advances together with tokio's clock, so paused
/// tests get deterministic timestamps.
#[cfg(test)]
#[derive(Clone)]
pub struct TestClock {
    start_time: DateTime<Local>,
    reference: Instant,
}

#[cfg(test)]
impl TestClock {
    pub fn starting_at(start: chrono::NaiveDateTime) -> Self {
        use chrono::TimeZone;
        Self {
            start_time: Local.from_local_datetime(&start).unwrap(),
            reference: Instant::now(),
        }
    }

    pub fn boxed(&self) -> Box<dyn Clock> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
#[async_trait]
impl Clock for TestClock {
    fn time(&self) -> DateTime<Local> {
        self.start_time + self.reference.elapsed()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }

    async fn sleep_until(&self, instant: Instant) {
        tokio::time::sleep_until(instant).await;
    }
}
