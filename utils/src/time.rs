use std::time::{Duration, Instant};

/// Counts ticks and reports the achieved tick rate through the log at a fixed interval.
pub struct Timer {
    start_time: Instant,
    last_time: Instant,
    ticks_since_report: u32,
    report_every: Duration,
}

impl Timer {
    pub fn new(report_every: Duration) -> Self {
        let start_time = Instant::now();
        Self {
            start_time,
            last_time: start_time,
            ticks_since_report: 0,
            report_every,
        }
    }

    /// Registers a finished tick. Returns the measured ticks per second whenever a report is due.
    pub fn tick(&mut self) -> Option<f32> {
        self.ticks_since_report += 1;
        let curr_time = Instant::now();
        let since = curr_time - self.last_time;
        if since < self.report_every {
            return None;
        }
        let rate = self.ticks_since_report as f32 / since.as_secs_f32();
        log::debug!(
            "{} ticks in {} ms ({:.1} ticks/s)",
            self.ticks_since_report,
            since.as_millis(),
            rate
        );
        self.ticks_since_report = 0;
        self.last_time = curr_time;
        Some(rate)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_after_interval() {
        let mut timer = Timer::new(Duration::from_secs(3600));
        assert!(timer.tick().is_none());

        let mut timer = Timer::new(Duration::ZERO);
        assert!(timer.tick().is_some());
    }
}
