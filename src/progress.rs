use std::time::Instant;

/// Periodic throughput logging for a long enumeration.
///
/// Logs at most `n` lines over the whole run, plus whatever `finish` says.
pub struct Progress {
    total: u128,
    check: u128,
    ticks: u128,
    begin: Instant,
    delta: Instant,
}

impl Progress {
    pub fn new(total: u128, n: u128) -> Self {
        let check = (total / n.max(1)).max(1);
        let now = Instant::now();
        Self {
            total,
            check,
            ticks: 0,
            begin: now,
            delta: now,
        }
    }
    pub fn ticks(&self) -> u128 {
        self.ticks
    }
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks % self.check == 0 {
            let now = Instant::now();
            let total_t = now.duration_since(self.begin);
            let delta_t = now.duration_since(self.delta);
            self.delta = now;
            log::debug!(
                "progress: {:8.0?} {:>12} {:6.2}%   mean {:10.0}/s   last {:10.0}/s",
                total_t,
                self.ticks,
                self.ticks as f64 / self.total as f64 * 100f64,
                self.ticks as f64 / total_t.as_secs_f64(),
                self.check as f64 / delta_t.as_secs_f64(),
            );
        }
    }
    pub fn finish(&self) {
        let elapsed = self.begin.elapsed();
        log::info!(
            "enumerated {} hands in {:.2?} ({:.0}/s)",
            self.ticks,
            elapsed,
            self.ticks as f64 / elapsed.as_secs_f64().max(f64::MIN_POSITIVE),
        );
    }
}
