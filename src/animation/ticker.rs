// src/animation/ticker.rs
//
// Fixed-interval tick source driven by frame dt. Fires at most once per
// call and carries the remainder over, so tick cadence stays stable across
// uneven frame times.

pub struct Ticker {
    running: bool,
    interval: f32,
    elapsed: f32,
}

impl Ticker {
    pub fn new(interval: f32) -> Self {
        Self {
            running: false,
            interval,
            elapsed: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arms the ticker. A second start while running is a no-op and does not
    /// reset the phase of the pending tick.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.elapsed = 0.0;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Accumulates dt; returns true when one tick interval has elapsed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_interval() {
        let mut ticker = Ticker::new(0.05);
        ticker.start();
        assert!(!ticker.tick(0.03));
        assert!(ticker.tick(0.03));
        assert!(!ticker.tick(0.01));
    }

    #[test]
    fn test_inert_until_started() {
        let mut ticker = Ticker::new(0.05);
        assert!(!ticker.tick(1.0));
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_double_start_keeps_phase() {
        let mut ticker = Ticker::new(0.05);
        ticker.start();
        assert!(!ticker.tick(0.03));
        // a redundant start must not reset the pending interval
        ticker.start();
        assert!(ticker.tick(0.03));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut ticker = Ticker::new(0.05);
        ticker.start();
        ticker.stop();
        ticker.stop();
        assert!(!ticker.tick(1.0));
    }

    #[test]
    fn test_restart_resets_phase() {
        let mut ticker = Ticker::new(0.05);
        ticker.start();
        assert!(!ticker.tick(0.04));
        ticker.stop();
        ticker.start();
        assert!(!ticker.tick(0.04));
        assert!(ticker.tick(0.01));
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut ticker = Ticker::new(0.05);
        ticker.start();
        assert!(ticker.tick(0.12));
        // 0.07 left over: the backlog drains on the next call
        assert!(ticker.tick(0.0));
        assert!(!ticker.tick(0.0));
    }
}
