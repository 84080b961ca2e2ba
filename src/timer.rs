use std::time::Duration;

/// Periodic ticker driven by frame time. Fires `on_tick` once for every
/// full `interval` accumulated while running.
#[derive(Debug, Default)]
pub struct PlaybackTimer {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl PlaybackTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false and leaves the running timer untouched if already active.
    pub fn start(&mut self, interval: Duration) -> bool {
        if self.running || interval.is_zero() {
            return false;
        }
        self.interval = interval;
        self.elapsed = Duration::ZERO;
        self.running = true;
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time left until the next tick, if running.
    pub fn remaining(&self) -> Option<Duration> {
        self.running.then(|| self.interval - self.elapsed)
    }

    pub fn update(&mut self, dt: Duration, mut on_tick: impl FnMut()) {
        if !self.running {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            on_tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn ticks_on_each_full_interval() {
        let mut timer = PlaybackTimer::new();
        assert!(timer.start(ms(100)));

        let mut ticks = 0;
        timer.update(ms(99), || ticks += 1);
        assert_eq!(ticks, 0);
        timer.update(ms(1), || ticks += 1);
        assert_eq!(ticks, 1);
        timer.update(ms(250), || ticks += 1);
        assert_eq!(ticks, 3);
        assert_eq!(timer.remaining(), Some(ms(50)));
    }

    #[test]
    fn start_while_running_is_rejected() {
        let mut timer = PlaybackTimer::new();
        assert!(timer.start(ms(100)));
        timer.update(ms(60), || {});
        assert!(!timer.start(ms(10)));
        // original cadence and progress are kept
        assert_eq!(timer.remaining(), Some(ms(40)));
    }

    #[test]
    fn stop_is_idempotent_and_silences_ticks() {
        let mut timer = PlaybackTimer::new();
        timer.stop();
        assert!(timer.start(ms(100)));
        timer.stop();
        timer.stop();

        let mut ticks = 0;
        timer.update(ms(1000), || ticks += 1);
        assert_eq!(ticks, 0);
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn zero_interval_never_starts() {
        let mut timer = PlaybackTimer::new();
        assert!(!timer.start(Duration::ZERO));
        assert!(!timer.is_running());
    }
}
