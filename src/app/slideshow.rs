use std::time::{Duration, Instant};

/// Default auto-advance interval when the manifest and CLI give none
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(4);

/// Timed auto-advance for the lightbox.
///
/// Driven from the event-loop tick rather than a timer thread: the app
/// calls [`Slideshow::tick`] on every poll timeout and advances the
/// navigator when it returns true.
#[derive(Debug, Clone)]
pub struct Slideshow {
    interval: Duration,
    running: bool,
    last_advance: Instant,
}

impl Slideshow {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            last_advance: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.last_advance = now;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.running {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Returns true when the interval has elapsed and the lightbox should
    /// advance. Consecutive missed intervals collapse into a single advance.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }

        if now.duration_since(self.last_advance) >= self.interval {
            self.last_advance = now;
            true
        } else {
            false
        }
    }
}

impl Default for Slideshow {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_slideshow_never_ticks() {
        let mut slideshow = Slideshow::new(Duration::from_secs(1));
        let start = Instant::now();

        assert!(!slideshow.tick(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_tick_fires_after_interval() {
        let mut slideshow = Slideshow::new(Duration::from_secs(2));
        let start = Instant::now();
        slideshow.start(start);

        assert!(!slideshow.tick(start + Duration::from_secs(1)));
        assert!(slideshow.tick(start + Duration::from_secs(2)));

        // Interval restarts from the advance
        assert!(!slideshow.tick(start + Duration::from_secs(3)));
        assert!(slideshow.tick(start + Duration::from_secs(4)));
    }

    #[test]
    fn test_toggle() {
        let mut slideshow = Slideshow::default();
        let now = Instant::now();

        assert!(!slideshow.is_running());
        slideshow.toggle(now);
        assert!(slideshow.is_running());
        slideshow.toggle(now);
        assert!(!slideshow.is_running());
    }

    #[test]
    fn test_restart_resets_interval() {
        let mut slideshow = Slideshow::new(Duration::from_secs(2));
        let start = Instant::now();
        slideshow.start(start);

        slideshow.stop();
        let later = start + Duration::from_secs(5);
        slideshow.start(later);

        // Elapsed time while stopped does not count
        assert!(!slideshow.tick(later + Duration::from_secs(1)));
        assert!(slideshow.tick(later + Duration::from_secs(2)));
    }
}
