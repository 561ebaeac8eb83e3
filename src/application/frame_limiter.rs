use std::time::{Duration, Instant};

/// Caps the loop rate by sleeping out whatever is left of each frame.
pub struct FrameLimiter {
    budget: Duration,
    last_tick: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / fps.max(1),
            last_tick: Instant::now(),
        }
    }

    pub const fn budget(&self) -> Duration {
        self.budget
    }

    /// Time still owed to a frame that has run for `elapsed`
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Block until one frame budget has passed since the previous call
    pub fn wait(&mut self) {
        let pause = self.remaining(self.last_tick.elapsed());
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
        self.last_tick = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_from_fps() {
        let limiter = FrameLimiter::new(60);
        assert_eq!(limiter.budget(), Duration::from_secs(1) / 60);
        assert_eq!(FrameLimiter::new(0).budget(), Duration::from_secs(1));
    }

    #[test]
    fn test_remaining() {
        let limiter = FrameLimiter::new(50);
        assert_eq!(limiter.remaining(Duration::from_millis(5)), Duration::from_millis(15));
        assert_eq!(limiter.remaining(Duration::from_millis(30)), Duration::ZERO);
    }

    #[test]
    fn test_wait_paces_ticks() {
        let mut limiter = FrameLimiter::new(100);
        let start = Instant::now();
        limiter.wait();
        limiter.wait();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
