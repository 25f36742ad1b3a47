//! Frame timing utilities

use std::thread;
use std::time::{Duration, Instant};

use crate::foundation::status;

/// Default upper bound on the interactive loop rate.
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Bounds an iteration rate from above.
///
/// [`FramePacer::pace`] measures the wall-clock duration of the body and
/// sleeps away whatever is left of the fixed period, truncated to whole
/// milliseconds. The truncated remainder is not carried into the next frame,
/// so the achieved rate drifts slightly below the target. This is not a
/// fixed-timestep scheme: a slow frame is never compensated for.
pub struct FramePacer {
    period: Duration,
}

impl FramePacer {
    /// Pacer for a fixed target rate. The period is `1_000_000 / target_fps`
    /// whole microseconds (60 fps gives 16 666 us).
    pub fn new(target_fps: u32) -> Self {
        let fps = target_fps.max(1);
        Self {
            period: Duration::from_micros(u64::from(1_000_000 / fps)),
        }
    }

    /// The fixed frame period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run one frame body, then sleep away the rest of the period.
    pub fn pace<R>(&self, body: impl FnOnce() -> R) -> R {
        let started = Instant::now();
        let out = body();
        let elapsed = started.elapsed();

        let budget = self.period.as_micros() as i128 - elapsed.as_micros() as i128;
        status::info(&format!("pace frame / remaining budget: {} [us]", budget));

        if let Some(wait) = self.delay_after(elapsed) {
            thread::sleep(wait);
            status::info("pace frame / delay");
        }
        out
    }

    /// Time to sleep after a body that took `elapsed`, truncated to whole
    /// milliseconds. `None` when the body used the whole period.
    fn delay_after(&self, elapsed: Duration) -> Option<Duration> {
        if elapsed >= self.period {
            return None;
        }
        let remaining = self.period - elapsed;
        Some(Duration::from_millis(remaining.as_millis() as u64))
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_FPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_uses_whole_microseconds() {
        assert_eq!(FramePacer::new(60).period(), Duration::from_micros(16_666));
        assert_eq!(FramePacer::new(30).period(), Duration::from_micros(33_333));
    }

    #[test]
    fn fast_frame_sleeps_the_truncated_remainder() {
        let pacer = FramePacer::new(60);
        // 16 666 - 10 000 = 6 666 us, truncated to 6 ms.
        assert_eq!(
            pacer.delay_after(Duration::from_micros(10_000)),
            Some(Duration::from_millis(6))
        );
    }

    #[test]
    fn sub_millisecond_remainder_truncates_to_zero() {
        let pacer = FramePacer::new(60);
        assert_eq!(
            pacer.delay_after(Duration::from_micros(16_000)),
            Some(Duration::from_millis(0))
        );
    }

    #[test]
    fn slow_frame_does_not_sleep() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.delay_after(Duration::from_micros(16_666)), None);
        assert_eq!(pacer.delay_after(Duration::from_micros(20_000)), None);
    }

    #[test]
    fn pace_returns_the_body_result() {
        let pacer = FramePacer::new(1000);
        assert_eq!(pacer.pace(|| 2 + 2), 4);
    }
}
