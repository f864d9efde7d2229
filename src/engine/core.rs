use std::time::{Duration, Instant};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub app_name: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Tile Destroyer".to_string(),
            window_width: 800,
            window_height: 600,
            target_fps: 144,
        }
    }
}

/// Deadline-based frame cap. A late frame pushes the next deadline forward
/// instead of queueing catch-up frames.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame_duration: Duration,
    next_frame: Instant,
}

impl FrameLimiter {
    pub fn from_fps(fps: u32, start: Instant) -> Self {
        let frame_duration = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self {
            frame_duration,
            next_frame: start,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame += self.frame_duration;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_duration;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_yields_once_per_period() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::from_fps(100, start);
        let period = limiter.frame_duration();

        assert!(limiter.ready(start));
        assert!(!limiter.ready(start));
        assert!(!limiter.ready(start + period / 2));
        assert!(limiter.ready(start + period));
        assert!(!limiter.ready(start + period));
    }

    #[test]
    fn limiter_skips_missed_frames() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::from_fps(100, start);
        let period = limiter.frame_duration();

        assert!(limiter.ready(start));
        let late = start + period * 10;
        assert!(limiter.ready(late));
        assert!(!limiter.ready(late));
        assert_eq!(limiter.deadline(), late + period);
    }

    #[test]
    fn zero_fps_is_clamped() {
        let limiter = FrameLimiter::from_fps(0, Instant::now());
        assert_eq!(limiter.frame_duration(), Duration::from_secs(1));
    }
}
