//! Frame pacing
//!
//! A fixed-rate throttle: after a frame is presented the clock sleeps for
//! whatever is left of the frame interval. Slow frames are not compensated.

use std::time::{Duration, Instant};

/// Paces the frame loop to a target frame rate
#[derive(Debug)]
pub struct FrameClock {
    frame_interval: Option<Duration>,
    last_tick: Instant,
    frames: u64,
}

impl FrameClock {
    /// Creates a clock targeting `fps` frames per second (0 = no pacing)
    pub fn new(fps: u32) -> Self {
        let frame_interval = if fps == 0 {
            None
        } else {
            Some(Duration::from_nanos(1_000_000_000 / fps as u64))
        };

        FrameClock {
            frame_interval,
            last_tick: Instant::now(),
            frames: 0,
        }
    }

    /// Target frame interval, if pacing is enabled
    #[allow(dead_code)]
    pub fn frame_interval(&self) -> Option<Duration> {
        self.frame_interval
    }

    /// Frames ticked since the clock was created
    #[allow(dead_code)]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Blocks until the current frame interval has elapsed
    pub fn tick(&mut self) {
        if let Some(interval) = self.frame_interval {
            let elapsed = self.last_tick.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            }
        }
        self.last_tick = Instant::now();
        self.frames += 1;
    }
}
