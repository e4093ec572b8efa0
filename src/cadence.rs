//! Frame throttle for the presentation shell.
//!
//! The engine never looks at time. The shell asks a [`Cadence`] on every
//! animation frame whether enough time has passed to call `step()`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Step rate tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
    /// Step on every frame.
    Max,
}

impl Speed {
    /// Minimum time between steps.
    pub fn interval(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(300),
            Speed::Medium => Duration::from_millis(150),
            Speed::Fast => Duration::from_millis(60),
            Speed::Max => Duration::ZERO,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Speed::Slow => "SLOW",
            Speed::Medium => "MEDIUM",
            Speed::Fast => "FAST",
            Speed::Max => "MAX",
        };
        f.write_str(name)
    }
}

impl FromStr for Speed {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SLOW" => Ok(Speed::Slow),
            "MEDIUM" => Ok(Speed::Medium),
            "FAST" => Ok(Speed::Fast),
            "MAX" => Ok(Speed::Max),
            _ => Err(EngineError::UnknownSpeed(s.to_string())),
        }
    }
}

/// Tracks the timestamp of the last step taken.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cadence {
    last_step: Option<Duration>,
}

impl Cadence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether the frame at `now` should step, and record it if so.
    ///
    /// `now` is a monotonic frame timestamp. A step is due once strictly more
    /// than the speed interval has elapsed; `Max` is due on every frame. The
    /// first frame after construction or [`Cadence::reset`] is always due.
    pub fn should_step(&mut self, now: Duration, speed: Speed) -> bool {
        let due = match (speed, self.last_step) {
            (Speed::Max, _) | (_, None) => true,
            (_, Some(last)) => now.saturating_sub(last) > speed.interval(),
        };
        if due {
            self.last_step = Some(now);
        }
        due
    }

    /// Forget the last step, e.g. after resuming from pause.
    pub fn reset(&mut self) {
        self.last_step = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_intervals() {
        assert_eq!(Speed::Slow.interval(), ms(300));
        assert_eq!(Speed::Medium.interval(), ms(150));
        assert_eq!(Speed::Fast.interval(), ms(60));
        assert_eq!(Speed::Max.interval(), Duration::ZERO);
        assert_eq!(Speed::default(), Speed::Medium);
    }

    #[test]
    fn test_parse_speed() {
        assert_eq!("slow".parse::<Speed>().unwrap(), Speed::Slow);
        assert_eq!("MAX".parse::<Speed>().unwrap(), Speed::Max);
        assert!(matches!(
            "warp".parse::<Speed>(),
            Err(EngineError::UnknownSpeed(_))
        ));
        assert_eq!(Speed::Fast.to_string(), "FAST");
    }

    #[test]
    fn test_first_frame_is_due() {
        let mut cadence = Cadence::new();
        assert!(cadence.should_step(ms(5), Speed::Slow));
    }

    #[test]
    fn test_medium_gating() {
        let mut cadence = Cadence::new();
        assert!(cadence.should_step(ms(1000), Speed::Medium));
        assert!(!cadence.should_step(ms(1100), Speed::Medium));
        // Exactly the interval is not enough
        assert!(!cadence.should_step(ms(1150), Speed::Medium));
        assert!(cadence.should_step(ms(1151), Speed::Medium));
        assert!(!cadence.should_step(ms(1200), Speed::Medium));
    }

    #[test]
    fn test_max_steps_every_frame() {
        let mut cadence = Cadence::new();
        for frame in 0..10 {
            assert!(cadence.should_step(ms(frame), Speed::Max));
        }
        // Same timestamp twice still steps
        assert!(cadence.should_step(ms(9), Speed::Max));
    }

    #[test]
    fn test_reset_makes_next_frame_due() {
        let mut cadence = Cadence::new();
        assert!(cadence.should_step(ms(100), Speed::Slow));
        assert!(!cadence.should_step(ms(200), Speed::Slow));
        cadence.reset();
        assert!(cadence.should_step(ms(210), Speed::Slow));
    }

    #[test]
    fn test_clock_going_backwards_is_not_due() {
        let mut cadence = Cadence::new();
        assert!(cadence.should_step(ms(500), Speed::Fast));
        assert!(!cadence.should_step(ms(100), Speed::Fast));
    }
}
