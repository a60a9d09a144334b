use std::time::Duration;

/// Normalized animation time, clamped to the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingTime(f32);

impl EasingTime {
    pub fn from_raw(raw: f32) -> EasingTime {
        EasingTime(raw.clamp(0.0, 1.0))
    }

    pub fn new(duration: Duration, elapsed: Duration) -> EasingTime {
        if duration.is_zero() || elapsed >= duration {
            EasingTime(1.0)
        } else {
            EasingTime(elapsed.as_secs_f32() / duration.as_secs_f32())
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }

    pub fn is_end(self) -> bool {
        self.0 >= 1.0
    }
}

/// Closed-form damped spring over normalized time. The step may overshoot
/// 1.0 mid-flight and settles to exactly 1.0 at the end of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
    pub damping: f32,
    pub initial_velocity: f32,
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self {
            damping: 0.7,
            initial_velocity: 0.9,
        }
    }
}

// Angular frequency of the normalized spring; high enough that the motion
// settles within one time unit for any damping ratio we accept.
const OMEGA: f32 = 12.0;

impl SpringCurve {
    pub fn step(&self, time: EasingTime) -> f32 {
        if time.is_end() {
            return 1.0;
        }
        let t = time.get();
        let zeta = self.damping.clamp(0.05, 2.0);
        let v0 = self.initial_velocity;
        if zeta < 1.0 {
            let omega_d = OMEGA * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * OMEGA * t).exp();
            let b = (zeta * OMEGA - v0) / omega_d;
            1.0 - decay * ((omega_d * t).cos() + b * (omega_d * t).sin())
        } else {
            let decay = (-OMEGA * t).exp();
            1.0 - decay * (1.0 + (OMEGA - v0) * t)
        }
    }
}
