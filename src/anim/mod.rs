use std::time::{Duration, Instant};

use crate::field::CaptionVisual;

mod easing;

pub use easing::{EasingTime, SpringCurve};

/// Timing parameters for the focus-driven caption transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub duration: Duration,
    pub curve: SpringCurve,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            curve: SpringCurve::default(),
        }
    }
}

/// One in-flight caption transition. Tagged with the generation that
/// started it so a superseded transition's completion can be discarded.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    generation: u64,
    started_at: Instant,
    from: CaptionVisual,
    to: CaptionVisual,
    timing: TransitionTiming,
}

impl Transition {
    pub(crate) fn new(
        generation: u64,
        started_at: Instant,
        from: CaptionVisual,
        to: CaptionVisual,
        timing: TransitionTiming,
    ) -> Self {
        Self {
            generation,
            started_at,
            from,
            to,
            timing,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn target(&self) -> CaptionVisual {
        self.to
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now).is_end()
    }

    pub fn sample(&self, now: Instant) -> CaptionVisual {
        let step = self.timing.curve.step(self.progress(now));
        CaptionVisual::lerp(self.from, self.to, step)
    }

    fn progress(&self, now: Instant) -> EasingTime {
        let elapsed = now.saturating_duration_since(self.started_at);
        EasingTime::new(self.timing.duration, elapsed)
    }
}

/// Transient visual copy of the caption, drawn on top of the control while
/// the real caption is hidden and re-styled underneath. Lives for exactly
/// one transition generation.
#[derive(Debug, Clone)]
pub struct SnapshotOverlay {
    generation: u64,
    pub text: String,
    pub visual: CaptionVisual,
}

impl SnapshotOverlay {
    pub(crate) fn new(generation: u64, text: String, visual: CaptionVisual) -> Self {
        Self {
            generation,
            text,
            visual,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
