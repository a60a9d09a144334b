use ratatui::style::{Color, Modifier, Style};

/// Caption size tier, the cell-grid stand-in for a font size. Ordinal so a
/// preferred-size-category change can shift it along the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CaptionTier {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

const TIERS: [CaptionTier; 5] = [
    CaptionTier::Tiny,
    CaptionTier::Small,
    CaptionTier::Medium,
    CaptionTier::Large,
    CaptionTier::Huge,
];

impl CaptionTier {
    pub fn shifted(self, delta: i8) -> CaptionTier {
        let index = TIERS.iter().position(|tier| *tier == self).unwrap_or(2) as i8;
        let shifted = (index + delta).clamp(0, TIERS.len() as i8 - 1);
        TIERS[shifted as usize]
    }

    pub(crate) fn emphasis(self) -> Modifier {
        match self {
            CaptionTier::Tiny => Modifier::DIM | Modifier::ITALIC,
            CaptionTier::Small => Modifier::DIM,
            CaptionTier::Medium => Modifier::empty(),
            CaptionTier::Large => Modifier::BOLD,
            CaptionTier::Huge => Modifier::BOLD | Modifier::UNDERLINED,
        }
    }
}

/// Caption size selection, keyed on `(has_focus, content_non_empty)`.
/// The sizing policy is a tunable strategy, not part of the mechanism.
#[derive(Debug, Clone, Copy)]
pub enum SizePolicy {
    /// Small when the field is active, large when resting.
    TwoTier,
    /// Distinguishes empty-and-focused from empty-and-unfocused from
    /// non-empty.
    ThreeTier,
    Custom(fn(has_focus: bool, non_empty: bool) -> CaptionTier),
}

impl Default for SizePolicy {
    fn default() -> Self {
        SizePolicy::TwoTier
    }
}

impl SizePolicy {
    pub fn tier(&self, has_focus: bool, non_empty: bool) -> CaptionTier {
        match self {
            SizePolicy::TwoTier => {
                if has_focus || non_empty {
                    CaptionTier::Small
                } else {
                    CaptionTier::Large
                }
            }
            SizePolicy::ThreeTier => match (has_focus, non_empty) {
                (_, true) => CaptionTier::Small,
                (true, false) => CaptionTier::Medium,
                (false, false) => CaptionTier::Large,
            },
            SizePolicy::Custom(select) => select(has_focus, non_empty),
        }
    }
}

/// The label child. `visible` is toggled off while a snapshot overlay is
/// standing in for it.
#[derive(Debug, Clone)]
pub struct Caption {
    pub text: String,
    pub visible: bool,
}

impl Caption {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
        }
    }
}

/// Renderable caption state: fractional row in control-local coordinates,
/// opacity, color and size tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionVisual {
    pub row: f32,
    pub alpha: f32,
    pub color: Color,
    pub tier: CaptionTier,
}

impl CaptionVisual {
    pub(crate) fn resting(color: Color, tier: CaptionTier) -> Self {
        Self {
            row: 0.0,
            alpha: 0.0,
            color,
            tier,
        }
    }

    /// Interpolate row, alpha and color. The tier never interpolates; the
    /// snapshot keeps the old tier for its whole lifetime, which is what
    /// masks the discontinuous size change.
    pub fn lerp(from: CaptionVisual, to: CaptionVisual, step: f32) -> CaptionVisual {
        CaptionVisual {
            row: from.row + (to.row - from.row) * step,
            alpha: (from.alpha + (to.alpha - from.alpha) * step).clamp(0.0, 1.0),
            color: lerp_color(from.color, to.color, step),
            tier: from.tier,
        }
    }

    pub fn style(&self) -> Style {
        let mut style = Style::default().fg(self.color).add_modifier(self.tier.emphasis());
        // No opacity on a cell grid; partial alpha renders dimmed.
        if self.alpha < 0.75 {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }

    pub fn is_drawable(&self) -> bool {
        self.alpha > 0.05
    }
}

fn lerp_color(from: Color, to: Color, step: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => Color::Rgb(
            lerp_channel(r0, r1, step),
            lerp_channel(g0, g1, step),
            lerp_channel(b0, b1, step),
        ),
        // Named palette colors cannot blend; switch at the halfway point.
        (from, to) => {
            if step < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

fn lerp_channel(from: u8, to: u8, step: f32) -> u8 {
    let value = from as f32 + (to as f32 - from as f32) * step;
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_shift_clamps_at_scale_ends() {
        assert_eq!(CaptionTier::Tiny.shifted(-1), CaptionTier::Tiny);
        assert_eq!(CaptionTier::Huge.shifted(3), CaptionTier::Huge);
        assert_eq!(CaptionTier::Medium.shifted(1), CaptionTier::Large);
        assert_eq!(CaptionTier::Large.shifted(-2), CaptionTier::Small);
    }

    #[test]
    fn two_tier_policy_tracks_activity() {
        let policy = SizePolicy::TwoTier;
        assert_eq!(policy.tier(false, false), CaptionTier::Large);
        assert_eq!(policy.tier(true, false), CaptionTier::Small);
        assert_eq!(policy.tier(false, true), CaptionTier::Small);
        assert_eq!(policy.tier(true, true), CaptionTier::Small);
    }

    #[test]
    fn three_tier_policy_distinguishes_focused_empty() {
        let policy = SizePolicy::ThreeTier;
        assert_eq!(policy.tier(false, false), CaptionTier::Large);
        assert_eq!(policy.tier(true, false), CaptionTier::Medium);
        assert_eq!(policy.tier(true, true), CaptionTier::Small);
        assert_eq!(policy.tier(false, true), CaptionTier::Small);
    }

    #[test]
    fn rgb_colors_blend_mid_transition() {
        let from = CaptionVisual {
            row: 0.0,
            alpha: 0.0,
            color: Color::Rgb(0, 0, 0),
            tier: CaptionTier::Large,
        };
        let to = CaptionVisual {
            row: 2.0,
            alpha: 1.0,
            color: Color::Rgb(200, 100, 0),
            tier: CaptionTier::Small,
        };
        let mid = CaptionVisual::lerp(from, to, 0.5);
        assert_eq!(mid.color, Color::Rgb(100, 50, 0));
        assert_eq!(mid.tier, CaptionTier::Large);
        assert!((mid.row - 1.0).abs() < 1e-6);
    }
}
