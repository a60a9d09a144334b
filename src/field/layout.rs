use ratatui::layout::Size;

/// Which layout variant is active. Fully determined by the field's derived
/// activity: `Floated` exactly when the field has focus or content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Caption and editor share the vertical center; caption invisible.
    Centered,
    /// Caption pinned to the top margin, editor pinned to the bottom
    /// margin, fixed spacing between them.
    Floated,
}

/// Resolved vertical margins and inter-element spacing, in rows. Until
/// `configure()` supplies these, the control has no intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutRules {
    pub top_margin: u16,
    pub bottom_margin: u16,
    pub spacing: u16,
}

impl LayoutRules {
    pub fn new(top_margin: u16, bottom_margin: u16, spacing: u16) -> Self {
        Self {
            top_margin,
            bottom_margin,
            spacing,
        }
    }
}

/// Row positions of both children inside the control's intrinsic box,
/// fractional so transitions can interpolate between variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RowLayout {
    pub caption_row: f32,
    pub editor_row: f32,
    pub caption_alpha: f32,
}

/// The enum-keyed variant table. Both children are one row tall.
pub(crate) fn variant(mode: LayoutMode, rules: LayoutRules, height: u16) -> RowLayout {
    let last_row = height.saturating_sub(1) as f32;
    match mode {
        LayoutMode::Centered => {
            let center = last_row / 2.0;
            RowLayout {
                caption_row: center,
                editor_row: center,
                caption_alpha: 0.0,
            }
        }
        LayoutMode::Floated => RowLayout {
            caption_row: rules.top_margin as f32,
            editor_row: last_row - rules.bottom_margin as f32,
            caption_alpha: 1.0,
        },
    }
}

/// Minimum box for both children plus resolved margins and spacing.
pub(crate) fn measure(rules: LayoutRules, caption_width: u16, editor_width: u16) -> Size {
    const CHILD_HEIGHT: u16 = 1;
    let height = CHILD_HEIGHT
        .saturating_add(CHILD_HEIGHT)
        .saturating_add(rules.top_margin)
        .saturating_add(rules.bottom_margin)
        .saturating_add(rules.spacing);
    Size {
        width: caption_width.max(editor_width),
        height,
    }
}
