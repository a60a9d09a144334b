use std::cell::Cell;
use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::layout::Size;
use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

use crate::anim::{SnapshotOverlay, Transition, TransitionTiming};
use crate::scale::{ContentResizable, SizeCategory};

mod caption;
mod editor;
mod layout;

pub use caption::{Caption, CaptionTier, CaptionVisual, SizePolicy};
pub use editor::Editor;
pub use layout::{LayoutMode, LayoutRules};

/// A text input whose caption floats between two layout variants: centered
/// placeholder-style text while the field is empty and unfocused, and a
/// smaller caption pinned above the editor row once the field has content
/// or focus. Focus changes animate through a snapshot overlay; content
/// edits and programmatic sets re-layout synchronously.
#[derive(Debug, Clone)]
pub struct FloatingField {
    placeholder: String,
    has_focus: bool,
    accent: Color,
    neutral: Color,
    size_policy: SizePolicy,
    size_category: SizeCategory,
    timing: TransitionTiming,
    caption: Caption,
    editor: Editor,
    rules: Option<LayoutRules>,
    mode: LayoutMode,
    visual: CaptionVisual,
    transition: Option<Transition>,
    overlay: Option<SnapshotOverlay>,
    generation: u64,
    measured: Cell<Option<Size>>,
}

impl FloatingField {
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        let mut field = Self {
            caption: Caption::new(placeholder.clone()),
            placeholder,
            has_focus: false,
            accent: Color::Cyan,
            neutral: Color::Gray,
            size_policy: SizePolicy::default(),
            size_category: SizeCategory::default(),
            timing: TransitionTiming::default(),
            editor: Editor::default(),
            rules: None,
            mode: LayoutMode::Centered,
            visual: CaptionVisual::resting(Color::Gray, CaptionTier::Large),
            transition: None,
            overlay: None,
            generation: 0,
            measured: Cell::new(None),
        };
        field.resolve_layout();
        field
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.editor.set_text(content);
        self.resolve_layout();
        self
    }

    pub fn with_size_policy(mut self, policy: SizePolicy) -> Self {
        self.size_policy = policy;
        self.resolve_layout();
        self
    }

    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self.resolve_layout();
        self
    }

    pub fn with_timing(mut self, timing: TransitionTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Resolves margins and spacing, completing construction. Idempotent:
    /// once the children are laid out under a rule set, later calls are
    /// no-ops.
    pub fn configure(&mut self, rules: LayoutRules) {
        if self.rules.is_some() {
            return;
        }
        self.rules = Some(rules);
        self.resolve_layout();
    }

    pub fn is_configured(&self) -> bool {
        self.rules.is_some()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn content(&self) -> &str {
        self.editor.text()
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// `true` while the field has focus or non-empty content. Single source
    /// of truth for layout selection.
    pub fn is_active(&self) -> bool {
        self.has_focus || !self.editor.is_empty()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn layout_rules(&self) -> Option<LayoutRules> {
        self.rules
    }

    /// The caption child, exposed so a host can theme or query it.
    pub fn caption(&self) -> &Caption {
        &self.caption
    }

    /// The editor child, exposed so a host can theme or query it.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Caption state as of the last `tick()`/layout resolution.
    pub fn caption_visual(&self) -> CaptionVisual {
        self.visual
    }

    pub fn overlay(&self) -> Option<&SnapshotOverlay> {
        self.overlay.as_ref()
    }

    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Non-interactive update: re-layout synchronously, never animated.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
        self.caption.text = self.placeholder.clone();
        self.resolve_layout();
    }

    /// Programmatic value change: re-layout synchronously, never animated.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.editor.set_text(text);
        self.resolve_layout();
    }

    /// Content edit from the keyboard. An accepted edit re-layouts
    /// synchronously; plain edits never start a transition.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.editor.handle_key(key) {
            self.resolve_layout();
            true
        } else {
            false
        }
    }

    /// Focus notification from the host. Runs the animated transition.
    pub fn focus_gained(&mut self, now: Instant) {
        self.apply_focus_change(true, now);
    }

    /// Focus notification from the host. Runs the animated transition.
    pub fn focus_lost(&mut self, now: Instant) {
        self.apply_focus_change(false, now);
    }

    /// Minimum box for both children plus resolved margins and spacing.
    /// Zero until `configure()` has supplied the layout rules.
    pub fn measure(&self) -> Size {
        let Some(rules) = self.rules else {
            return Size::default();
        };
        if let Some(size) = self.measured.get() {
            return size;
        }
        let caption_width = UnicodeWidthStr::width(self.placeholder.as_str()) as u16;
        let size = layout::measure(rules, caption_width, self.editor.intrinsic_width());
        self.measured.set(Some(size));
        size
    }

    /// Advances the in-flight transition, completing it when its window has
    /// elapsed. Host calls this once per frame.
    pub fn tick(&mut self, now: Instant) {
        let Some(transition) = self.transition else {
            return;
        };
        if transition.is_complete(now) {
            self.transition = None;
            self.finish_transition(transition.generation());
        } else if let Some(overlay) = &mut self.overlay {
            overlay.visual = transition.sample(now);
        }
    }

    fn apply_focus_change(&mut self, focused: bool, now: Instant) {
        self.has_focus = focused;

        // Margins unresolved: no geometry to animate between yet.
        if self.rules.is_none() {
            self.resolve_layout();
            return;
        }

        // Starting point is whatever is on screen right now: the live
        // overlay if a transition is being superseded, the caption
        // otherwise.
        let prior = self
            .overlay
            .as_ref()
            .map(|overlay| overlay.visual)
            .unwrap_or(self.visual);
        let superseding = self.transition.is_some();

        self.generation += 1;
        self.resolve_layout();

        // The snapshot keeps the pre-transition tier for its whole flight;
        // the re-tiered caption stays hidden underneath until completion.
        let target = CaptionVisual {
            tier: prior.tier,
            ..self.visual
        };
        self.transition = Some(Transition::new(
            self.generation,
            now,
            prior,
            target,
            self.timing,
        ));
        self.overlay = Some(SnapshotOverlay::new(
            self.generation,
            self.caption.text.clone(),
            prior,
        ));
        self.caption.visible = false;

        if superseding {
            tracing::trace!(generation = self.generation, focused, "caption transition retargeted");
        } else {
            tracing::debug!(generation = self.generation, focused, "caption transition started");
        }
    }

    fn finish_transition(&mut self, generation: u64) {
        // A completion from a superseded transition must not tear down the
        // overlay the current one owns.
        if generation != self.generation {
            return;
        }
        self.overlay = None;
        self.caption.visible = true;
        tracing::trace!(generation, "caption transition complete");
    }

    /// Layout resolution, run on every state change: derive activity,
    /// select caption color by focus alone, size tier via the policy, pick
    /// the layout variant, invalidate the measurement cache and apply the
    /// target geometry synchronously.
    fn resolve_layout(&mut self) {
        let active = self.is_active();
        self.mode = if active {
            LayoutMode::Floated
        } else {
            LayoutMode::Centered
        };
        let color = if self.has_focus {
            self.accent
        } else {
            self.neutral
        };
        let tier = self
            .size_policy
            .tier(self.has_focus, !self.editor.is_empty())
            .shifted(self.size_category.tier_shift());
        self.measured.set(None);

        let (row, alpha) = match self.rules {
            Some(rules) => {
                let layout = layout::variant(self.mode, rules, self.measure().height);
                (layout.caption_row, layout.caption_alpha)
            }
            None => (0.0, if active { 1.0 } else { 0.0 }),
        };
        self.visual = CaptionVisual {
            row,
            alpha,
            color,
            tier,
        };
    }

    /// Row the editor child occupies inside the intrinsic box.
    pub fn editor_row(&self) -> u16 {
        let Some(rules) = self.rules else {
            return 0;
        };
        let layout = layout::variant(self.mode, rules, self.measure().height);
        layout.editor_row.round().max(0.0) as u16
    }
}

impl ContentResizable for FloatingField {
    fn preferred_size_category_changed(&mut self, category: SizeCategory) {
        self.size_category = category;
        self.resolve_layout();
    }
}
