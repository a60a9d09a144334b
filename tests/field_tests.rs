use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Size;
use ratatui::style::Color;

use floatfield::{FloatingField, LayoutMode, LayoutRules};

fn configured(placeholder: &str) -> FloatingField {
    let mut field = FloatingField::new(placeholder);
    field.configure(LayoutRules::new(0, 0, 1));
    field
}

fn settle(field: &mut FloatingField, from: Instant) {
    field.tick(from + Duration::from_millis(400));
}

#[test]
fn activity_derives_from_focus_or_content() {
    let now = Instant::now();
    for (focused, content) in [(false, ""), (false, "x"), (true, ""), (true, "x")] {
        let mut field = configured("Email");
        field.set_content(content);
        if focused {
            field.focus_gained(now);
        }
        let expected = focused || !content.is_empty();
        assert_eq!(field.is_active(), expected);
        let expected_mode = if expected {
            LayoutMode::Floated
        } else {
            LayoutMode::Centered
        };
        assert_eq!(field.layout_mode(), expected_mode);
    }
}

#[test]
fn caption_color_follows_focus_not_content() {
    let now = Instant::now();
    let mut field = configured("Email");

    field.set_content("user@x.com");
    assert_eq!(field.caption_visual().color, Color::Gray);

    field.focus_gained(now);
    assert_eq!(field.caption_visual().color, Color::Cyan);

    field.set_content("");
    assert_eq!(field.caption_visual().color, Color::Cyan);
}

#[test]
fn configure_is_idempotent() {
    let mut field = FloatingField::new("Email");
    let first = LayoutRules::new(1, 1, 2);
    field.configure(first);
    let size = field.measure();

    field.configure(LayoutRules::new(5, 5, 5));
    assert_eq!(field.layout_rules(), Some(first));
    assert_eq!(field.measure(), size);
}

#[test]
fn measure_is_zero_until_configured() {
    let field = FloatingField::new("Email");
    assert_eq!(field.measure(), Size::default());

    let mut field = FloatingField::new("Email");
    let rules = LayoutRules::new(1, 1, 1);
    field.configure(rules);
    let size = field.measure();
    let child_heights = 2;
    assert!(size.height >= child_heights + rules.top_margin + rules.bottom_margin + rules.spacing);
    assert!(size.width >= 5, "placeholder width should drive the box");
}

#[test]
fn empty_unfocused_field_centers_an_invisible_caption() {
    let field = configured("Email");
    assert_eq!(field.layout_mode(), LayoutMode::Centered);
    let visual = field.caption_visual();
    assert_eq!(visual.alpha, 0.0);
    assert!(!visual.is_drawable());
    assert_eq!(visual.color, Color::Gray);
    assert_eq!(visual.row, field.editor_row() as f32);
}

#[test]
fn content_keeps_the_caption_floated_after_blur() {
    let t0 = Instant::now();
    let mut field = configured("Email");
    field.focus_gained(t0);
    settle(&mut field, t0);
    field.set_content("user@x.com");

    let t1 = t0 + Duration::from_secs(1);
    field.focus_lost(t1);
    settle(&mut field, t1);

    assert_eq!(field.layout_mode(), LayoutMode::Floated);
    assert!(field.is_active());
    assert_eq!(field.caption_visual().color, Color::Gray);
}

#[test]
fn key_edits_relayout_without_animating() {
    let mut field = configured("Email");
    let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    assert!(field.handle_key(&key));

    assert_eq!(field.content(), "a");
    assert_eq!(field.layout_mode(), LayoutMode::Floated);
    assert!(!field.in_transition());
    assert!(field.overlay().is_none());
}

#[test]
fn programmatic_set_content_never_animates() {
    let mut field = configured("Email");
    field.set_content("prefilled");
    assert_eq!(field.layout_mode(), LayoutMode::Floated);
    assert!(field.overlay().is_none());
    assert!(!field.in_transition());
}

#[test]
fn measurement_grows_with_content_width() {
    let mut field = configured("Id");
    let before = field.measure();
    field.set_content("a-much-longer-value-than-the-label");
    let after = field.measure();
    assert!(after.width > before.width);
    assert_eq!(after.height, before.height);
}
