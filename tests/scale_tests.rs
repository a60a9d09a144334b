use floatfield::app::FieldGroup;
use floatfield::{CaptionTier, ContentResizable, FloatingField, LayoutRules, SizeCategory};

fn group_of(count: usize) -> FieldGroup {
    let mut group = FieldGroup::new(LayoutRules::new(0, 0, 1));
    for index in 0..count {
        group.push(FloatingField::new(format!("Field {index}")));
    }
    group
}

#[test]
fn category_change_reaches_every_field() {
    let mut group = group_of(3);
    for field in group.fields() {
        assert_eq!(field.caption_visual().tier, CaptionTier::Large);
    }

    group.preferred_size_category_changed(SizeCategory::Small);
    for field in group.fields() {
        assert_eq!(field.caption_visual().tier, CaptionTier::Medium);
    }
}

#[test]
fn tier_shift_clamps_at_the_top_of_the_scale() {
    let mut field = FloatingField::new("Email");
    field.configure(LayoutRules::default());
    field.preferred_size_category_changed(SizeCategory::ExtraLarge);
    // Resting tier is already near the top; the +2 shift saturates.
    assert_eq!(field.caption_visual().tier, CaptionTier::Huge);

    field.preferred_size_category_changed(SizeCategory::ExtraSmall);
    assert_eq!(field.caption_visual().tier, CaptionTier::Small);
}

#[test]
fn category_applies_to_fields_added_before_the_change_only_once_each() {
    let mut group = group_of(1);
    group.preferred_size_category_changed(SizeCategory::ExtraSmall);
    group.preferred_size_category_changed(SizeCategory::ExtraSmall);
    let field = &group.fields()[0];
    // Category is absolute, not cumulative.
    assert_eq!(field.caption_visual().tier, CaptionTier::Small);
}
