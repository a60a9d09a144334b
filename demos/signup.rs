use anyhow::Result;
use floatfield::app::{App, FieldGroup, UiOptions};
use floatfield::{FloatingField, LayoutRules, SizePolicy};

fn main() -> Result<()> {
    let mut group = FieldGroup::new(LayoutRules::new(0, 0, 1));
    group.push(FloatingField::new("Email"));
    group.push(FloatingField::new("Password").with_size_policy(SizePolicy::ThreeTier));
    group.push(FloatingField::new("Display name").with_content("anon"));

    App::new(group, UiOptions::default()).run()
}
