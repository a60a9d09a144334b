/// Preferred text size category, a five-step ordinal scale from smallest to
/// largest. Announced by the host environment; the control maps it onto its
/// caption tier scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl SizeCategory {
    pub fn larger(self) -> SizeCategory {
        match self {
            SizeCategory::ExtraSmall => SizeCategory::Small,
            SizeCategory::Small => SizeCategory::Medium,
            SizeCategory::Medium => SizeCategory::Large,
            SizeCategory::Large | SizeCategory::ExtraLarge => SizeCategory::ExtraLarge,
        }
    }

    pub fn smaller(self) -> SizeCategory {
        match self {
            SizeCategory::ExtraSmall | SizeCategory::Small => SizeCategory::ExtraSmall,
            SizeCategory::Medium => SizeCategory::Small,
            SizeCategory::Large => SizeCategory::Medium,
            SizeCategory::ExtraLarge => SizeCategory::Large,
        }
    }

    /// Signed shift applied to caption tiers, Medium being neutral.
    pub(crate) fn tier_shift(self) -> i8 {
        match self {
            SizeCategory::ExtraSmall => -2,
            SizeCategory::Small => -1,
            SizeCategory::Medium => 0,
            SizeCategory::Large => 1,
            SizeCategory::ExtraLarge => 2,
        }
    }
}

/// Capability for anything that can react to a preferred size category
/// change. Containers implement it by walking their children explicitly.
pub trait ContentResizable {
    fn preferred_size_category_changed(&mut self, category: SizeCategory);
}

#[cfg(test)]
mod tests {
    use super::SizeCategory;

    #[test]
    fn category_steps_clamp_at_both_ends() {
        assert_eq!(SizeCategory::ExtraSmall.smaller(), SizeCategory::ExtraSmall);
        assert_eq!(SizeCategory::ExtraLarge.larger(), SizeCategory::ExtraLarge);
        assert_eq!(SizeCategory::Medium.larger(), SizeCategory::Large);
        assert_eq!(SizeCategory::Medium.smaller(), SizeCategory::Small);
    }
}
