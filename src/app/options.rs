use std::time::Duration;

use crate::scale::SizeCategory;

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub show_help: bool,
    pub size_category: SizeCategory,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            // Short enough that the 300 ms caption transition renders
            // several intermediate frames.
            tick_rate: Duration::from_millis(33),
            show_help: true,
            size_category: SizeCategory::default(),
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_size_category(mut self, category: SizeCategory) -> Self {
        self.size_category = category;
        self
    }
}
