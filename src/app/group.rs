use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::field::{FloatingField, LayoutRules};
use crate::scale::{ContentResizable, SizeCategory};

/// An ordered run of fields with a single focus owner. The group completes
/// each field's construction with its layout rules, forwards key input to
/// the focused field, and issues the focus notifications when focus moves.
#[derive(Debug, Clone, Default)]
pub struct FieldGroup {
    fields: Vec<FloatingField>,
    focused: Option<usize>,
    rules: LayoutRules,
}

impl FieldGroup {
    pub fn new(rules: LayoutRules) -> Self {
        Self {
            fields: Vec::new(),
            focused: None,
            rules,
        }
    }

    pub fn push(&mut self, mut field: FloatingField) {
        field.configure(self.rules);
        self.fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FloatingField] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FloatingField> {
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut FloatingField> {
        self.fields.get_mut(index)
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_field(&self) -> Option<&FloatingField> {
        self.focused.and_then(|index| self.fields.get(index))
    }

    pub fn focus_next(&mut self, now: Instant) {
        if self.fields.is_empty() {
            return;
        }
        let next = match self.focused {
            Some(index) => (index + 1) % self.fields.len(),
            None => 0,
        };
        self.move_focus(Some(next), now);
    }

    pub fn focus_prev(&mut self, now: Instant) {
        if self.fields.is_empty() {
            return;
        }
        let prev = match self.focused {
            Some(0) | None => self.fields.len() - 1,
            Some(index) => index - 1,
        };
        self.move_focus(Some(prev), now);
    }

    pub fn blur(&mut self, now: Instant) {
        self.move_focus(None, now);
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let Some(index) = self.focused else {
            return false;
        };
        self.fields[index].handle_key(key)
    }

    pub fn tick(&mut self, now: Instant) {
        for field in &mut self.fields {
            field.tick(now);
        }
    }

    fn move_focus(&mut self, to: Option<usize>, now: Instant) {
        if self.focused == to {
            return;
        }
        if let Some(old) = self.focused.and_then(|index| self.fields.get_mut(index)) {
            old.focus_lost(now);
        }
        self.focused = to;
        if let Some(new) = to.and_then(|index| self.fields.get_mut(index)) {
            new.focus_gained(now);
        }
    }
}

impl ContentResizable for FieldGroup {
    fn preferred_size_category_changed(&mut self, category: SizeCategory) {
        for field in &mut self.fields {
            field.preferred_size_category_changed(category);
        }
    }
}
