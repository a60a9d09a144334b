use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::presentation::render_group;
use crate::scale::ContentResizable;

use super::{
    group::FieldGroup,
    input::{KeyCommand, classify},
    options::UiOptions,
    terminal::TerminalGuard,
};

const HELP_TEXT: &str =
    "Tab/Shift+Tab move focus • Esc blur • Ctrl+= / Ctrl+- text size • Ctrl+Q quit";

/// Demo host: owns a field group, drives the draw/poll/tick loop and turns
/// key events into focus moves and edits.
pub struct App {
    group: FieldGroup,
    options: UiOptions,
    should_quit: bool,
}

impl App {
    pub fn new(mut group: FieldGroup, options: UiOptions) -> Self {
        group.preferred_size_category_changed(options.size_category);
        Self {
            group,
            options,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            self.group.tick(Instant::now());
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let now = Instant::now();
        match classify(&key) {
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::NextField => self.group.focus_next(now),
            KeyCommand::PrevField => self.group.focus_prev(now),
            KeyCommand::Blur => self.group.blur(now),
            KeyCommand::ScaleUp => {
                self.options.size_category = self.options.size_category.larger();
                self.group
                    .preferred_size_category_changed(self.options.size_category);
            }
            KeyCommand::ScaleDown => {
                self.options.size_category = self.options.size_category.smaller();
                self.group
                    .preferred_size_category_changed(self.options.size_category);
            }
            KeyCommand::Edit(key) => {
                self.group.handle_key(&key);
            }
            KeyCommand::None => {}
        }
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        if !self.options.show_help {
            render_group(frame, area, &self.group, true);
            return;
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        render_group(frame, chunks[0], &self.group, true);
        let footer = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::Yellow));
        frame.render_widget(footer, chunks[1]);
    }
}
