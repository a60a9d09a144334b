use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::app::FieldGroup;
use crate::field::FloatingField;

/// Draws one control into `area`. The editor row renders the content, or
/// the placeholder in gray while empty; the caption renders at its current
/// interpolated row unless a snapshot overlay is standing in for it; the
/// overlay is drawn last so it sits on top.
pub fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    field: &FloatingField,
    enable_cursor: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let editor_y = row_in(area, field.editor_row());
    let content = field.content();
    let editor_line = if content.is_empty() {
        Line::from(Span::styled(
            field.placeholder().to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::raw(content.to_string()))
    };
    frame.render_widget(Paragraph::new(editor_line), row_rect(area, editor_y));

    let visual = field.caption_visual();
    if field.overlay().is_none() && field.caption().visible && visual.is_drawable() {
        let caption_y = row_in(area, visual.row.round().max(0.0) as u16);
        let caption = Paragraph::new(Line::from(Span::styled(
            field.caption().text.clone(),
            visual.style(),
        )));
        frame.render_widget(caption, row_rect(area, caption_y));
    }

    if let Some(overlay) = field.overlay() {
        if overlay.visual.is_drawable() {
            let overlay_y = row_in(area, overlay.visual.row.round().max(0.0) as u16);
            let rect = row_rect(area, overlay_y);
            frame.render_widget(Clear, rect);
            let snapshot = Paragraph::new(Line::from(Span::styled(
                overlay.text.clone(),
                overlay.visual.style(),
            )));
            frame.render_widget(snapshot, rect);
        }
    }

    if enable_cursor && field.has_focus() {
        let cursor_x = area
            .x
            .saturating_add(field.editor().cursor_column())
            .min(area.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, editor_y));
    }
}

/// Lays the group's fields out vertically, each at its measured height with
/// one blank row between rows, and draws them.
pub fn render_group(frame: &mut Frame<'_>, area: Rect, group: &FieldGroup, enable_cursor: bool) {
    let mut constraints = Vec::with_capacity(group.len() * 2);
    for field in group.fields() {
        constraints.push(Constraint::Length(field.measure().height.max(1)));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, field) in group.fields().iter().enumerate() {
        let cursor = enable_cursor && group.focused_index() == Some(index);
        render_field(frame, chunks[index * 2], field, cursor);
    }
}

fn row_in(area: Rect, offset: u16) -> u16 {
    area.y
        .saturating_add(offset)
        .min(area.bottom().saturating_sub(1))
}

fn row_rect(area: Rect, y: u16) -> Rect {
    Rect::new(area.x, y, area.width, 1)
}
