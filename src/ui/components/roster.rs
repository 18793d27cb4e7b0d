//! Scrollable read-only table of student records

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::data::Student;

/// Truncate a string to fit within a maximum display width, adding "..." if
/// truncated. Uses unicode display width to handle multi-byte and wide
/// characters correctly.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let ellipsis = "...";
    let ellipsis_width = UnicodeWidthStr::width(ellipsis);

    if max_width <= ellipsis_width {
        return s.chars().take(max_width).collect();
    }

    let current_width = UnicodeWidthStr::width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut width = 0;
    let mut result = String::new();

    for c in s.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > target_width {
            break;
        }
        result.push(c);
        width += char_width;
    }

    result.push_str(ellipsis);
    result
}

/// Scroll state for the roster table
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    /// Index of the first visible record
    pub scroll_offset: usize,
    /// Data rows shown at the last render, used to size page jumps
    pub viewport_rows: usize,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    fn page(&self) -> usize {
        self.viewport_rows.max(1)
    }

    /// Scroll up by one viewport
    pub fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(self.page());
    }

    /// Scroll down by one viewport, clamped to the last record
    pub fn page_down(&mut self, total: usize) {
        let max_offset = total.saturating_sub(self.page());
        self.scroll_offset = (self.scroll_offset + self.page()).min(max_offset);
    }

    /// Snap the viewport to the newest record
    pub fn scroll_to_bottom(&mut self, total: usize) {
        self.scroll_offset = total.saturating_sub(self.page());
    }
}

/// Roster table widget
pub struct Roster<'a> {
    students: &'a [Student],
}

impl<'a> Roster<'a> {
    pub fn new(students: &'a [Student]) -> Self {
        Self { students }
    }

    /// Render the table and record the viewport size in `state`
    pub fn render(&self, area: Rect, buf: &mut Buffer, state: &mut RosterState) {
        let block = Block::default()
            .title(" Students ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_MUTED));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        // First inner row is the header, the rest show records
        state.viewport_rows = inner.height as usize - 1;
        let max_offset = self.students.len().saturating_sub(state.viewport_rows);
        state.scroll_offset = state.scroll_offset.min(max_offset);

        let columns = Layout::horizontal([
            Constraint::Min(10),   // Name
            Constraint::Length(12), // Reg Number
            Constraint::Length(6),  // Math
            Constraint::Length(6),  // Java
            Constraint::Length(6),  // PHP
            Constraint::Length(9),  // Average
        ])
        .split(inner);

        let header_style = Style::default()
            .fg(TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD);
        let headers = ["Name", "Reg Number", "Math", "Java", "PHP", "Average"];
        for (text, column) in headers.into_iter().zip(columns.iter()) {
            Paragraph::new(text).style(header_style).render(
                Rect {
                    height: 1,
                    ..*column
                },
                buf,
            );
        }

        if self.students.is_empty() {
            Paragraph::new("No student records yet")
                .style(Style::default().fg(TEXT_MUTED))
                .alignment(Alignment::Center)
                .render(
                    Rect {
                        x: inner.x,
                        y: inner.y + 1,
                        width: inner.width,
                        height: 1,
                    },
                    buf,
                );
            return;
        }

        let visible = self
            .students
            .iter()
            .enumerate()
            .skip(state.scroll_offset)
            .take(state.viewport_rows);

        for (index, student) in visible {
            let y = inner.y + 1 + (index - state.scroll_offset) as u16;
            let cells = [
                truncate_to_width(&student.name, columns[0].width.saturating_sub(1) as usize),
                truncate_to_width(
                    &student.reg_number,
                    columns[1].width.saturating_sub(1) as usize,
                ),
                student.math_marks.to_string(),
                student.java_marks.to_string(),
                student.php_marks.to_string(),
                format!("{:.2}", student.average()),
            ];

            for (text, column) in cells.into_iter().zip(columns.iter()) {
                Paragraph::new(text)
                    .style(Style::default().fg(TEXT_PRIMARY))
                    .render(
                        Rect {
                            x: column.x,
                            y,
                            width: column.width,
                            height: 1,
                        },
                        buf,
                    );
            }
        }
    }
}
