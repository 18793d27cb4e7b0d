//! Bottom key-hint bar with the record count

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_PRIMARY, TEXT_MUTED};
use crate::ui::events::InputMode;

/// Footer showing keyboard shortcuts and how many records are loaded
pub struct Footer {
    hints: Vec<(&'static str, &'static str)>,
    record_count: usize,
}

impl Footer {
    /// Create a footer with the hints for the current input mode
    pub fn for_mode(mode: InputMode, record_count: usize) -> Self {
        Self {
            hints: match mode {
                InputMode::Form => Self::form_hints(),
                InputMode::Notice => Self::notice_hints(),
            },
            record_count,
        }
    }

    /// Hints while a field has focus. Kept short enough to share an
    /// 80-column line with the record count.
    fn form_hints() -> Vec<(&'static str, &'static str)> {
        vec![
            ("enter", "add"),
            ("tab", "next field"),
            ("F2", "average"),
            ("F3", "top student"),
            ("esc", "quit"),
        ]
    }

    /// Hints while a notice is displayed
    fn notice_hints() -> Vec<(&'static str, &'static str)> {
        vec![("enter/esc", "dismiss")]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(*key, Style::default().fg(ACCENT_PRIMARY)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(TEXT_MUTED),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        let count = if self.record_count == 1 {
            "1 student ".to_string()
        } else {
            format!("{} students ", self.record_count)
        };
        Paragraph::new(Line::from(Span::styled(
            count,
            Style::default().fg(TEXT_MUTED),
        )))
        .alignment(Alignment::Right)
        .render(area, buf);
    }
}
