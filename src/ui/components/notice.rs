//! Modal notice dialog for statistics results and validation errors

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::theme::{ACCENT_ERROR, ACCENT_PRIMARY};

const DIALOG_WIDTH: u16 = 50;

/// How a notice is styled: informational results or rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeSeverity {
    #[default]
    Info,
    Error,
}

/// State for the modal notice
#[derive(Debug, Clone, Default)]
pub struct NoticeState {
    /// Whether the notice is visible
    pub visible: bool,
    /// Notice title
    pub title: String,
    /// Message body
    pub message: String,
    /// Border and button styling
    pub severity: NoticeSeverity,
}

impl NoticeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an informational notice (statistics results)
    pub fn show_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.visible = true;
        self.title = title.into();
        self.message = message.into();
        self.severity = NoticeSeverity::Info;
    }

    /// Show an error notice (rejected input)
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.visible = true;
        self.title = title.into();
        self.message = message.into();
        self.severity = NoticeSeverity::Error;
    }

    /// Hide the notice
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Check if the notice is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Modal notice widget
pub struct Notice<'a> {
    state: &'a NoticeState,
}

impl<'a> Notice<'a> {
    pub fn new(state: &'a NoticeState) -> Self {
        Self { state }
    }

    /// Rows the message needs once wrapped to the dialog width
    fn message_lines(&self, width: u16) -> u16 {
        if self.state.message.is_empty() {
            return 0;
        }
        let available_width = width.saturating_sub(6) as usize;
        if available_width == 0 {
            return 1;
        }
        let msg_len = self.state.message.len();
        ((msg_len + available_width - 1) / available_width).max(1) as u16
    }
}

impl Widget for Notice<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        let color = match self.state.severity {
            NoticeSeverity::Info => ACCENT_PRIMARY,
            NoticeSeverity::Error => ACCENT_ERROR,
        };

        // Size the dialog around the message, capped to the screen
        let width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
        let message_lines = self.message_lines(width);
        let height = (message_lines + 8).min(area.height.saturating_sub(2));

        let dialog_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.state.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.height < 5 {
            return;
        }

        // Message below one line of padding, kept clear of the button row
        let message_height = message_lines.min(inner.height.saturating_sub(4));
        let message = Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        message.render(
            Rect {
                x: inner.x,
                y: inner.y + 1,
                width: inner.width,
                height: message_height,
            },
            buf,
        );

        // OK button above the dismiss hint
        let button_style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        let button = Paragraph::new(Line::from(Span::styled("  OK  ", button_style)))
            .alignment(Alignment::Center);
        button.render(
            Rect {
                x: inner.x,
                y: inner.y + inner.height.saturating_sub(3),
                width: inner.width,
                height: 1,
            },
            buf,
        );

        let hint = Line::from(vec![
            Span::styled("Enter/Esc", Style::default().fg(color)),
            Span::raw(" dismiss"),
        ]);
        Paragraph::new(hint).alignment(Alignment::Center).render(
            Rect {
                x: inner.x,
                y: inner.y + inner.height.saturating_sub(1),
                width: inner.width,
                height: 1,
            },
            buf,
        );
    }
}
