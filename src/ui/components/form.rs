//! Student entry form component

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::text_input::TextInputState;
use super::theme::{ACCENT_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::data::{AddError, Student};

pub const FIELD_COUNT: usize = 5;

/// Label column width inside the form
const LABEL_WIDTH: u16 = 13;

/// The five entry fields in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    RegNumber,
    Math,
    Java,
    Php,
}

impl FormField {
    pub const ALL: [FormField; FIELD_COUNT] = [
        FormField::Name,
        FormField::RegNumber,
        FormField::Math,
        FormField::Java,
        FormField::Php,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name:",
            FormField::RegNumber => "Reg Number:",
            FormField::Math => "Math Marks:",
            FormField::Java => "Java Marks:",
            FormField::Php => "PHP Marks:",
        }
    }

    /// Next field in traversal order, wrapping at the end
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::RegNumber,
            FormField::RegNumber => FormField::Math,
            FormField::Math => FormField::Java,
            FormField::Java => FormField::Php,
            FormField::Php => FormField::Name,
        }
    }

    /// Previous field in traversal order, wrapping at the start
    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Php,
            FormField::RegNumber => FormField::Name,
            FormField::Math => FormField::RegNumber,
            FormField::Java => FormField::Math,
            FormField::Php => FormField::Java,
        }
    }

    fn index(self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::RegNumber => 1,
            FormField::Math => 2,
            FormField::Java => 3,
            FormField::Php => 4,
        }
    }
}

/// State for the student entry form
#[derive(Debug, Clone, Default)]
pub struct StudentFormState {
    pub name: TextInputState,
    pub reg_number: TextInputState,
    pub math: TextInputState,
    pub java: TextInputState,
    pub php: TextInputState,
    /// Field currently holding the cursor
    pub focus: FormField,
}

impl StudentFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &TextInputState {
        match field {
            FormField::Name => &self.name,
            FormField::RegNumber => &self.reg_number,
            FormField::Math => &self.math,
            FormField::Java => &self.java,
            FormField::Php => &self.php,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut TextInputState {
        match field {
            FormField::Name => &mut self.name,
            FormField::RegNumber => &mut self.reg_number,
            FormField::Math => &mut self.math,
            FormField::Java => &mut self.java,
            FormField::Php => &mut self.php,
        }
    }

    /// The field currently holding the cursor
    pub fn focused_mut(&mut self) -> &mut TextInputState {
        self.field_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Clear every field and return focus to the first one
    pub fn clear(&mut self) {
        self.name.clear();
        self.reg_number.clear();
        self.math.clear();
        self.java.clear();
        self.php.clear();
        self.focus = FormField::Name;
    }

    /// Validate the current input and build a record from it.
    pub fn parse(&self) -> Result<Student, AddError> {
        Student::from_input(
            self.name.value(),
            self.reg_number.value(),
            self.math.value(),
            self.java.value(),
            self.php.value(),
        )
    }

    /// Terminal cursor position for the focused field, mirroring the layout
    /// used by [`StudentForm::render`].
    pub fn cursor_position(&self, form_area: Rect) -> (u16, u16) {
        let inner_x = form_area.x.saturating_add(1);
        let inner_y = form_area.y.saturating_add(1);
        let input_width = form_area.width.saturating_sub(2 + LABEL_WIDTH).max(1);

        let field = self.field(self.focus);
        let cursor_x = inner_x + LABEL_WIDTH + (field.cursor as u16).min(input_width - 1);
        let cursor_y = inner_y + self.focus.index() as u16;
        (cursor_x, cursor_y)
    }
}

/// Student entry form widget
pub struct StudentForm;

impl StudentForm {
    pub fn new() -> Self {
        Self
    }

    /// Render the form
    pub fn render(&self, area: Rect, buf: &mut Buffer, state: &StudentFormState) {
        let block = Block::default()
            .title(" New Student ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT_PRIMARY));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Length(1); FIELD_COUNT]).split(inner);

        for (field, row) in FormField::ALL.into_iter().zip(rows.iter()) {
            let focused = state.focus == field;

            let label_style = if focused {
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_MUTED)
            };
            let label_area = Rect {
                width: LABEL_WIDTH.min(row.width),
                ..*row
            };
            Paragraph::new(field.label())
                .style(label_style)
                .render(label_area, buf);

            let input_area = Rect {
                x: row.x + LABEL_WIDTH.min(row.width),
                y: row.y,
                width: row.width.saturating_sub(LABEL_WIDTH),
                height: row.height,
            };
            let input = state.field(field);
            if focused {
                input.render(input_area, buf, Style::default().fg(TEXT_PRIMARY));
            } else {
                Paragraph::new(input.value())
                    .style(Style::default().fg(TEXT_SECONDARY))
                    .render(input_area, buf);
            }
        }
    }
}

impl Default for StudentForm {
    fn default() -> Self {
        Self::new()
    }
}
