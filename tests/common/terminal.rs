//! Rendering helpers built on Ratatui's `TestBackend`.
//!
//! Tests draw the app into an in-memory buffer and assert on its text
//! content, so spacing and line boundaries are preserved exactly.

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Standard 80x24 terminal used by most rendering tests.
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(80, 24)
}

/// Terminal with explicit dimensions, for small-screen cases.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Flatten the whole buffer into a newline-separated string.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Flatten one rectangle of the buffer, without a trailing newline.
pub fn buffer_region_to_string(buffer: &Buffer, area: Rect) -> String {
    let mut output = String::new();

    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        if y < area.y + area.height - 1 {
            output.push('\n');
        }
    }

    output
}

/// Assert that `expected` appears somewhere inside the given region.
pub fn assert_buffer_contains(buffer: &Buffer, area: Rect, expected: &str) {
    let actual = buffer_region_to_string(buffer, area);

    assert!(
        actual.contains(expected),
        "Region is missing expected text.\nExpected: {}\nRegion content:\n{}",
        expected,
        actual
    );
}

/// True if `text` appears anywhere in the buffer.
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_create_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn test_buffer_contains() {
        let mut terminal = create_test_terminal_sized(20, 5);
        terminal
            .draw(|f| {
                let para = Paragraph::new("Test content here");
                f.render_widget(para, f.area());
            })
            .unwrap();

        assert!(buffer_contains(terminal.backend().buffer(), "content"));
        assert!(!buffer_contains(terminal.backend().buffer(), "missing"));
    }

    #[test]
    fn test_buffer_region_to_string() {
        let mut terminal = create_test_terminal_sized(20, 5);
        terminal
            .draw(|f| {
                let para = Paragraph::new("Line 1\nLine 2\nLine 3");
                f.render_widget(para, f.area());
            })
            .unwrap();

        // First six columns of the top two rows
        let region = Rect::new(0, 0, 6, 2);
        let output = buffer_region_to_string(terminal.backend().buffer(), region);
        assert!(output.contains("Line 1"));
        assert!(output.contains("Line 2"));
        assert!(!output.contains("Line 3"));
    }
}
