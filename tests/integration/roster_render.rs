//! Integration tests for roster rendering and scrolling
//!
//! Render the full app to a TestBackend buffer and assert on what the
//! user would actually see.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tempfile::TempDir;

use super::common::fixtures::{draw_app, enter_student, press, test_app};
use super::common::terminal::{
    assert_buffer_contains, buffer_contains, buffer_region_to_string, create_test_terminal,
    create_test_terminal_sized,
};

/// Test that the form labels and section titles render
#[test]
fn test_form_labels_rendered() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut app = test_app(&dir);

    let mut terminal = create_test_terminal();
    let buffer = draw_app(&mut app, &mut terminal);

    assert!(buffer_contains(&buffer, " New Student "));
    assert!(buffer_contains(&buffer, "Name:"));
    assert!(buffer_contains(&buffer, "Reg Number:"));
    assert!(buffer_contains(&buffer, "Math Marks:"));
    assert!(buffer_contains(&buffer, "Java Marks:"));
    assert!(buffer_contains(&buffer, "PHP Marks:"));
    assert!(buffer_contains(&buffer, " Students "));
}

/// Test the empty roster placeholder
#[test]
fn test_empty_roster_message() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut app = test_app(&dir);

    let mut terminal = create_test_terminal();
    let buffer = draw_app(&mut app, &mut terminal);

    assert!(buffer_contains(&buffer, "No student records yet"));
}

/// Test that a roster row shows marks and the computed average
#[test]
fn test_roster_shows_marks_and_average() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut app = test_app(&dir);

    enter_student(&mut app, "Alice", "R1", "90", "80", "70");

    let mut terminal = create_test_terminal();
    let buffer = draw_app(&mut app, &mut terminal);

    // Header row plus the record row
    let roster_region = Rect::new(0, 7, 80, 16);
    assert_buffer_contains(&buffer, roster_region, "Average");
    assert_buffer_contains(&buffer, roster_region, "Alice");
    assert_buffer_contains(&buffer, roster_region, "R1");
    assert_buffer_contains(&buffer, roster_region, "80.00");
}

/// Test that a successful submit clears the form but not the roster
#[test]
fn test_submit_clears_form() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut app = test_app(&dir);

    enter_student(&mut app, "Alice", "R1", "90", "80", "70");

    let mut terminal = create_test_terminal();
    let buffer = draw_app(&mut app, &mut terminal);

    let form_region = Rect::new(0, 0, 80, 7);
    let roster_region = Rect::new(0, 7, 80, 16);
    assert!(!buffer_region_to_string(&buffer, form_region).contains("Alice"));
    assert_buffer_contains(&buffer, roster_region, "Alice");
}

/// Test the footer record count, singular and plural
#[test]
fn test_footer_record_count() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut app = test_app(&dir);
    let footer_region = Rect::new(0, 23, 80, 1);

    let mut terminal = create_test_terminal();
    let buffer = draw_app(&mut app, &mut terminal);
    assert_buffer_contains(&buffer, footer_region, "0 students");

    enter_student(&mut app, "Alice", "R1", "90", "80", "70");
    let buffer = draw_app(&mut app, &mut terminal);
    let footer = buffer_region_to_string(&buffer, footer_region);
    assert!(footer.contains("1 student"));
    assert!(!footer.contains("1 students"));

    enter_student(&mut app, "Bob", "R2", "100", "100", "100");
    let buffer = draw_app(&mut app, &mut terminal);
    assert_buffer_contains(&buffer, footer_region, "2 students");
}

/// Test that the footer hints follow the input mode
#[test]
fn test_footer_switches_hints_with_mode() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut app = test_app(&dir);
    let footer_region = Rect::new(0, 23, 80, 1);

    let mut terminal = create_test_terminal();
    let buffer = draw_app(&mut app, &mut terminal);
    assert_buffer_contains(&buffer, footer_region, "top student");

    app.handle_key_event(press(KeyCode::F(2)));
    let buffer = draw_app(&mut app, &mut terminal);
    assert_buffer_contains(&buffer, footer_region, "dismiss");
}

/// Test that the roster keeps the newest record in view
#[test]
fn test_roster_snaps_to_newest_record() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut app = test_app(&dir);

    for i in 1..=8 {
        enter_student(&mut app, &format!("s{}", i), "R", "50", "50", "50");
    }

    // 16 rows: 7 for the form, 1 footer, roster shows 5 data rows
    let mut terminal = create_test_terminal_sized(80, 16);
    let buffer = draw_app(&mut app, &mut terminal);

    assert!(buffer_contains(&buffer, "s8"));
    assert!(!buffer_contains(&buffer, "s1"));
}

/// Test PageUp and PageDown moving the roster viewport
#[test]
fn test_page_up_and_down() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut app = test_app(&dir);

    for i in 1..=8 {
        enter_student(&mut app, &format!("s{}", i), "R", "50", "50", "50");
    }

    let mut terminal = create_test_terminal_sized(80, 16);
    draw_app(&mut app, &mut terminal);

    app.handle_key_event(press(KeyCode::PageUp));
    let buffer = draw_app(&mut app, &mut terminal);
    assert!(buffer_contains(&buffer, "s1"));
    assert!(!buffer_contains(&buffer, "s8"));

    app.handle_key_event(press(KeyCode::PageDown));
    let buffer = draw_app(&mut app, &mut terminal);
    assert!(buffer_contains(&buffer, "s8"));
}

/// Test that long names are truncated with an ellipsis
#[test]
fn test_long_names_truncated() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut app = test_app(&dir);

    let long_name = "X".repeat(50);
    enter_student(&mut app, &long_name, "R1", "90", "80", "70");

    let mut terminal = create_test_terminal();
    let buffer = draw_app(&mut app, &mut terminal);

    assert!(buffer_contains(&buffer, "..."));
    assert!(!buffer_contains(&buffer, &long_name));
}

/// Test that a cramped terminal renders without panicking
#[test]
fn test_tiny_terminal_does_not_panic() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut app = test_app(&dir);

    enter_student(&mut app, "Alice", "R1", "90", "80", "70");
    app.handle_key_event(press(KeyCode::F(2)));

    let mut terminal = create_test_terminal_sized(20, 10);
    draw_app(&mut app, &mut terminal);
}
