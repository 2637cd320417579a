#![allow(clippy::unwrap_used)]

use super::*;
use crate::chat::Session;
use crate::models::{sample_records, TaxProfile};
use crate::ui::app::InputMode;

fn app_in(dir: &std::path::Path) -> App {
    App::new(
        Session::new(TaxProfile::default(), sample_records()),
        dir.to_path_buf(),
    )
}

// ── Dispatch ──────────────────────────────────────────────────

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("pdf", "pdf"), 0);
    assert_eq!(levenshtein("expor", "export"), 1);
    assert_eq!(levenshtein("", "pit"), 3);
}

#[test]
fn test_unknown_command_suggests() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    handle_command("expor", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :expor. Did you mean :export?"
    );
}

#[test]
fn test_quit() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

#[test]
fn test_screen_switch_sets_mode() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    assert_eq!(app.input_mode, InputMode::Chat);
    handle_command("records", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Records);
    assert_eq!(app.input_mode, InputMode::Normal);
    handle_command("c", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Chat);
    assert_eq!(app.input_mode, InputMode::Chat);
}

// ── Salary ────────────────────────────────────────────────────

#[test]
fn test_salary_command() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    handle_command("salary ₦750,000", &mut app).unwrap();
    assert_eq!(app.session.profile.monthly_salary, 750_000);
    assert!(app.status_message.starts_with("Monthly salary set"));
}

#[test]
fn test_salary_command_needs_amount() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    handle_command("salary", &mut app).unwrap();
    assert!(app.status_message.starts_with("Usage: :salary"));
    assert_eq!(app.session.profile, TaxProfile::default());
}

// ── Files ─────────────────────────────────────────────────────

#[test]
fn test_pdf_command_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    handle_command("pdf", &mut app).unwrap();
    let written: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(written.len(), 1);
    assert!(app.status_message.starts_with("Wrote "));
    assert!(app
        .session
        .transcript
        .last()
        .unwrap()
        .text
        .starts_with("✅ Report saved!"));
}

#[test]
fn test_export_command_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let target = dir.path().join("out.csv");
    handle_command(&format!("export {}", target.display()), &mut app).unwrap();
    let text = std::fs::read_to_string(&target).unwrap();
    assert_eq!(text.lines().count(), 16);
    assert!(app.status_message.starts_with("Exported 15 records"));
}

#[test]
fn test_receipt_rejects_non_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();
    let mut app = app_in(dir.path());
    handle_command(&format!("receipt {}", path.display()), &mut app).unwrap();
    assert!(app.status_message.contains("Not an image file"));
    assert_eq!(app.session.state.name(), "idle");
}

#[test]
fn test_receipt_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let path = dir.path().join("gone.jpg");
    handle_command(&format!("receipt {}", path.display()), &mut app).unwrap();
    assert!(app.status_message.contains("Failed to read receipt"));
    assert_eq!(app.session.state.name(), "idle");
}

#[test]
fn test_receipt_starts_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shoprite.JPG");
    std::fs::write(&path, [0xFFu8, 0xD8, 0xFF, 0xE0]).unwrap();
    let mut app = app_in(dir.path());
    handle_command("records", &mut app).unwrap();
    handle_command(&format!("receipt {}", path.display()), &mut app).unwrap();
    assert_eq!(app.session.state.name(), "awaiting_receipt_confirmation");
    assert_eq!(app.screen, Screen::Chat);
}

#[test]
fn test_reset_command() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    app.session.send("I spend 4000");
    handle_command("reset", &mut app).unwrap();
    assert_eq!(app.session.state.name(), "idle");
}
