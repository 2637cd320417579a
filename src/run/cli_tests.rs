#![allow(clippy::unwrap_used)]

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ── help and version ──────────────────────────────────────────

#[test]
fn test_print_info_answers_help_and_version() {
    for arg in ["--help", "-h", "help", "--version", "-V", "version"] {
        assert!(print_info(arg), "{arg}");
    }
    assert!(!print_info("chat"));
    assert!(!print_info("--config"));
}

#[test]
fn test_help_dispatch_ignores_config() {
    assert!(as_cli(&args(&["taxbot", "--version"]), &Config::default()).is_ok());
    assert!(as_cli(&args(&["taxbot", "bogus"]), &Config::default()).is_err());
}

// ── vat arguments ─────────────────────────────────────────────

#[test]
fn test_parse_vat_args_single_word() {
    let (category, amount) = parse_vat_args(&args(&["fuel", "5000"])).unwrap();
    assert_eq!(category, Category::Fuel);
    assert_eq!(amount, 5_000);
}

#[test]
fn test_parse_vat_args_two_words_and_naira() {
    let (category, amount) = parse_vat_args(&args(&["Office", "Rent", "₦250,000"])).unwrap();
    assert_eq!(category, Category::OfficeRent);
    assert_eq!(amount, 250_000);
}

#[test]
fn test_parse_vat_args_errors() {
    assert!(parse_vat_args(&[]).is_err());
    let err = parse_vat_args(&args(&["groceries", "100"])).unwrap_err();
    assert!(err.to_string().starts_with("Unknown category 'groceries'"));
    let err = parse_vat_args(&args(&["fuel", "lots"])).unwrap_err();
    assert_eq!(err.to_string(), "Not an amount: lots");
}

// ── output paths ──────────────────────────────────────────────

#[test]
fn test_output_arg() {
    assert_eq!(output_arg(&args(&["/tmp/out"])), Some(PathBuf::from("/tmp/out")));
    assert_eq!(output_arg(&args(&["--flag"])), None);
    assert_eq!(output_arg(&[]), None);
}

// ── chat actions ──────────────────────────────────────────────

#[test]
fn test_perform_writes_files_and_notifies() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(TaxProfile::default(), crate::models::sample_records());

    perform(&mut session, Action::ExportCsv, dir.path());
    assert!(session.transcript.last().unwrap().text.contains("Exported 15 records"));

    perform(&mut session, Action::WritePdf, dir.path());
    assert!(session.transcript.last().unwrap().text.starts_with("✅ Report saved!"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_print_new_advances() {
    let mut session = Session::new(TaxProfile::default(), Vec::new());
    let shown = print_new(&session, 0);
    assert_eq!(shown, 1);
    session.send("help");
    assert_eq!(print_new(&session, shown), 3);
}
