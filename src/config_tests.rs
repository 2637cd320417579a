#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use super::*;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.profile.monthly_salary, 500_000);
    assert!(cfg.session.sample_records);
    assert_eq!(cfg.report.output_dir, None);
    assert_eq!(cfg.log.level, "warn");
    assert_eq!(cfg.profile(), TaxProfile::default());
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(parse_config("").unwrap(), Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let cfg = parse_config(
        r#"
[profile]
monthly_salary = 1200000

[report]
output_dir = "/tmp/nrs"
"#,
    )
    .unwrap();
    assert_eq!(cfg.profile.monthly_salary, 1_200_000);
    assert!(cfg.session.sample_records);
    assert_eq!(cfg.report_dir(), PathBuf::from("/tmp/nrs"));
    assert_eq!(cfg.log.level, "warn");
}

#[test]
fn test_negative_salary_clamped() {
    let cfg = parse_config("[profile]\nmonthly_salary = -5\n").unwrap();
    assert_eq!(cfg.profile().monthly_salary, 0);
}

#[test]
fn test_bad_type_is_error() {
    let err = parse_config("[session]\nsample_records = \"yes\"\n").unwrap_err();
    assert!(format!("{err:#}").contains("parse config.toml"));
}

#[test]
fn test_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_init_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taxbot").join("config.toml");
    assert!(init_at(&path).unwrap());
    assert!(!init_at(&path).unwrap());
    assert_eq!(load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.session.sample_records = false;
    cfg.log.level = "taxbot=debug".to_string();
    save_to(&path, &cfg).unwrap();
    assert_eq!(load_from(&path).unwrap(), cfg);
}

#[test]
fn test_report_dir_default_is_absolute_or_cwd() {
    let dir = Config::default().report_dir();
    assert!(!dir.as_os_str().is_empty());
}
