mod cli;
mod tui;

pub(crate) use cli::{as_cli, print_info};
pub(crate) use tui::as_tui;

use crate::chat::Session;
use crate::config::Config;
use crate::models::sample_records;

/// A fresh session: the configured salary, plus the demo records unless
/// they are switched off.
pub(crate) fn new_session(cfg: &Config) -> Session {
    let records = if cfg.session.sample_records {
        sample_records()
    } else {
        Vec::new()
    };
    Session::new(cfg.profile(), records)
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = directories::UserDirs::new()
            .map(|d| d.home_dir().to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
