use chrono::Local;
use std::path::{Path, PathBuf};

use crate::chat::{scan_file, Action, Session};
use crate::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Chat,
    Pit,
    Dashboard,
    Records,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Chat, Self::Pit, Self::Dashboard, Self::Records]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chat => write!(f, "Chat"),
            Self::Pit => write!(f, "PIT"),
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Records => write!(f, "Records"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    /// Keystrokes go to the chat input line.
    Chat,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Chat => write!(f, "CHAT"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) chat_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) session: Session,
    /// Where `:pdf` and `:export` write.
    pub(crate) output_dir: PathBuf,

    // Chat: lines scrolled up from the bottom of the transcript
    pub(crate) chat_scroll: usize,

    // Records
    pub(crate) record_index: usize,
    pub(crate) record_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(session: Session, output_dir: PathBuf) -> Self {
        Self {
            running: true,
            screen: Screen::Chat,
            input_mode: InputMode::Chat,
            command_input: String::new(),
            chat_input: String::new(),
            status_message: String::new(),
            show_help: false,

            session,
            output_dir,

            chat_scroll: 0,

            record_index: 0,
            record_scroll: 0,

            visible_rows: 20,
        }
    }

    /// The mode a screen starts in once any command has finished.
    pub(crate) fn resting_mode(&self) -> InputMode {
        if self.screen == Screen::Chat {
            InputMode::Chat
        } else {
            InputMode::Normal
        }
    }

    pub(crate) fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.input_mode = self.resting_mode();
        if screen == Screen::Records && self.record_index >= self.session.records.len() {
            self.record_index = self.session.records.len().saturating_sub(1);
        }
    }

    /// Send the chat input line to the bot and carry out whatever it asks for.
    pub(crate) fn submit_chat(&mut self) {
        let text = std::mem::take(&mut self.chat_input);
        self.chat_scroll = 0;
        if let Some(action) = self.session.send(&text) {
            self.perform(action);
        }
    }

    pub(crate) fn perform(&mut self, action: Action) {
        let today = Local::now().date_naive();
        match action {
            Action::WritePdf => {
                match report::write_pdf(
                    &self.output_dir,
                    &self.session.records,
                    &self.session.profile,
                    today,
                ) {
                    Ok(path) => {
                        self.session
                            .notify(format!("✅ Report saved!\n📄 {}", path.display()));
                        self.set_status(format!("Wrote {}", path.display()));
                    }
                    Err(e) => self.report_failure("report", &e),
                }
            }
            Action::ExportCsv => {
                let path = self.output_dir.join(report::csv_file_name(today));
                self.export_to(&path);
            }
        }
    }

    pub(crate) fn export_to(&mut self, path: &Path) {
        match report::write_csv(path, &self.session.records) {
            Ok(count) => {
                self.session.notify(format!(
                    "✅ Exported {count} records!\n📑 {}",
                    path.display()
                ));
                self.set_status(format!("Exported {count} records to {}", path.display()));
            }
            Err(e) => self.report_failure("export", &e),
        }
    }

    /// Scan a receipt photo and hand it to the conversation.
    pub(crate) fn attach_receipt(&mut self, path: &Path) {
        match scan_file(path, Local::now().date_naive()) {
            Ok(scan) => {
                self.session.attach_receipt(scan);
                self.chat_scroll = 0;
                self.switch_screen(Screen::Chat);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "receipt rejected");
                self.session
                    .notify(format!("❌ Please upload an image (jpg, png, webp)\n{e:#}"));
                self.set_status(format!("{e:#}"));
            }
        }
    }

    fn report_failure(&mut self, what: &str, e: &anyhow::Error) {
        tracing::error!(error = %e, "{what} failed");
        self.session.notify(format!("❌ Couldn't write the {what}: {e:#}"));
        self.set_status(format!("Error: {e:#}"));
    }

    pub(crate) fn records_page(&self) -> usize {
        self.visible_rows.saturating_sub(3).max(1)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
