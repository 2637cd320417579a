//! The chat assistant: global commands, intent keywords and the record-entry
//! state machine. Nothing here touches the filesystem; file work is handed
//! back to the caller as an [`Action`].

mod receipt;
mod replies;

pub use receipt::{scan_file, ReceiptScan};
#[cfg(test)]
pub(crate) use receipt::scan_bytes;

use chrono::{Local, NaiveDate};

use crate::categorize::{extract_amount, find_category};
use crate::models::{Category, Record, RecordKind, TaxProfile};
use crate::tax::{assess_vat, VatAssessment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    /// Wall-clock `HH:MM` when the message was added.
    pub time: String,
}

/// Work the bot asks its driver to do after replying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    WritePdf,
    ExportCsv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub action: Option<Action>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
        }
    }

    fn with_action(text: impl Into<String>, action: Action) -> Self {
        Self {
            text: text.into(),
            action: Some(action),
        }
    }
}

/// Commands honoured in every state, ahead of the record-entry flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlobalCommand {
    Help,
    Summary,
    Report,
    Pit,
    Receipt,
    Reset,
    Export,
}

impl GlobalCommand {
    fn parse(msg: &str) -> Option<Self> {
        match msg {
            "help" => Some(Self::Help),
            "summary" | "total" => Some(Self::Summary),
            "pdf" | "report" => Some(Self::Report),
            "pit" | "paye" => Some(Self::Pit),
            "receipt" | "upload" => Some(Self::Receipt),
            "reset" => Some(Self::Reset),
            "csv" | "export" => Some(Self::Export),
            _ => None,
        }
    }
}

/// A record being assembled, before its category is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub kind: RecordKind,
    pub amount: i64,
    pub receipt: Option<ReceiptScan>,
}

/// A draft with its category and VAT settled, waiting for a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDraft {
    pub draft: Draft,
    pub category: Category,
    pub vat: VatAssessment,
}

/// Where the record-entry conversation is. Each waiting state owns the single
/// pending record, so at most one can exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingReceiptConfirmation(ReceiptScan),
    AwaitingAmount(ReceiptScan),
    AwaitingCategory(Draft),
    AwaitingDescription(ClassifiedDraft),
    AwaitingConfirmation(Record),
}

impl ConversationState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingReceiptConfirmation(_) => "awaiting_receipt_confirmation",
            Self::AwaitingAmount(_) => "awaiting_amount",
            Self::AwaitingCategory(_) => "awaiting_category",
            Self::AwaitingDescription(_) => "awaiting_description",
            Self::AwaitingConfirmation(_) => "awaiting_confirmation",
        }
    }
}

pub struct Session {
    pub records: Vec<Record>,
    pub profile: TaxProfile,
    pub state: ConversationState,
    pub transcript: Vec<Message>,
    next_id: u64,
}

impl Session {
    pub fn new(profile: TaxProfile, records: Vec<Record>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let mut session = Self {
            records,
            profile,
            state: ConversationState::Idle,
            transcript: Vec::new(),
            next_id,
        };
        session.push(Sender::Bot, replies::welcome());
        session
    }

    /// Handle one line typed by the user. Blank input is ignored.
    pub fn send(&mut self, text: &str) -> Option<Action> {
        if text.trim().is_empty() {
            return None;
        }
        self.push(Sender::User, text.to_string());
        let reply = self.respond(text, Local::now().date_naive());
        self.push(Sender::Bot, reply.text);
        reply.action
    }

    /// Append a bot message on behalf of the driver (e.g. after writing a file).
    pub fn notify(&mut self, text: impl Into<String>) {
        self.push(Sender::Bot, text.into());
    }

    /// Start the receipt flow from a scanned photo. Drops any pending record.
    pub fn attach_receipt(&mut self, scan: ReceiptScan) {
        self.push(
            Sender::User,
            format!("📸 [Receipt uploaded: {}]", scan.file_name),
        );
        self.push(Sender::Bot, replies::receipt_processed(&scan));
        self.transition(ConversationState::AwaitingReceiptConfirmation(scan));
    }

    pub(crate) fn respond(&mut self, message: &str, today: NaiveDate) -> Reply {
        let msg = message.trim().to_lowercase();

        if let Some(command) = GlobalCommand::parse(&msg) {
            return self.run_global(command);
        }

        let from = self.state.name();
        let (next, reply) = match std::mem::take(&mut self.state) {
            ConversationState::Idle => self.on_idle(message, &msg),
            ConversationState::AwaitingReceiptConfirmation(scan) => {
                on_receipt_confirmation(scan, &msg)
            }
            ConversationState::AwaitingAmount(scan) => on_corrected_amount(scan, message),
            ConversationState::AwaitingCategory(draft) => on_category(draft, message),
            ConversationState::AwaitingDescription(classified) => {
                self.on_description(classified, message, today)
            }
            ConversationState::AwaitingConfirmation(record) => {
                self.on_confirmation(record, &msg)
            }
        };
        if from != next.name() {
            tracing::debug!(from, to = next.name(), "conversation state");
        }
        self.state = next;
        reply
    }

    fn transition(&mut self, next: ConversationState) {
        if self.state.name() != next.name() {
            tracing::debug!(from = self.state.name(), to = next.name(), "conversation state");
        }
        self.state = next;
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.transcript.push(Message {
            sender,
            text,
            time: Local::now().format("%H:%M").to_string(),
        });
    }

    fn run_global(&mut self, command: GlobalCommand) -> Reply {
        match command {
            GlobalCommand::Help => Reply::text(replies::help()),
            GlobalCommand::Summary => Reply::text(replies::summary(&self.records)),
            GlobalCommand::Pit => Reply::text(replies::pit_breakdown(&self.profile)),
            GlobalCommand::Receipt => Reply::text(replies::receipt_hint()),
            GlobalCommand::Report => {
                Reply::with_action("📄 Generating your NRS report...", Action::WritePdf)
            }
            GlobalCommand::Export => {
                Reply::with_action("📑 Exporting your records to CSV...", Action::ExportCsv)
            }
            GlobalCommand::Reset => {
                self.transition(ConversationState::Idle);
                Reply::text("✅ Reset done!")
            }
        }
    }

    fn on_idle(&mut self, message: &str, msg: &str) -> (ConversationState, Reply) {
        if msg.contains("salary") || msg.contains("earn me") {
            return (ConversationState::Idle, self.on_salary(message));
        }

        let kind = if msg.contains("spend") || msg.contains("pay") || msg.contains("buy") {
            RecordKind::Expense
        } else if msg.contains("receive") || msg.contains("income") {
            RecordKind::Income
        } else {
            return (ConversationState::Idle, Reply::text(replies::not_understood()));
        };

        match extract_amount(message) {
            Some(amount) => (
                ConversationState::AwaitingCategory(Draft {
                    kind,
                    amount,
                    receipt: None,
                }),
                Reply::text(replies::category_prompt(kind, amount)),
            ),
            None => (
                ConversationState::Idle,
                Reply::text(replies::amount_missing(kind)),
            ),
        }
    }

    fn on_salary(&mut self, message: &str) -> Reply {
        match extract_amount(message) {
            Some(amount) => Reply::text(self.apply_salary(amount)),
            None => Reply::text("Amount missing. Try: \"My salary is ₦500000\""),
        }
    }

    fn apply_salary(&mut self, amount: i64) -> String {
        self.profile = TaxProfile::new(amount);
        tracing::info!(monthly_salary = amount, "salary updated");
        replies::salary_updated(&self.profile)
    }

    /// Change the salary outside the conversation (the `:salary` command).
    /// A pending record is left as it is.
    pub fn set_salary(&mut self, amount: i64) {
        let text = self.apply_salary(amount);
        self.push(Sender::Bot, text);
    }

    fn on_description(
        &mut self,
        classified: ClassifiedDraft,
        message: &str,
        today: NaiveDate,
    ) -> (ConversationState, Reply) {
        let ClassifiedDraft {
            draft,
            category,
            vat,
        } = classified;

        let record = Record {
            id: self.next_id,
            kind: draft.kind,
            category,
            amount: draft.amount,
            description: message.trim().to_string(),
            date: today,
            vat_exempt: vat.exempt,
            vat_amount: vat.amount,
            reference: Record::reference_for(self.records.len() + 1),
            has_receipt: draft.receipt.is_some(),
        };
        let reply = Reply::text(replies::confirm(&record));
        (ConversationState::AwaitingConfirmation(record), reply)
    }

    fn on_confirmation(&mut self, record: Record, msg: &str) -> (ConversationState, Reply) {
        if matches!(msg, "yes" | "ok" | "save") {
            let reply = Reply::text(replies::saved(&record));
            tracing::info!(
                reference = %record.reference,
                kind = %record.kind,
                category = %record.category,
                amount = record.amount,
                "record saved"
            );
            self.next_id = record.id + 1;
            self.records.push(record);
            (ConversationState::Idle, reply)
        } else {
            (ConversationState::Idle, Reply::text("❌ Cancelled!"))
        }
    }
}

fn on_receipt_confirmation(scan: ReceiptScan, msg: &str) -> (ConversationState, Reply) {
    if matches!(msg, "yes" | "ok" | "correct") {
        let draft = Draft {
            kind: RecordKind::Expense,
            amount: scan.amount,
            receipt: Some(scan),
        };
        (
            ConversationState::AwaitingCategory(draft),
            Reply::text(replies::receipt_category_prompt()),
        )
    } else {
        (
            ConversationState::AwaitingAmount(scan),
            Reply::text("No problem! Tell me the correct amount: \"₦XXXX\""),
        )
    }
}

fn on_corrected_amount(scan: ReceiptScan, message: &str) -> (ConversationState, Reply) {
    match extract_amount(message) {
        Some(amount) => (
            ConversationState::AwaitingCategory(Draft {
                kind: RecordKind::Expense,
                amount,
                receipt: Some(scan),
            }),
            Reply::text(replies::category_prompt(RecordKind::Expense, amount)),
        ),
        None => (
            ConversationState::AwaitingAmount(scan),
            Reply::text("Amount missing. Try: \"₦5000\""),
        ),
    }
}

fn on_category(draft: Draft, message: &str) -> (ConversationState, Reply) {
    match find_category(message, draft.kind) {
        Some(category) => {
            let vat = assess_vat(category, draft.amount);
            let reply = Reply::text(replies::category_chosen(category, &vat));
            (
                ConversationState::AwaitingDescription(ClassifiedDraft {
                    draft,
                    category,
                    vat,
                }),
                reply,
            )
        }
        None => (
            ConversationState::AwaitingCategory(draft),
            Reply::text("Pick from the list please!"),
        ),
    }
}
