use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::categorize::extract_amount;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit TaxBot", cmd_quit, r);
    register_command!("quit", "Quit TaxBot", cmd_quit, r);
    register_command!("c", "Go to Chat", cmd_chat, r);
    register_command!("chat", "Go to Chat", cmd_chat, r);
    register_command!("p", "Go to PIT breakdown", cmd_pit, r);
    register_command!("pit", "Go to PIT breakdown", cmd_pit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("r", "Go to Records", cmd_records, r);
    register_command!("records", "Go to Records", cmd_records, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "salary",
        "Set monthly salary (e.g. :salary 750000)",
        cmd_salary,
        r
    );
    register_command!(
        "receipt",
        "Upload a receipt photo (e.g. :receipt ~/shoprite.jpg)",
        cmd_receipt,
        r
    );
    register_command!("pdf", "Save the NRS tax report as PDF", cmd_pdf, r);
    register_command!(
        "export",
        "Export records to CSV (e.g. :export ~/records.csv)",
        cmd_export,
        r
    );
    register_command!(
        "reset",
        "Drop the record being entered",
        cmd_reset,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, "running command");
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_chat(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_screen(Screen::Chat);
    Ok(())
}

fn cmd_pit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_screen(Screen::Pit);
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_screen(Screen::Dashboard);
    Ok(())
}

fn cmd_records(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_screen(Screen::Records);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_salary(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(amount) = extract_amount(args) else {
        app.set_status("Usage: :salary <monthly amount>  (e.g. :salary 750,000)");
        return Ok(());
    };
    app.session.set_salary(amount);
    app.set_status(format!(
        "Monthly salary set. PAYE is now {} a month",
        crate::ui::util::format_naira(app.session.profile.monthly_paye())
    ));
    Ok(())
}

fn cmd_receipt(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :receipt <path to photo>");
        return Ok(());
    }
    let path = crate::run::shellexpand(args);
    app.attach_receipt(Path::new(&path));
    Ok(())
}

fn cmd_pdf(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.perform(crate::chat::Action::WritePdf);
    Ok(())
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.perform(crate::chat::Action::ExportCsv);
    } else {
        let path = crate::run::shellexpand(args);
        app.export_to(Path::new(&path));
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.session.send("reset");
    app.set_status("Pending record dropped");
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
