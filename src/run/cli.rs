use anyhow::{Context, Result};
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::categorize::extract_amount;
use crate::chat::{scan_file, Action, Sender, Session};
use crate::config::{self, Config};
use crate::models::{Category, RecordKind, TaxProfile};
use crate::report::{self, Summary};
use crate::tax::{assess_vat, SmallBusinessStatus};
use crate::ui::screens::pit::band_label;
use crate::ui::util::format_naira;

pub(crate) fn as_cli(args: &[String], cfg: &Config) -> Result<()> {
    match args[1].as_str() {
        "chat" => cli_chat(cfg),
        "pit" | "paye" => cli_pit(&args[2..]),
        "vat" => cli_vat(&args[2..]),
        "summary" | "s" => cli_summary(cfg),
        "report" | "pdf" => cli_report(&args[2..], cfg),
        "export" => cli_export(&args[2..], cfg),
        "config" => cli_config(&args[2..], cfg),
        other if print_info(other) => Ok(()),
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

/// Help and version need no config, so they are answered before it loads.
pub(crate) fn print_info(arg: &str) -> bool {
    match arg {
        "--help" | "-h" | "help" => print_usage(),
        "--version" | "-V" | "version" => println!("taxbot {}", env!("CARGO_PKG_VERSION")),
        _ => return false,
    }
    true
}

fn print_usage() {
    println!("NRS TaxBot — 2026 Nigerian PIT/PAYE and VAT assistant");
    println!();
    println!("Usage: taxbot [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  chat                          Chat with the bot on stdin/stdout");
    println!("  pit <monthly-salary>          Print the PIT/PAYE breakdown");
    println!("  vat <category> <amount>       Classify an amount for VAT");
    println!("  summary                       Print session totals");
    println!("  report [dir]                  Write the PDF tax report");
    println!("  export [path]                 Export records to CSV");
    println!("  config [init]                 Show the config, or write a default one");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_chat(cfg: &Config) -> Result<()> {
    let mut session = super::new_session(cfg);
    let output_dir = cfg.report_dir();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut shown = print_new(&session, 0);

    loop {
        print!("> ");
        stdout.flush().context("flush stdout")?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("read stdin")? == 0 {
            break;
        }
        let line = line.trim();
        match line {
            ":q" | ":quit" | "exit" => break,
            _ => {}
        }

        if let Some(path) = line.strip_prefix(":receipt") {
            let path = super::shellexpand(path.trim());
            match scan_file(Path::new(&path), Local::now().date_naive()) {
                Ok(scan) => session.attach_receipt(scan),
                Err(e) => session.notify(format!("❌ Please upload an image (jpg, png, webp)\n{e:#}")),
            }
        } else if let Some(action) = session.send(line) {
            perform(&mut session, action, &output_dir);
        }
        shown = print_new(&session, shown);
    }
    Ok(())
}

/// Print transcript messages from `from` on. Returns the new count.
fn print_new(session: &Session, from: usize) -> usize {
    for msg in &session.transcript[from..] {
        if msg.sender == Sender::Bot {
            println!("\n[TaxBot {}]\n{}\n", msg.time, msg.text);
        }
    }
    session.transcript.len()
}

fn perform(session: &mut Session, action: Action, dir: &Path) {
    let today = Local::now().date_naive();
    let outcome = match action {
        Action::WritePdf => report::write_pdf(dir, &session.records, &session.profile, today)
            .map(|path| format!("✅ Report saved!\n📄 {}", path.display())),
        Action::ExportCsv => {
            let path = dir.join(report::csv_file_name(today));
            report::write_csv(&path, &session.records)
                .map(|count| format!("✅ Exported {count} records!\n📑 {}", path.display()))
        }
    };
    match outcome {
        Ok(text) => session.notify(text),
        Err(e) => {
            tracing::error!(error = %e, "export failed");
            session.notify(format!("❌ Couldn't write the file: {e:#}"));
        }
    }
}

fn cli_pit(args: &[String]) -> Result<()> {
    let monthly = args
        .first()
        .and_then(|a| extract_amount(a))
        .ok_or_else(|| anyhow::anyhow!("Usage: taxbot pit <monthly-salary>"))?;
    let profile = TaxProfile::new(monthly);
    let pit = profile.pit();

    println!("PIT BREAKDOWN (2026) — {}/month", format_naira(monthly));
    println!("{}", "─".repeat(52));
    println!("  Annual Gross:          {:>16}", format_naira(pit.gross_income));
    println!("  Personal Relief:       {:>16}", format_naira(pit.personal_relief));
    println!("  Consolidated (20%):    {:>16}", format_naira(pit.consolidated_relief));
    println!("  1% Relief:             {:>16}", format_naira(pit.one_percent_relief));
    println!("  Total Relief:          {:>16}", format_naira(pit.total_relief));
    println!("  Taxable Income:        {:>16}", format_naira(pit.taxable_income));
    println!();
    println!("Bands:");
    for band in &pit.bands {
        println!(
            "  {:<28} {:>3}% {:>14} {:>12}",
            band_label(&band.bracket),
            band.bracket.rate_percent,
            format_naira(band.taxed_amount),
            format_naira(band.tax)
        );
    }
    println!();
    println!("  Annual Tax:            {:>16}", format_naira(pit.total_tax));
    println!("  Effective Rate:        {:>15}%", pit.effective_rate);
    println!("  Monthly PAYE:          {:>16}", format_naira(profile.monthly_paye()));
    println!("  Monthly Net:           {:>16}", format_naira(profile.monthly_net()));
    Ok(())
}

/// `<category words...> <amount>`, e.g. `office rent 250,000`.
fn parse_vat_args(args: &[String]) -> Result<(Category, i64)> {
    let Some((amount, name)) = args.split_last() else {
        anyhow::bail!("Usage: taxbot vat <category> <amount>");
    };
    let amount = extract_amount(amount)
        .ok_or_else(|| anyhow::anyhow!("Not an amount: {amount}"))?;
    let name = name.join(" ");
    let category = Category::parse(&name).ok_or_else(|| {
        let known: Vec<&str> = Category::for_kind(RecordKind::Expense)
            .iter()
            .chain(
                Category::for_kind(RecordKind::Income)
                    .iter()
                    .filter(|c| !c.belongs_to(RecordKind::Expense)),
            )
            .map(|c| c.as_str())
            .collect();
        anyhow::anyhow!("Unknown category '{name}'. Known: {}", known.join(", "))
    })?;
    Ok((category, amount))
}

fn cli_vat(args: &[String]) -> Result<()> {
    let (category, amount) = parse_vat_args(args)?;
    let vat = assess_vat(category, amount);
    println!("{} {category}: {}", category.icon(), format_naira(amount));
    println!("  VAT rate:   {}", vat.treatment.label());
    println!("  VAT amount: {}", format_naira(vat.amount));
    println!("  Exempt:     {}", if vat.exempt { "yes" } else { "no" });
    Ok(())
}

fn cli_summary(cfg: &Config) -> Result<()> {
    let session = super::new_session(cfg);
    let s = Summary::from_records(&session.records);

    println!("NRS TaxBot — session summary");
    println!("{}", "─".repeat(40));
    println!("  Income:           {}", format_naira(s.total_income));
    println!("  Expenses:         {}", format_naira(s.total_expenses));
    println!("  Net:              {}", format_naira(s.net()));
    println!("  VAT recoverable:  {}", format_naira(s.vat.input_vat));
    println!("  Net VAT payable:  {}", format_naira(s.vat.net_payable()));
    println!("  Records:          {} ({} with receipts)", s.record_count, s.receipt_count);
    match s.small_business {
        SmallBusinessStatus::Exempt { headroom } => {
            println!("  Small business:   EXEMPT ({} headroom)", format_naira(headroom))
        }
        SmallBusinessStatus::Liable { excess } => {
            println!("  Small business:   LIABLE ({} over limit)", format_naira(excess))
        }
    }

    if !s.expenses_by_category.is_empty() {
        println!();
        println!("Expenses by Category:");
        for (category, amount) in &s.expenses_by_category {
            println!(
                "  {:<16} {:>12} {:>4}%",
                category.as_str(),
                format_naira(*amount),
                s.expense_share(*amount)
            );
        }
    }
    Ok(())
}

fn output_arg(args: &[String]) -> Option<PathBuf> {
    args.first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| PathBuf::from(super::shellexpand(a)))
}

fn cli_report(args: &[String], cfg: &Config) -> Result<()> {
    let session = super::new_session(cfg);
    let dir = output_arg(args).unwrap_or_else(|| cfg.report_dir());
    let path = report::write_pdf(
        &dir,
        &session.records,
        &session.profile,
        Local::now().date_naive(),
    )?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn cli_export(args: &[String], cfg: &Config) -> Result<()> {
    let session = super::new_session(cfg);
    let path = output_arg(args).unwrap_or_else(|| {
        cfg.report_dir()
            .join(report::csv_file_name(Local::now().date_naive()))
    });
    let count = report::write_csv(&path, &session.records)?;
    if count == 0 {
        println!("No records to export (header written to {})", path.display());
    } else {
        println!("Exported {count} records to {}", path.display());
    }
    Ok(())
}

fn cli_config(args: &[String], cfg: &Config) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("init") => config::init_config(),
        Some(other) => anyhow::bail!("Usage: taxbot config [init] (got '{other}')"),
        None => {
            println!("# {}", config::config_path()?.display());
            print!("{}", toml::to_string_pretty(cfg).context("serialize config")?);
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
