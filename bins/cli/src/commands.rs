//! Command parsing and the offline checks behind each command.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ledgerly_core::ledger::{JournalDraft, JournalValidator, Tolerance};
use ledgerly_core::reports::{
    BalanceCheck, BalanceSheetFigures, ReportFigures, StatementReconciler, TrialBalanceFigures,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

/// Offline checks for Ledgerly journal and report files
#[derive(Debug, Parser)]
#[command(name = "ledgerly")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Report kinds accepted by `check-report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Total debits against total credits
    TrialBalance,
    /// Assets against liabilities, equity and net profit
    BalanceSheet,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Validate a journal draft or a journal fetched from the backend
    CheckJournal {
        /// JSON file holding the journal
        file: PathBuf,
    },
    /// Check that a report's figures balance
    CheckReport {
        /// Report kind
        #[arg(value_enum)]
        kind: ReportKind,
        /// JSON file holding the report
        file: PathBuf,
    },
}

impl Command {
    /// The input file.
    pub fn file(&self) -> &PathBuf {
        match self {
            Self::CheckJournal { file } | Self::CheckReport { file, .. } => file,
        }
    }
}

/// Result of a journal check, printed as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalCheck {
    pub valid: bool,
    pub debit_total: Decimal,
    pub credit_total: Decimal,
    pub difference: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Validates a journal given as draft or backend JSON.
pub fn check_journal(json: &str, tolerance: Tolerance) -> anyhow::Result<JournalCheck> {
    let draft: JournalDraft = serde_json::from_str(json).context("not a journal")?;
    let totals = JournalValidator::compute_totals(&draft);
    debug!(lines = draft.lines.len(), "Checking journal");

    let outcome = JournalValidator::validate_for_submit_with(&draft, tolerance);
    if let Err(e) = &outcome {
        warn!(code = e.error_code(), "Journal rejected");
    }

    Ok(JournalCheck {
        valid: outcome.is_ok(),
        debit_total: totals.debit_total,
        credit_total: totals.credit_total,
        difference: totals.difference(),
        error_code: outcome.as_ref().err().map(|e| e.error_code()),
        message: outcome.err().map(|e| e.to_string()),
    })
}

/// Checks a report's balancing identity. Extra report fields are ignored.
pub fn check_report(
    kind: ReportKind,
    json: &str,
    tolerance: Tolerance,
) -> anyhow::Result<BalanceCheck> {
    let figures = match kind {
        ReportKind::TrialBalance => ReportFigures::TrialBalance(
            serde_json::from_str::<TrialBalanceFigures>(json).context("not a trial balance")?,
        ),
        ReportKind::BalanceSheet => ReportFigures::BalanceSheet(
            serde_json::from_str::<BalanceSheetFigures>(json).context("not a balance sheet")?,
        ),
    };

    let check = StatementReconciler::check_balance_with(&figures, tolerance);
    if !check.ok {
        warn!(difference = %check.difference, "Report does not balance");
    }
    Ok(check)
}
