//! CLI output formatting for the check and build commands.
//!
//! # Information-First Display
//!
//! Output is member-centric: the primary line for each record is its
//! positional index and display name, with derived data (slug, vehicle, dues)
//! as indented context lines. Warnings come first — a header fallback means
//! the rest of the listing may be garbage, so it must not scroll past.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Warnings
//!     no row contained both a last-name and a first-name column; using row 1 as the header
//!
//! Members
//! 001 Jean Dupont
//!     Slug: jean-dupont
//!     Vehicle: Citroën DS
//!     Dues: paid
//!
//! 3 members: 1 paid, 1 unpaid, 1 unknown
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Jean Dupont → members/jean-dupont.html
//!     QR: qrs/jean-dupont.png
//! Directory → members/index.html
//! Generated 3 profiles and 3 QR codes, removed 1 stale artifact
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::config::OutputLayout;
use crate::dues::DuesStatus;
use crate::generate::BuildStats;
use crate::types::Roster;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn warning_lines(roster: &Roster) -> Vec<String> {
    if roster.warnings.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Warnings".to_string()];
    for warning in &roster.warnings {
        lines.push(format!("    {warning}"));
    }
    lines.push(String::new());
    lines
}

/// Format the `check` summary: every member with slug, vehicle, and dues,
/// plus a status tally.
pub fn format_check_output(roster: &Roster) -> Vec<String> {
    let mut lines = warning_lines(roster);

    lines.push("Members".to_string());
    for (pos, record) in roster.records.iter().enumerate() {
        lines.push(format!("{} {}", format_index(pos + 1), record.display_name()));
        lines.push(format!("    Slug: {}", record.slug));
        let vehicle = record.vehicle();
        if !vehicle.is_empty() {
            lines.push(format!("    Vehicle: {vehicle}"));
        }
        lines.push(format!("    Dues: {}", record.dues.facet()));
    }

    let count = |status: DuesStatus| {
        roster
            .records
            .iter()
            .filter(|r| r.dues == status)
            .count()
    };
    lines.push(String::new());
    lines.push(format!(
        "{} member{}: {} paid, {} unpaid, {} unknown",
        roster.records.len(),
        if roster.records.len() == 1 { "" } else { "s" },
        count(DuesStatus::Paid),
        count(DuesStatus::Unpaid),
        count(DuesStatus::Unknown),
    ));
    lines
}

/// Format the `build` summary: what was written where, and what was swept.
pub fn format_build_output(
    roster: &Roster,
    stats: &BuildStats,
    layout: &OutputLayout,
) -> Vec<String> {
    let mut lines = warning_lines(roster);

    for (pos, record) in roster.records.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}/{}.html",
            format_index(pos + 1),
            record.display_name(),
            layout.pages_dir,
            record.slug
        ));
        lines.push(format!("    QR: {}/{}.png", layout.qr_dir, record.slug));
    }
    lines.push(format!("Directory → {}/index.html", layout.pages_dir));
    lines.push(format!(
        "Generated {} profile{} and {} QR code{}, removed {} stale artifact{}",
        stats.profiles,
        if stats.profiles == 1 { "" } else { "s" },
        stats.qr_codes,
        if stats.qr_codes == 1 { "" } else { "s" },
        stats.removed,
        if stats.removed == 1 { "" } else { "s" },
    ));
    lines
}

pub fn print_check_output(roster: &Roster) {
    for line in format_check_output(roster) {
        println!("{line}");
    }
}

pub fn print_build_output(roster: &Roster, stats: &BuildStats, layout: &OutputLayout) {
    for line in format_build_output(roster, stats, layout) {
        println!("{line}");
    }
}
