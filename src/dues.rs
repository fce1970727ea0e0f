//! Dues-status classification.
//!
//! The dues column is free text — treasurers have written "oui", "à jour",
//! "x", years, amounts, and nothing at all. Classification is a three-way
//! bucket over two fixed vocabularies matched on normalized text; anything
//! that matches neither is [`DuesStatus::Unknown`] and keeps its raw text for
//! display. Unknown is a display state, not an error: the roster must build
//! even when the treasurer invents a new spelling mid-season.
//!
//! The classifier runs exactly once per record, at roster-build time. Both
//! consumers — the badge on profile and directory pages, and the directory's
//! paid/unpaid filter facet — read the stored result, so they can never
//! disagree about a member.

use crate::text;
use serde::{Deserialize, Serialize};

/// Values accepted as "dues are paid", in normalized form.
const PAID: &[&str] = &[
    "oui", "ok", "o", "payee", "en ordre", "a jour", "yes", "1", "x", "paid",
    "up to date",
];

/// Values accepted as "dues are not paid", in normalized form.
const UNPAID: &[&str] = &[
    "non", "no", "0", "pas en ordre", "impaye", "impayee", "due", "unpaid",
    "not paid", "overdue", "late",
];

/// Three-way dues classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuesStatus {
    Paid,
    Unpaid,
    Unknown,
}

impl DuesStatus {
    /// Facet token used in `data-dues` attributes and the directory filter.
    pub fn facet(self) -> &'static str {
        match self {
            DuesStatus::Paid => "paid",
            DuesStatus::Unpaid => "unpaid",
            DuesStatus::Unknown => "unknown",
        }
    }
}

/// Classify a raw dues cell.
pub fn classify(raw: &str) -> DuesStatus {
    let key = text::normalize(raw);
    if PAID.contains(&key.as_str()) {
        DuesStatus::Paid
    } else if UNPAID.contains(&key.as_str()) {
        DuesStatus::Unpaid
    } else {
        DuesStatus::Unknown
    }
}

/// Text shown for an unknown dues value: the original cell, or an em dash
/// when the cell is empty.
pub fn unknown_display(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() { "\u{2014}" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabularies_are_normalized() {
        for entry in PAID.iter().chain(UNPAID) {
            assert_eq!(&text::normalize(entry), entry, "entry {entry:?}");
        }
    }

    #[test]
    fn paid_variants() {
        for raw in ["à jour", "OUI", " payée ", "x", "En ordre", "paid"] {
            assert_eq!(classify(raw), DuesStatus::Paid, "value {raw:?}");
        }
    }

    #[test]
    fn unpaid_variants() {
        for raw in ["pas en ordre", "Non", "impayé", "IMPAYÉE", "0", "unpaid"] {
            assert_eq!(classify(raw), DuesStatus::Unpaid, "value {raw:?}");
        }
    }

    #[test]
    fn everything_else_is_unknown() {
        for raw in ["", "2025", "15 €", "voir trésorier", "oui?"] {
            assert_eq!(classify(raw), DuesStatus::Unknown, "value {raw:?}");
        }
    }

    #[test]
    fn unknown_keeps_raw_text_for_display() {
        assert_eq!(unknown_display("2025"), "2025");
        assert_eq!(unknown_display("  voir trésorier "), "voir trésorier");
        assert_eq!(unknown_display(""), "\u{2014}");
        assert_eq!(unknown_display("   "), "\u{2014}");
    }

    #[test]
    fn facet_tokens() {
        assert_eq!(DuesStatus::Paid.facet(), "paid");
        assert_eq!(DuesStatus::Unpaid.facet(), "unpaid");
        assert_eq!(DuesStatus::Unknown.facet(), "unknown");
    }
}
