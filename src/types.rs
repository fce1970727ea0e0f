//! Shared types produced by the roster stage and consumed by rendering.
//!
//! These are serializable so `check --json` can dump the normalized roster
//! and tests can assert on the whole structure.

use crate::dues::DuesStatus;
use crate::schema::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One normalized roster record.
///
/// Built once per source row during a build pass and immutable afterwards.
/// `fields` always contains every canonical [`Field`], empty text where the
/// source had no matching column. `dues` is the single classification both
/// the badge renderer and the directory filter consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub fields: BTreeMap<Field, String>,
    /// Unique, URL- and filename-safe identifier (see [`crate::slug`]).
    pub slug: String,
    pub dues: DuesStatus,
}

impl Record {
    /// Value of a canonical field; empty string if (impossibly) absent.
    pub fn get(&self, field: Field) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Display name: "First Last", collapsed when either part is empty.
    pub fn display_name(&self) -> String {
        join_nonempty(self.get(Field::FirstName), self.get(Field::LastName))
    }

    /// Vehicle line: make and model joined, collapsed when either is empty.
    pub fn vehicle(&self) -> String {
        join_nonempty(self.get(Field::VehicleMake), self.get(Field::VehicleModel))
    }
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => String::new(),
        (false, true) => a.to_string(),
        (true, false) => b.to_string(),
        (false, false) => format!("{a} {b}"),
    }
}

/// The full normalized roster for one build pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub records: Vec<Record>,
    /// Recoverable-but-reported conditions (header fallback, empty source).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_record;

    #[test]
    fn get_returns_empty_for_unset_fields() {
        let record = make_record("Dupont", "Jean", &[]);
        assert_eq!(record.get(Field::PostalAddress), "");
        assert_eq!(record.get(Field::LastName), "Dupont");
    }

    #[test]
    fn display_name_joins_first_and_last() {
        let record = make_record("Dupont", "Jean", &[]);
        assert_eq!(record.display_name(), "Jean Dupont");
    }

    #[test]
    fn display_name_collapses_missing_parts() {
        assert_eq!(make_record("Dupont", "", &[]).display_name(), "Dupont");
        assert_eq!(make_record("", "Jean", &[]).display_name(), "Jean");
        assert_eq!(make_record("", "", &[]).display_name(), "");
    }

    #[test]
    fn vehicle_joins_make_and_model() {
        let record = make_record(
            "Dupont",
            "Jean",
            &[(Field::VehicleMake, "Citroën"), (Field::VehicleModel, "DS")],
        );
        assert_eq!(record.vehicle(), "Citroën DS");

        let record = make_record("Dupont", "Jean", &[(Field::VehicleMake, "Citroën")]);
        assert_eq!(record.vehicle(), "Citroën");
    }

    #[test]
    fn roster_roundtrips_through_json() {
        let roster = Roster {
            records: vec![make_record("Dupont", "Jean", &[(Field::Dues, "oui")])],
            warnings: vec!["something".to_string()],
        };
        let json = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back.records.len(), 1);
        assert_eq!(back.records[0].get(Field::LastName), "Dupont");
        assert_eq!(back.warnings, roster.warnings);
    }
}
