//! Shared test utilities for the simple-roster test suite.
//!
//! Provides row/record constructors and a small fixture export so roster,
//! render, and generate tests all exercise the same shapes.

use crate::dues;
use crate::roster;
use crate::schema::Field;
use crate::slug;
use crate::types::{Record, Roster};
use std::collections::BTreeMap;

/// Build one raw row from string slices.
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// A small export in the shape real ones arrive in: a title preamble row,
/// then the header, then three members — paid, unpaid, and a duplicate name
/// with an unclassifiable dues value.
pub fn sample_rows() -> Vec<Vec<String>> {
    vec![
        row(&["Liste des membres 2025", "", "", "", "", ""]),
        row(&["Nom", "Prénom", "Marque", "Modèle", "Adresse mail", "Cotisation"]),
        row(&["Dupont", "Jean", "Citroën", "DS", "jean@example.org", "à jour"]),
        row(&["Lefèvre", "Éloïse", "Renault", "4CV", "", "pas en ordre"]),
        row(&["Dupont", "Jean", "Peugeot", "203", "", "2025"]),
    ]
}

/// The [`sample_rows`] export, normalized.
pub fn make_roster() -> Roster {
    roster::build(&sample_rows())
}

/// Build a single record directly, with every canonical field present.
///
/// `extra` overrides individual fields; the slug is derived the same way the
/// roster builder derives it, and dues are classified from the final Dues
/// value so the record is internally consistent.
pub fn make_record(last: &str, first: &str, extra: &[(Field, &str)]) -> Record {
    let mut fields: BTreeMap<Field, String> = Field::ALL
        .iter()
        .map(|field| (*field, String::new()))
        .collect();
    fields.insert(Field::LastName, last.to_string());
    fields.insert(Field::FirstName, first.to_string());
    for (field, value) in extra {
        fields.insert(*field, value.to_string());
    }
    let slug = slug::slugify(&format!("{first} {last}"));
    let dues = dues::classify(&fields[&Field::Dues]);
    Record { fields, slug, dues }
}
