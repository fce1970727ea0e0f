//! Canonical roster schema: field set, column aliasing, header detection.
//!
//! Spreadsheet exports arrive with free-form column titles — accented, padded,
//! reworded from one season's export to the next — and often with a preamble
//! row or two before the real header. This module turns that mess into a fixed
//! schema:
//!
//! 1. [`detect_header`] finds the real header row.
//! 2. [`column_map`] maps each recognized column onto a [`Field`].
//!
//! ## Header rule
//!
//! A row is the header when its normalized cells contain both a last-name
//! label and a first-name label, in any position. This is deliberately
//! position-independent: exports have been seen with the name columns swapped
//! or shifted. When no row qualifies, row 0 is used and the caller is handed a
//! warning — a wrong header produces a garbled table, so the fallback is never
//! silent.
//!
//! ## Alias policy
//!
//! The alias table is many-to-one: every attested spelling of a column title
//! maps to one canonical field. Lookup keys are pre-normalized (see
//! [`crate::text::normalize`]), so `"TÉLÉPHONE "` and `"telephone"` land on
//! the same entry. Unrecognized columns are dropped, not errored. If two
//! source columns alias to the same field, the rightmost column wins.

use crate::text;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the fixed canonical record attributes.
///
/// Every normalized record carries every variant, defaulting to empty text
/// when the source export has no matching column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    LastName,
    FirstName,
    PostalAddress,
    Phone,
    Email,
    VehicleMake,
    VehicleModel,
    Year,
    PlateNumber,
    OtherClub,
    Insurance,
    Dues,
    OtherVehicle,
}

impl Field {
    /// All canonical fields, in profile-page display order.
    pub const ALL: [Field; 13] = [
        Field::LastName,
        Field::FirstName,
        Field::PostalAddress,
        Field::Phone,
        Field::Email,
        Field::VehicleMake,
        Field::VehicleModel,
        Field::Year,
        Field::PlateNumber,
        Field::OtherClub,
        Field::Insurance,
        Field::Dues,
        Field::OtherVehicle,
    ];

    /// Human-readable label used on rendered pages.
    pub fn label(self) -> &'static str {
        match self {
            Field::LastName => "Last name",
            Field::FirstName => "First name",
            Field::PostalAddress => "Postal address",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::VehicleMake => "Vehicle make",
            Field::VehicleModel => "Vehicle model",
            Field::Year => "Year",
            Field::PlateNumber => "Plate number",
            Field::OtherClub => "Other club",
            Field::Insurance => "Insurance",
            Field::Dues => "Dues",
            Field::OtherVehicle => "Other vehicle",
        }
    }
}

/// Attested column-title spellings, keyed by their normalized form.
///
/// Many-to-one by design. Keys must already be in normalized form — there is
/// a test asserting that, so a new entry with an accent or capital letter
/// fails fast.
const ALIASES: &[(&str, Field)] = &[
    // name
    ("nom", Field::LastName),
    ("last name", Field::LastName),
    ("surname", Field::LastName),
    ("family name", Field::LastName),
    ("prenom", Field::FirstName),
    ("first name", Field::FirstName),
    ("given name", Field::FirstName),
    // address
    ("adresse postale", Field::PostalAddress),
    ("adresse postale (rue, numero, cp, ville)", Field::PostalAddress),
    ("adresse postale ( rue, numero, cp, ville )", Field::PostalAddress),
    ("adresse", Field::PostalAddress),
    ("postal address", Field::PostalAddress),
    ("address", Field::PostalAddress),
    // phone / mail
    ("numero de gsm", Field::Phone),
    ("telephone", Field::Phone),
    ("telephone (gsm)", Field::Phone),
    ("gsm", Field::Phone),
    ("phone", Field::Phone),
    ("phone number", Field::Phone),
    ("mobile", Field::Phone),
    ("email", Field::Email),
    ("e-mail", Field::Email),
    ("adresse mail", Field::Email),
    ("mail", Field::Email),
    ("email address", Field::Email),
    // vehicle
    ("marque", Field::VehicleMake),
    ("marque du vehicule", Field::VehicleMake),
    ("make", Field::VehicleMake),
    ("vehicle make", Field::VehicleMake),
    ("modele", Field::VehicleModel),
    ("modele du vehicule", Field::VehicleModel),
    ("model", Field::VehicleModel),
    ("vehicle model", Field::VehicleModel),
    ("annee", Field::Year),
    ("year", Field::Year),
    // registration
    ("immatriculation", Field::PlateNumber),
    ("numero dimmatriculation", Field::PlateNumber),
    ("numero d'immatriculation", Field::PlateNumber),
    ("plate", Field::PlateNumber),
    ("plate number", Field::PlateNumber),
    ("registration number", Field::PlateNumber),
    // memberships & insurance
    ("autre club", Field::OtherClub),
    ("membre d'un autre club", Field::OtherClub),
    ("other club", Field::OtherClub),
    ("other club membership", Field::OtherClub),
    ("assure chez behva", Field::Insurance),
    ("assurance", Field::Insurance),
    ("insurance", Field::Insurance),
    ("insurance status", Field::Insurance),
    ("insured", Field::Insurance),
    // dues
    ("cotisation", Field::Dues),
    ("cotisation 2025", Field::Dues),
    ("statut cotisation", Field::Dues),
    ("cotisation payee", Field::Dues),
    ("a jour de cotisation", Field::Dues),
    ("dues", Field::Dues),
    ("dues status", Field::Dues),
    ("dues paid", Field::Dues),
    // second vehicle
    ("autre vehicule", Field::OtherVehicle),
    ("other vehicle", Field::OtherVehicle),
];

/// Look up a raw column title against the alias table.
///
/// The title is normalized before lookup; unknown titles return `None` and
/// their column is dropped from the canonical record.
pub fn lookup(label: &str) -> Option<Field> {
    let key = text::normalize(label);
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, field)| *field)
}

/// Outcome of the header search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderScan {
    /// Zero-based index of the row to treat as the header.
    pub index: usize,
    /// False when no row satisfied the predicate and `index` is the fallback.
    pub matched: bool,
}

/// Find the header row: the first row whose cells alias to both
/// [`Field::LastName`] and [`Field::FirstName`], anywhere in the row.
///
/// Falls back to row 0 when nothing matches; callers should surface
/// `matched == false` as a warning.
pub fn detect_header(rows: &[Vec<String>]) -> HeaderScan {
    for (index, row) in rows.iter().enumerate() {
        let mut has_last = false;
        let mut has_first = false;
        for cell in row {
            match lookup(cell) {
                Some(Field::LastName) => has_last = true,
                Some(Field::FirstName) => has_first = true,
                _ => {}
            }
        }
        if has_last && has_first {
            return HeaderScan {
                index,
                matched: true,
            };
        }
    }
    HeaderScan {
        index: 0,
        matched: false,
    }
}

/// Map header columns onto canonical fields.
///
/// Unrecognized columns are absent from the map. When two columns alias to
/// the same field, record construction iterates columns left to right, so the
/// rightmost column's value wins.
pub fn column_map(header: &[String]) -> BTreeMap<usize, Field> {
    header
        .iter()
        .enumerate()
        .filter_map(|(col, label)| lookup(label).map(|field| (col, field)))
        .collect()
}
