//! Roster construction: raw rows → normalized, identified records.
//!
//! Stage 1 of the build pipeline. Everything after fetching is pure
//! ([`build`] takes rows, returns a [`Roster`]), so the whole
//! normalization path is unit-testable without touching the network.
//!
//! Per source row, in order:
//!
//! 1. header detection and column aliasing (see [`crate::schema`])
//! 2. canonical record construction — every [`Field`] present, values
//!    trimmed, rows with neither a last nor a first name dropped
//! 3. slug assignment from first + last name, collision-suffixed in row
//!    order (see [`crate::slug`])
//! 4. dues classification, computed once and stored (see [`crate::dues`])
//!
//! Conditions that would silently corrupt the output — no rows at all, no
//! recognizable header — are recorded as warnings on the roster instead of
//! being swallowed.

use crate::config::SiteConfig;
use crate::dues;
use crate::schema::{self, Field};
use crate::slug::{self, SlugAssigner};
use crate::source::{self, SourceError};
use crate::types::{Record, Roster};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Fetch the configured source and build the roster.
pub fn load(config: &SiteConfig) -> Result<Roster, RosterError> {
    let location = config.resolve_source()?;
    let rows = source::fetch_rows(location)?;
    Ok(build(&rows))
}

/// Build a roster from raw rows. Pure and deterministic.
pub fn build(rows: &[Vec<String>]) -> Roster {
    let mut warnings = Vec::new();

    if rows.is_empty() {
        warnings.push("source contained no rows".to_string());
        return Roster {
            records: Vec::new(),
            warnings,
        };
    }

    let scan = schema::detect_header(rows);
    if !scan.matched {
        warnings.push(
            "no row contained both a last-name and a first-name column; using row 1 as the header"
                .to_string(),
        );
    }
    let columns = schema::column_map(&rows[scan.index]);

    let mut assigner = SlugAssigner::new();
    let mut records = Vec::new();
    for row in &rows[scan.index + 1..] {
        let mut fields: BTreeMap<Field, String> = Field::ALL
            .iter()
            .map(|field| (*field, String::new()))
            .collect();
        // Ascending column order: when two columns alias to the same field,
        // the rightmost value wins.
        for (col, field) in &columns {
            if let Some(value) = row.get(*col) {
                fields.insert(*field, value.trim().to_string());
            }
        }

        if fields[&Field::LastName].is_empty() && fields[&Field::FirstName].is_empty() {
            continue;
        }

        let base = slug::slugify(&format!(
            "{} {}",
            fields[&Field::FirstName],
            fields[&Field::LastName]
        ));
        let slug = assigner.assign(&base);
        let dues = dues::classify(&fields[&Field::Dues]);
        records.push(Record {
            fields,
            slug,
            dues,
        });
    }

    Roster { records, warnings }
}
