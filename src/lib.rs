//! # Simple Roster
//!
//! A minimal static site generator for club member rosters. A spreadsheet
//! export (CSV) is the data source: each row becomes a member profile page,
//! the whole table becomes a searchable directory page, and every member
//! gets a QR code image pointing at their published profile.
//!
//! # Architecture: One-Pass Pipeline
//!
//! ```text
//! fetch → detect header → alias columns → build records → assign slugs →
//! classify dues → render (profiles, directory) → write → sweep stale files
//! ```
//!
//! The pipeline is strictly sequential and runs to completion or aborts.
//! Everything between fetching and writing is pure: [`roster::build`] takes
//! raw rows and returns a [`types::Roster`], and the render functions take a
//! roster and return markup. Unit tests therefore cover the whole
//! normalization and rendering path without network or filesystem access.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | Fetches the CSV export (URL or local path) into raw rows |
//! | [`text`] | Label normalization shared by aliasing and dues matching |
//! | [`schema`] | Canonical field set, column aliasing, header detection |
//! | [`slug`] | Unique, URL-safe identifier assignment per record |
//! | [`dues`] | Three-way dues classification (paid / unpaid / unknown) |
//! | [`roster`] | Stage 1: raw rows → normalized, identified records |
//! | [`render`] | Maud templates for profile and directory pages |
//! | [`qr`] | QR PNG generation for each record's public URL |
//! | [`gate`] | SHA-256 hashing for the directory access gate |
//! | [`generate`] | Stage 2: write the output tree and sweep stale artifacts |
//! | [`config`] | `roster.toml` loading, env overrides, validation, CSS vars |
//! | [`types`] | Shared record/roster types serialized by `check --json` |
//! | [`output`] | CLI output formatting: tree-style display of results |
//!
//! # Design Decisions
//!
//! ## The messy part is the input, not the output
//!
//! Real exports carry preamble rows above the header, accented and reworded
//! column titles, ragged short rows, and free-text dues cells. All tolerance
//! lives at the edge: [`schema`] and [`dues`] normalize aggressively, and
//! past that point every record has every canonical field, a unique slug,
//! and a stored classification. Nothing downstream re-derives any of it; in
//! particular the dues badge and the directory filter read the same stored
//! value, so they cannot disagree.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and interpolation is auto-escaped. That last point
//! matters here: every rendered value is untrusted spreadsheet text typed by
//! a member into a form.
//!
//! ## The output directory is a cache
//!
//! There is no build state besides the output tree itself. Each run writes
//! the full site, then deletes any profile page or QR image whose filename
//! stem is not a current slug (the directory page is always kept). Rebuilds
//! from the same source are byte-identical, so deploys are idempotent.
//!
//! ## The access gate is a deterrent, not security
//!
//! The directory can be "locked" behind a shared code. Only the code's
//! SHA-256 digest ships with the page; the client hashes input and compares.
//! Everything — digest included — is still in the downloaded file. This
//! keeps casual visitors out of the member list and nothing more, and the
//! configuration docs say so.

pub mod config;
pub mod dues;
pub mod gate;
pub mod generate;
pub mod output;
pub mod qr;
pub mod render;
pub mod roster;
pub mod schema;
pub mod slug;
pub mod source;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
