//! Identifier assignment: URL- and filesystem-safe slugs per record.
//!
//! A record's slug is the filename stem of its profile page and QR image, and
//! the path segment in the public URL the QR code encodes. Two guarantees:
//!
//! - **Safe**: output contains only `[a-z0-9-]`.
//! - **Unique and stable**: within one build, duplicates get `-2`, `-3`, … in
//!   source row order, so the same input rows always yield the same slugs.
//!
//! Diacritics are folded through an explicit substitution table rather than a
//! general Unicode decomposition: the roster is French-language and the table
//! covers every accent that appears in French names. Anything the table does
//! not cover is treated as a separator, same as punctuation.

use std::collections::HashMap;

/// Slug used when the name fields produce nothing usable.
pub const FALLBACK: &str = "member";

const DIACRITICS: &[(char, char)] = &[
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('à', 'a'),
    ('â', 'a'),
    ('ä', 'a'),
    ('î', 'i'),
    ('ï', 'i'),
    ('ô', 'o'),
    ('ö', 'o'),
    ('ù', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
    ('ç', 'c'),
];

fn fold(c: char) -> char {
    DIACRITICS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

/// Derive a slug base from free-form name text.
///
/// Lower-cases, folds French diacritics, replaces every maximal run of
/// characters outside `[a-z0-9]` with a single hyphen, and strips hyphens at
/// the edges. Empty input (or input that is all separators) yields
/// [`FALLBACK`].
pub fn slugify(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for c in raw.trim().chars().flat_map(char::to_lowercase).map(fold) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(c);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    if out.is_empty() {
        FALLBACK.to_string()
    } else {
        out
    }
}

/// Hands out collision-free slugs in source row order.
///
/// The first occurrence of a base keeps the bare token; every later
/// occurrence appends its running count: `jean-dupont`, `jean-dupont-2`, …
#[derive(Debug, Default)]
pub struct SlugAssigner {
    seen: HashMap<String, u32>,
}

impl SlugAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one occurrence of `base` and return its unique slug.
    pub fn assign(&mut self, base: &str) -> String {
        let count = self.seen.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base.to_string()
        } else {
            format!("{base}-{count}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_name() {
        assert_eq!(slugify("Jean Dupont"), "jean-dupont");
    }

    #[test]
    fn folds_french_diacritics() {
        assert_eq!(slugify("Éloïse Lefèvre"), "eloise-lefevre");
        assert_eq!(slugify("François Müller"), "francois-muller");
    }

    #[test]
    fn punctuation_runs_become_one_hyphen() {
        assert_eq!(slugify("D'Artagnan,  (fils)"), "d-artagnan-fils");
        assert_eq!(slugify("--Jean--"), "jean");
    }

    #[test]
    fn untabled_characters_act_as_separators() {
        assert_eq!(slugify("Muñoz"), "mu-oz");
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(slugify(""), FALLBACK);
        assert_eq!(slugify("   "), FALLBACK);
        assert_eq!(slugify("!!!"), FALLBACK);
    }

    #[test]
    fn duplicates_get_numeric_suffixes_in_order() {
        let mut assigner = SlugAssigner::new();
        assert_eq!(assigner.assign("jean-dupont"), "jean-dupont");
        assert_eq!(assigner.assign("jean-dupont"), "jean-dupont-2");
        assert_eq!(assigner.assign("jean-dupont"), "jean-dupont-3");
        assert_eq!(assigner.assign("marie-curie"), "marie-curie");
    }

    #[test]
    fn assignment_is_deterministic() {
        let bases = ["a", "b", "a", "a", "b"];
        let run = |bases: &[&str]| -> Vec<String> {
            let mut assigner = SlugAssigner::new();
            bases.iter().map(|b| assigner.assign(b)).collect()
        };
        assert_eq!(run(&bases), run(&bases));
        assert_eq!(run(&bases), vec!["a", "b", "a-2", "a-3", "b-2"]);
    }

    #[test]
    fn assigned_slugs_are_pairwise_distinct() {
        let mut assigner = SlugAssigner::new();
        let slugs: Vec<String> = ["x", "x", "y", "x", "y"]
            .iter()
            .map(|b| assigner.assign(b))
            .collect();
        for (i, a) in slugs.iter().enumerate() {
            for b in &slugs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
