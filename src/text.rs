//! Label and value normalization.
//!
//! One normalization function feeds both the column-alias lookup and the
//! dues-status vocabularies, so a label that matches in one place matches in
//! the other. The rules mirror what spreadsheet exports actually throw at us:
//! mixed casing, stray padding, accented French labels, and the curly
//! apostrophe that Google Sheets likes to substitute for `'`.
//!
//! The function is pure and locale-independent: the same input produces the
//! same output on every machine and every run.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize free-form label text for vocabulary matching.
///
/// - trims leading/trailing whitespace
/// - lower-cases
/// - NFD-decomposes and drops combining marks, so `é` → `e`
/// - maps the typographic apostrophe U+2019 to ASCII `'`
/// - collapses internal whitespace runs to a single space
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(input: &str) -> String {
    let stripped: String = input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .collect();
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Cotisation  "), "cotisation");
        assert_eq!(normalize("NOM"), "nom");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Téléphone"), "telephone");
        assert_eq!(normalize("Prénom"), "prenom");
        assert_eq!(normalize("Année"), "annee");
        assert_eq!(normalize("Assuré chez BEHVA"), "assure chez behva");
    }

    #[test]
    fn maps_curly_apostrophe() {
        assert_eq!(
            normalize("Numéro d\u{2019}immatriculation"),
            "numero d'immatriculation"
        );
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("adresse   postale\t(rue)"), "adresse postale (rue)");
    }

    #[test]
    fn idempotent() {
        for raw in ["Téléphone", "  A   Jour ", "Numéro d\u{2019}immatriculation", ""] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
