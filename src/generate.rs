//! Site generation: render, write, sweep.
//!
//! The final pipeline stage. Takes a normalized [`Roster`] and writes the
//! complete output tree:
//!
//! ```text
//! site/
//! ├── members/
//! │   ├── index.html             # Directory page (search, facet, gate)
//! │   ├── jean-dupont.html       # One profile page per record
//! │   └── eloise-lefevre.html
//! └── qrs/
//!     ├── jean-dupont.png        # One QR image per record
//!     └── eloise-lefevre.png
//! ```
//!
//! Each QR encodes `{base_url}/{pages_dir}/{slug}.html` — the eventual public
//! address of that record's page.
//!
//! ## Cleanup
//!
//! The output tree is a cache that must converge to exactly the current
//! record set: after writing, any profile page or QR image whose filename
//! stem is not a current slug is deleted. `index.html` is always exempt.
//! Records removed from the spreadsheet therefore disappear from the site on
//! the next build, with no state carried between runs beyond the tree itself.
//!
//! Writes are idempotent: rebuilding from the same source produces a
//! byte-identical tree.

use crate::config::{self, SiteConfig};
use crate::gate;
use crate::qr;
use crate::render;
use crate::types::Roster;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("QR error: {0}")]
    Qr(#[from] qr::QrError),
}

/// What a build pass wrote and swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub profiles: usize,
    pub qr_codes: usize,
    pub removed: usize,
}

/// Render and write the full site, then sweep stale artifacts.
pub fn generate(
    roster: &Roster,
    config: &SiteConfig,
    out_dir: &Path,
) -> Result<BuildStats, GenerateError> {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        render::CSS_STATIC
    );

    let pages_dir = out_dir.join(&config.output.pages_dir);
    let qr_dir = out_dir.join(&config.output.qr_dir);
    fs::create_dir_all(&pages_dir)?;
    fs::create_dir_all(&qr_dir)?;

    let base_url = config.site.base_url.trim().trim_end_matches('/');
    for record in &roster.records {
        let public_url = format!(
            "{base_url}/{}/{}.html",
            config.output.pages_dir, record.slug
        );
        qr::write_png(
            &public_url,
            &qr_dir.join(format!("{}.png", record.slug)),
            &config.qr,
        )?;

        let page = render::profile_page(record, config, &css);
        fs::write(
            pages_dir.join(format!("{}.html", record.slug)),
            page.into_string(),
        )?;
    }

    let gate_hash = config.site.access_code.as_deref().map(gate::code_hash);
    let index = render::directory_page(roster, config, &css, gate_hash.as_deref());
    fs::write(pages_dir.join("index.html"), index.into_string())?;

    let removed = clean_stale(&pages_dir, &qr_dir, roster)?;
    Ok(BuildStats {
        profiles: roster.records.len(),
        qr_codes: roster.records.len(),
        removed,
    })
}

/// Delete artifacts whose identifier is no longer in the roster.
fn clean_stale(pages_dir: &Path, qr_dir: &Path, roster: &Roster) -> std::io::Result<usize> {
    let live: HashSet<&str> = roster.records.iter().map(|r| r.slug.as_str()).collect();
    let mut removed = 0;
    removed += sweep(pages_dir, "html", |stem| {
        stem == "index" || live.contains(stem)
    })?;
    removed += sweep(qr_dir, "png", |stem| live.contains(stem))?;
    Ok(removed)
}

/// Remove `*.{ext}` files in `dir` whose stem fails the `keep` predicate.
///
/// Only the matching extension is touched; anything else a deploy drops in
/// the directory is left alone.
fn sweep(dir: &Path, ext: &str, keep: impl Fn(&str) -> bool) -> std::io::Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if !keep(stem) {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_roster;
    use tempfile::TempDir;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        // Small modules keep QR encoding cheap in tests.
        config.qr.module_size = 1;
        config
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_profiles_index_and_qrs() {
        let tmp = TempDir::new().unwrap();
        let roster = make_roster();
        let stats = generate(&roster, &test_config(), tmp.path()).unwrap();

        assert_eq!(stats.profiles, roster.records.len());
        assert_eq!(stats.removed, 0);

        let pages = tmp.path().join("members");
        assert!(pages.join("index.html").exists());
        for record in &roster.records {
            assert!(pages.join(format!("{}.html", record.slug)).exists());
            assert!(
                tmp.path()
                    .join("qrs")
                    .join(format!("{}.png", record.slug))
                    .exists()
            );
        }
    }

    #[test]
    fn stale_artifacts_are_swept_and_index_survives() {
        let tmp = TempDir::new().unwrap();
        let config = test_config();

        let mut roster = make_roster();
        generate(&roster, &config, tmp.path()).unwrap();

        // Drop the last member and rebuild.
        let gone = roster.records.pop().unwrap();
        let stats = generate(&roster, &config, tmp.path()).unwrap();
        assert_eq!(stats.removed, 2); // one page, one QR

        let pages = tmp.path().join("members");
        assert!(!pages.join(format!("{}.html", gone.slug)).exists());
        assert!(
            !tmp.path()
                .join("qrs")
                .join(format!("{}.png", gone.slug))
                .exists()
        );
        assert!(pages.join("index.html").exists());
    }

    #[test]
    fn page_set_converges_to_slug_set() {
        let tmp = TempDir::new().unwrap();
        let config = test_config();
        let roster = make_roster();

        // Seed an orphan from a previous "run".
        let pages = tmp.path().join("members");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("ghost-member.html"), "stale").unwrap();
        fs::write(pages.join("notes.txt"), "unrelated").unwrap();

        generate(&roster, &config, tmp.path()).unwrap();

        let mut expected: Vec<String> = roster
            .records
            .iter()
            .map(|r| format!("{}.html", r.slug))
            .collect();
        expected.push("index.html".to_string());
        expected.push("notes.txt".to_string()); // non-.html is left alone
        expected.sort();
        assert_eq!(dir_entries(&pages), expected);
    }

    #[test]
    fn rebuild_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let config = test_config();
        let roster = make_roster();

        generate(&roster, &config, tmp.path()).unwrap();
        let first = fs::read(tmp.path().join("members/index.html")).unwrap();
        let first_qr = fs::read(
            tmp.path()
                .join("qrs")
                .join(format!("{}.png", roster.records[0].slug)),
        )
        .unwrap();

        generate(&roster, &config, tmp.path()).unwrap();
        let second = fs::read(tmp.path().join("members/index.html")).unwrap();
        let second_qr = fs::read(
            tmp.path()
                .join("qrs")
                .join(format!("{}.png", roster.records[0].slug)),
        )
        .unwrap();

        assert_eq!(first, second);
        assert_eq!(first_qr, second_qr);
    }

    #[test]
    fn gate_digest_embedded_when_code_configured() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config();
        config.site.access_code = Some("1234".to_string());

        generate(&make_roster(), &config, tmp.path()).unwrap();

        let index = fs::read_to_string(tmp.path().join("members/index.html")).unwrap();
        // Digest of "1234", never the code itself in any attribute.
        assert!(index.contains("03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4"));
        assert!(!index.contains(r#"data-access-hash="1234""#));
    }

    #[test]
    fn qr_encodes_the_public_profile_url() {
        // The URL layout is {base_url}/{pages_dir}/{slug}.html; trailing
        // slash on base_url must not double up.
        let mut config = test_config();
        config.site.base_url = "https://club.example/".to_string();

        let tmp = TempDir::new().unwrap();
        let roster = make_roster();
        generate(&roster, &config, tmp.path()).unwrap();

        // Re-encode the expected URL with identical parameters; byte-equal
        // PNGs mean identical payloads.
        let expected = tmp.path().join("expected.png");
        qr::write_png(
            &format!("https://club.example/members/{}.html", roster.records[0].slug),
            &expected,
            &config.qr,
        )
        .unwrap();
        let actual = tmp
            .path()
            .join("qrs")
            .join(format!("{}.png", roster.records[0].slug));
        assert_eq!(fs::read(&actual).unwrap(), fs::read(&expected).unwrap());
    }
}
