//! HTML rendering for profile and directory pages.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic escaping — roster cells
//! are untrusted spreadsheet text (names, addresses, whatever a member typed
//! into a form), so every interpolation is contextually escaped by
//! construction rather than by remembering to call an escape helper.
//!
//! ## Generated Pages
//!
//! - **Profile page** (`{pages_dir}/{slug}.html`): field table, dues badge,
//!   QR image with download link, contact footer
//! - **Directory page** (`{pages_dir}/index.html`): searchable member table
//!   with a dues filter facet and the optional access gate
//!
//! Rendering is pure — no I/O — so these functions are unit-tested on their
//! output strings and [`crate::generate`] owns all filesystem effects.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time (`static/style.css`,
//! `static/directory.js`); color custom properties from the config are
//! prepended to the CSS by the generate stage. The directory script reads
//! the gate digest from `<body data-access-hash>`.

use crate::config::SiteConfig;
use crate::dues::{self, DuesStatus};
use crate::schema::Field;
use crate::types::{Record, Roster};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const JS: &str = include_str!("../static/directory.js");

/// Base styles, before config colors are prepended.
pub const CSS_STATIC: &str = include_str!("../static/style.css");

/// Renders the base HTML document structure.
///
/// `gate_hash` lands on `<body data-access-hash>` where the directory script
/// picks it up; `noindex` is set on the directory page only.
fn base_document(
    title: &str,
    css: &str,
    noindex: bool,
    gate_hash: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if noindex {
                    meta name="robots" content="noindex";
                }
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body data-access-hash=[gate_hash] {
                (content)
            }
        }
    }
}

/// Dues badge: the one place classification becomes pixels.
///
/// Paid and Unpaid render fixed labels; Unknown shows the original cell text
/// (or an em dash when empty) so an odd value stays visible instead of being
/// flattened into a yes/no.
pub fn dues_badge(record: &Record) -> Markup {
    match record.dues {
        DuesStatus::Paid => html! { span.badge.badge-paid { "Paid" } },
        DuesStatus::Unpaid => html! { span.badge.badge-unpaid { "Unpaid" } },
        DuesStatus::Unknown => {
            let shown = dues::unknown_display(record.get(Field::Dues));
            html! { span.badge.badge-unknown { (shown) } }
        }
    }
}

fn field_row(label: &str, value: Markup) -> Markup {
    html! {
        tr {
            th { (label) }
            td { (value) }
        }
    }
}

/// Renders one member's profile page.
pub fn profile_page(record: &Record, config: &SiteConfig, css: &str) -> Markup {
    let name = record.display_name();
    let title = format!("{} · {}", name, config.site.title);
    let qr_rel = format!("../{}/{}.png", config.output.qr_dir, record.slug);
    let email = record.get(Field::Email);

    let content = html! {
        div.card {
            h1 { "Member profile" }
            p { small { (config.site.title) } }
            table {
                tbody {
                    (field_row(Field::LastName.label(), html! { (record.get(Field::LastName)) }))
                    (field_row(Field::FirstName.label(), html! { (record.get(Field::FirstName)) }))
                    (field_row(Field::PostalAddress.label(), html! { (record.get(Field::PostalAddress)) }))
                    (field_row(Field::Phone.label(), html! { (record.get(Field::Phone)) }))
                    (field_row(Field::Email.label(), html! {
                        @if !email.is_empty() {
                            a href={ "mailto:" (email) } { (email) }
                        }
                    }))
                    (field_row("Vehicle", html! { (record.vehicle()) }))
                    (field_row(Field::Year.label(), html! { (record.get(Field::Year)) }))
                    (field_row(Field::PlateNumber.label(), html! { (record.get(Field::PlateNumber)) }))
                    (field_row(Field::OtherClub.label(), html! { (record.get(Field::OtherClub)) }))
                    (field_row(Field::Insurance.label(), html! { (record.get(Field::Insurance)) }))
                    (field_row(Field::Dues.label(), dues_badge(record)))
                    (field_row(Field::OtherVehicle.label(), html! { (record.get(Field::OtherVehicle)) }))
                    (field_row("QR code", html! {
                        div.qr {
                            img src=(qr_rel) alt={ "QR " (name) };
                            div {
                                a href=(qr_rel) download { "Download the QR code" }
                            }
                        }
                    }))
                }
            }
            @if let Some(contact) = config.site.contact_email.as_deref() {
                p.footer {
                    "Club contact: "
                    a href={ "mailto:" (contact) } { (contact) }
                }
            }
        }
    };

    base_document(&title, css, false, None, content)
}

fn directory_row(record: &Record) -> Markup {
    let name = record.display_name();
    let vehicle = record.vehicle();
    let href = format!("{}.html", record.slug);

    html! {
        tr data-name=(name) data-vehicle=(vehicle) data-dues=(record.dues.facet()) {
            td { a href=(href) { (name) } }
            td { (vehicle) }
            td { (dues_badge(record)) }
            td { a href=(href) { "Open" } }
        }
    }
}

/// Renders the directory/index page.
///
/// `gate_hash` is the SHA-256 digest of the access code, or `None` when the
/// directory is not gated (no gate markup is emitted at all in that case).
pub fn directory_page(
    roster: &Roster,
    config: &SiteConfig,
    css: &str,
    gate_hash: Option<&str>,
) -> Markup {
    let content = html! {
        @if gate_hash.is_some() {
            div #gate {
                div.gate-card {
                    h2 { "Restricted access" }
                    p { "Enter the access code to open the member directory." }
                    div.gate-row {
                        input #gate-code type="password" placeholder="Access code";
                        button #gate-go { "Enter" }
                    }
                    div #gate-error { "Incorrect code." }
                }
            }
        }
        div.container.protected {
            div.bar {
                h1 { (config.site.title) }
                @if let Some(link) = config.sheet_link() {
                    a.btn href=(link) target="_blank" rel="noopener" { "Open the sheet" }
                }
            }
            div.top {
                input #q type="search" placeholder="Search by name or vehicle…";
                div.filters {
                    label {
                        input type="radio" name="dues" value="all" checked;
                        " All"
                    }
                    label {
                        input type="radio" name="dues" value="paid";
                        " Dues paid"
                    }
                    label {
                        input type="radio" name="dues" value="unpaid";
                        " Dues unpaid"
                    }
                }
                div.count {
                    span #count { "0" }
                    "/"
                    span #total { "0" }
                    " members"
                }
            }
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Vehicle" }
                        th { "Dues" }
                        th {}
                    }
                }
                tbody #rows {
                    @for record in &roster.records {
                        (directory_row(record))
                    }
                }
            }
        }
        script { (PreEscaped(JS)) }
    };

    base_document(&config.site.title, css, true, gate_hash, content)
}
