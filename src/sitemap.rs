//! Sitemap and robots.txt exports
//!
//! The sitemap lists the static pages plus one entry per approved listing.
//! If the store cannot be read the listing entries are skipped and the
//! static pages are still exported.

use crate::catalog::fetch_approved;
use crate::detail::slug;
use crate::store::RecordStore;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{self, Write};
use tracing::error;

/// `<changefreq>` values used by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const STATIC_ROUTES: [(&str, ChangeFrequency, f32); 6] = [
    ("", ChangeFrequency::Daily, 1.0),
    ("/protocols", ChangeFrequency::Daily, 0.9),
    ("/list-your-protocol", ChangeFrequency::Weekly, 0.8),
    ("/about", ChangeFrequency::Monthly, 0.7),
    ("/terms", ChangeFrequency::Monthly, 0.5),
    ("/privacy", ChangeFrequency::Monthly, 0.3),
];

const DISALLOWED: [&str; 3] = ["/api/", "/admin/", "/submission-success"];

/// Static pages followed by every approved listing
#[must_use]
pub fn entries<S: RecordStore + ?Sized>(store: &S, base_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');

    let mut entries: Vec<SitemapEntry> = STATIC_ROUTES
        .iter()
        .map(|(path, change_frequency, priority)| SitemapEntry {
            url: format!("{base}{path}"),
            last_modified: now,
            change_frequency: *change_frequency,
            priority: *priority,
        })
        .collect();

    match fetch_approved(store) {
        Ok(records) => entries.extend(records.iter().map(|record| SitemapEntry {
            url: format!("{base}/protocols/{}", slug(&record.name)),
            last_modified: record.last_modified(),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        })),
        Err(err) => error!(error = %err, "error fetching protocols for sitemap"),
    }

    entries
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render entries as a sitemaps.org `urlset`
///
/// # Errors
///
/// Returns `fmt::Error` only if writing to the buffer fails.
pub fn render_xml(entries: &[SitemapEntry]) -> Result<String, fmt::Error> {
    let mut xml = String::new();
    writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(xml, r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#)?;
    for entry in entries {
        writeln!(xml, "  <url>")?;
        writeln!(xml, "    <loc>{}</loc>", xml_escape(&entry.url))?;
        writeln!(
            xml,
            "    <lastmod>{}</lastmod>",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        writeln!(xml, "    <changefreq>{}</changefreq>", entry.change_frequency)?;
        writeln!(xml, "    <priority>{:.1}</priority>", entry.priority)?;
        writeln!(xml, "  </url>")?;
    }
    writeln!(xml, "</urlset>")?;
    Ok(xml)
}

/// robots.txt pointing crawlers at the sitemap
#[must_use]
pub fn robots(base_url: &str) -> String {
    let mut text = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED {
        text.push_str("Disallow: ");
        text.push_str(path);
        text.push('\n');
    }
    text.push_str("\nSitemap: ");
    text.push_str(base_url.trim_end_matches('/'));
    text.push_str("/sitemap.xml\n");
    text
}
