//! Output formatting for CLI display
//!
//! Formatting helpers return strings so callers decide where they go; the
//! `success`, `warning` and `error` helpers print directly.

use crate::catalog::{CatalogFilter, CatalogView, EmptyState, PageItem, TagIndex};
use crate::model::ProtocolRecord;
use colored::Colorize;

/// Tag chips shown on a card before collapsing into "+N more"
pub const CARD_TAG_LIMIT: usize = 3;

/// Tags a card shows, and how many were left out
#[must_use]
pub fn card_tags(record: &ProtocolRecord) -> (Vec<&str>, usize) {
    let mut tags = record.tag_list();
    let hidden = tags.len().saturating_sub(CARD_TAG_LIMIT);
    tags.truncate(CARD_TAG_LIMIT);
    (tags, hidden)
}

fn chip(tag: &str, selected: bool) -> String {
    let label = format!("[{tag}]");
    if selected {
        label.black().on_cyan().to_string()
    } else {
        label.cyan().to_string()
    }
}

/// The facet bar, selected tags highlighted
#[must_use]
pub fn tag_chips(index: &TagIndex, filter: &CatalogFilter) -> String {
    index
        .iter()
        .map(|tag| chip(tag, filter.is_selected(tag)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One catalog card
#[must_use]
pub fn protocol_card(record: &ProtocolRecord, quiet: bool) -> String {
    if quiet {
        return record.name.clone();
    }

    let (tags, hidden) = card_tags(record);
    let mut chips: Vec<String> = tags.iter().map(|tag| chip(tag, false)).collect();
    if hidden > 0 {
        chips.push(format!("+{hidden} more").dimmed().to_string());
    }

    let mut card = format!(
        "  {} {}\n    {}",
        record.name.bold(),
        format!("by {}", record.created_by).dimmed(),
        record.description
    );
    if !chips.is_empty() {
        card.push_str("\n    ");
        card.push_str(&chips.join(" "));
    }
    card
}

/// Pagination bar with the current page highlighted
#[must_use]
pub fn page_bar(view: &CatalogView<'_>) -> String {
    let mut parts = Vec::with_capacity(view.page_bar.len() + 2);
    let previous = "< Previous";
    parts.push(if view.has_previous {
        previous.to_string()
    } else {
        previous.dimmed().to_string()
    });

    for item in &view.page_bar {
        parts.push(match item {
            PageItem::Page(page) if *page == view.page => format!("[{page}]").bold().to_string(),
            other => other.to_string(),
        });
    }

    let next = "Next >";
    parts.push(if view.has_next {
        next.to_string()
    } else {
        next.dimmed().to_string()
    });
    parts.join(" ")
}

/// Message shown in place of cards
#[must_use]
pub fn empty_state(state: EmptyState) -> String {
    state.message().dimmed().to_string()
}

/// Full detail view with the features list
#[must_use]
pub fn protocol_detail(record: &ProtocolRecord) -> String {
    let mut lines = vec![
        record.name.bold().to_string(),
        format!("by {}", record.created_by).dimmed().to_string(),
        String::new(),
        record.description.clone(),
    ];

    let features = record.feature_list();
    if !features.is_empty() {
        lines.push(String::new());
        lines.push("Features".underline().to_string());
        lines.extend(features.iter().map(|feature| format!("  • {feature}")));
    }

    let tags = record.tag_list();
    if !tags.is_empty() {
        lines.push(String::new());
        lines.push(tags.iter().map(|tag| chip(tag, false)).collect::<Vec<_>>().join(" "));
    }

    let links = [
        ("GitHub", &record.github_url),
        ("Website", &record.website_link),
        ("Contact", &record.contact_email),
    ];
    let links: Vec<String> = links
        .iter()
        .filter_map(|(label, value)| value.as_ref().map(|v| format!("  {label}: {}", v.blue())))
        .collect();
    if !links.is_empty() {
        lines.push(String::new());
        lines.extend(links);
    }

    lines.push(String::new());
    lines.push(
        format!("Listed {}", record.created_at.format("%B %-d, %Y"))
            .dimmed()
            .to_string(),
    );
    lines.join("\n")
}

/// One line per suggested listing
#[must_use]
pub fn recommendation(record: &ProtocolRecord, slug: &str) -> String {
    format!("  {} {}", record.name.bold(), format!("({slug})").dimmed())
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", "❌".red(), message);
}
