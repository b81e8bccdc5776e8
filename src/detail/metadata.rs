//! Page metadata for protocol detail pages
//!
//! Mirrors what the site puts in `<head>`: title, description, keywords and
//! the open-graph / twitter card used when a detail link is shared.

use super::slug::slug;
use crate::catalog::CatalogError;
use crate::model::ProtocolRecord;
use serde::Serialize;
use std::fmt;

pub const SITE_NAME: &str = "A2A Protocol Directory";

/// Image used when a listing has no logo
pub const DEFAULT_LOGO: &str = "/a2a_protocol.png";

const DESCRIPTION_LIMIT: usize = 160;
const SHARE_DESCRIPTION_LIMIT: usize = 200;

/// Card shown when a detail link is shared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareCard {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: &'static str,
    pub image_url: String,
    pub image_width: u32,
    pub image_height: u32,
    pub image_alt: String,
    pub locale: &'static str,
    pub twitter_card: &'static str,
}

/// `<head>` content for a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub share: Option<ShareCard>,
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

impl PageMetadata {
    /// Metadata for an approved listing
    #[must_use]
    pub fn for_protocol(record: &ProtocolRecord, base_url: &str) -> Self {
        let title = format!("{} | {SITE_NAME}", record.name);
        let tags = record.tag_list().join(", ");
        let image_url = record.logo_url.clone().unwrap_or_else(|| DEFAULT_LOGO.to_string());

        Self {
            title: title.clone(),
            description: truncate(&record.description, DESCRIPTION_LIMIT),
            keywords: Some(format!(
                "{}, {tags}, A2A protocol, agent-to-agent protocol",
                record.name
            )),
            share: Some(ShareCard {
                title,
                description: truncate(&record.description, SHARE_DESCRIPTION_LIMIT),
                url: format!("{}/protocols/{}", base_url.trim_end_matches('/'), slug(&record.name)),
                site_name: SITE_NAME,
                image_url,
                image_width: 1200,
                image_height: 630,
                image_alt: format!("{} Protocol", record.name),
                locale: "en_US",
                twitter_card: "summary_large_image",
            }),
        }
    }

    /// Metadata when the slug names no approved listing
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            title: format!("Protocol Not Found | {SITE_NAME}"),
            description: "The requested protocol could not be found or is pending approval.".to_string(),
            keywords: None,
            share: None,
        }
    }

    /// Generic metadata used when the store could not be asked
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            title: format!("Protocol Details | {SITE_NAME}"),
            description: "Explore detailed information about this A2A protocol including features, documentation, and implementation details.".to_string(),
            keywords: None,
            share: None,
        }
    }

    /// Metadata for the outcome of a detail lookup
    #[must_use]
    pub fn from_lookup(lookup: &Result<ProtocolRecord, CatalogError>, base_url: &str) -> Self {
        match lookup {
            Ok(record) => Self::for_protocol(record, base_url),
            Err(CatalogError::NotFound(_) | CatalogError::Ambiguous { .. }) => Self::not_found(),
            Err(CatalogError::Fetch(_)) => Self::fallback(),
        }
    }
}

impl fmt::Display for PageMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "title: {}", self.title)?;
        writeln!(f, "description: {}", self.description)?;
        if let Some(keywords) = &self.keywords {
            writeln!(f, "keywords: {keywords}")?;
        }
        if let Some(share) = &self.share {
            writeln!(f, "og:url: {}", share.url)?;
            writeln!(f, "og:image: {} ({}x{})", share.image_url, share.image_width, share.image_height)?;
            writeln!(f, "twitter:card: {}", share.twitter_card)?;
        }
        Ok(())
    }
}
