use once_cell::sync::Lazy;
use regex::Regex;

use crate::quote::QuoteRecord;

static TRAILING_SLASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/+$").expect("trailing slash pattern is valid"));

/// Title used for the native share sheet
pub const SHARE_TITLE: &str = "Calm Down Quote";

const MEANING_LABEL: &str = "Meaning";
const INSTRUCTION_LABEL: &str = "Try this";
const CATEGORY_LABEL: &str = "Category";
const TAGS_LABEL: &str = "Tags";

/// Where shared text says it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    site_name: String,
    site_url: String,
}

impl Attribution {
    /// Trailing slashes on `site_url` collapse to one.
    pub fn new(site_name: impl Into<String>, site_url: impl Into<String>) -> Self {
        let site_url = site_url.into();
        Attribution {
            site_name: site_name.into().trim().to_string(),
            site_url: TRAILING_SLASHES.replace(site_url.trim(), "/").into_owned(),
        }
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Preview image published next to the site, for pin-style channels.
    pub fn preview_image_url(&self) -> String {
        if self.site_url.is_empty() {
            String::new()
        } else if self.site_url.ends_with('/') {
            format!("{}preview.png", self.site_url)
        } else {
            format!("{}/preview.png", self.site_url)
        }
    }

    fn block(&self) -> Option<String> {
        let mut lines = Vec::with_capacity(2);
        if !self.site_name.is_empty() {
            lines.push(format!("Shared from {}", self.site_name));
        }
        if !self.site_url.is_empty() {
            lines.push(self.site_url.clone());
        }
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

/// Title, text and link handed to a native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(text: String, attribution: &Attribution) -> Self {
        SharePayload {
            title: SHARE_TITLE.to_string(),
            text,
            url: attribution.site_url().to_string(),
        }
    }
}

fn labeled(label: &str, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(format!("{}: {}", label, value))
    }
}

/// Canonical share text for a quote.
///
/// ```text
/// <quote>
/// — <author>
///
/// Meaning: <meaning>
///
/// Try this: <instruction>
///
/// Category: <category>
///
/// Tags: <a>, <b>
///
/// Shared from <site name>
/// <site url>
/// ```
///
/// Absent fields drop their whole section, separator included. An empty
/// quote gives an empty string: there is nothing to share.
pub fn format_share_text(record: &QuoteRecord, attribution: &Attribution) -> String {
    let quote = record.quote.trim();
    if quote.is_empty() {
        return String::new();
    }

    let mut head = quote.to_string();
    let author = record.author.trim();
    if !author.is_empty() {
        head.push_str("\n— ");
        head.push_str(author);
    }

    let tags: Vec<&str> = record
        .tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    let mut sections = vec![head];
    sections.extend(labeled(MEANING_LABEL, &record.meaning));
    sections.extend(labeled(INSTRUCTION_LABEL, &record.instruction));
    sections.extend(labeled(CATEGORY_LABEL, &record.category));
    sections.extend(labeled(TAGS_LABEL, &tags.join(", ")));
    sections.extend(attribution.block());

    sections.join("\n\n")
}
