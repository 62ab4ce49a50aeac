use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// One displayable quote with its supporting text.
///
/// All fields are trimmed; optional fields are empty strings when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRecord {
    pub quote: String,
    pub author: String,
    pub meaning: String,
    pub instruction: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Record as it appears in the quote file, before validation.
#[derive(Debug, Deserialize)]
pub(crate) struct RawQuote {
    #[serde(default)]
    quote: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    meaning: Option<String>,
    #[serde(default)]
    instruction: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Option<RawTags>,
}

/// Tags arrive either as one comma-separated string or as a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawTags {
    One(String),
    Many(Vec<String>),
}

impl RawTags {
    fn normalize(self) -> Vec<String> {
        let parts: Vec<String> = match self {
            RawTags::One(s) => s.split(',').map(str::to_string).collect(),
            RawTags::Many(list) => list,
        };
        normalize_tags(parts)
    }
}

/// Trim each tag and drop the empty ones.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn clean(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

impl QuoteRecord {
    /// Validate a raw record. Returns `None` when the quote text is empty.
    pub(crate) fn from_raw(raw: RawQuote) -> Option<Self> {
        let quote = clean(raw.quote);
        if quote.is_empty() {
            return None;
        }

        Some(QuoteRecord {
            quote,
            author: clean(raw.author),
            meaning: clean(raw.meaning),
            instruction: clean(raw.instruction),
            category: clean(raw.category),
            tags: raw.tags.map(RawTags::normalize).unwrap_or_default(),
        })
    }

    /// Identity used to recognise a quote across runs: the quote text with
    /// whitespace runs collapsed. Distinct records with the same text collide.
    pub fn identity(&self) -> String {
        WHITESPACE_RUN
            .replace_all(self.quote.trim(), " ")
            .into_owned()
    }

    pub fn is_valid(&self) -> bool {
        !self.quote.trim().is_empty()
    }
}

#[cfg(test)]
impl QuoteRecord {
    pub fn new(quote: impl Into<String>) -> Self {
        QuoteRecord {
            quote: quote.into().trim().to_string(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into().trim().to_string();
        self
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = meaning.into().trim().to_string();
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into().trim().to_string();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into().trim().to_string();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags);
        self
    }
}
