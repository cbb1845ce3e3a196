//! Search Provider capability for SKZ Browser.
//!
//! There is no real backend: the shipped implementation synthesizes a
//! deterministic result set from the query string. A network-backed
//! provider can be substituted behind the same trait without touching the
//! result pager or the view selector.

use crate::types::search::SearchResult;

/// Number of synthetic results generated per query.
pub const SYNTHETIC_RESULT_COUNT: usize = 50;

/// Trait defining the search capability.
pub trait SearchProvider {
    fn search(&self, query: &str) -> Vec<SearchResult>;
}

/// Domains the synthetic results cycle through.
const DOMAINS: [&str; 5] = [
    "en.wikipedia.org",
    "example.com",
    "habr.com",
    "stackoverflow.com",
    "docs.rs",
];

/// Search provider that derives results from the query text alone.
pub struct SyntheticSearchProvider {
    result_count: usize,
}

impl SyntheticSearchProvider {
    pub fn new() -> Self {
        Self {
            result_count: SYNTHETIC_RESULT_COUNT,
        }
    }

    /// Provider generating a custom number of results, for tests.
    pub fn with_result_count(result_count: usize) -> Self {
        Self { result_count }
    }
}

impl Default for SyntheticSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProvider for SyntheticSearchProvider {
    /// Generates results 1:1 with a running index: ids are 1-based,
    /// titles and snippets cycle through templates referencing the query,
    /// and URLs embed the percent-encoded query. An empty or whitespace
    /// query yields an empty set; equal queries yield equal sets.
    fn search(&self, query: &str) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let encoded = encode_query(query);
        (0..self.result_count)
            .map(|i| {
                let domain = DOMAINS[i % DOMAINS.len()];
                let (title, snippet) = match i % 3 {
                    0 => (
                        format!("{} — what it is", query),
                        format!(
                            "Information about \"{}\": a detailed description of the term with usage examples...",
                            query
                        ),
                    ),
                    1 => (
                        format!("{}: the complete guide", query),
                        format!(
                            "The complete guide to \"{}\". Everything about the topic in one long-form article...",
                            query
                        ),
                    ),
                    _ => (
                        format!("How {} works", query),
                        format!(
                            "A technical walkthrough of {}, with examples and explanations...",
                            query
                        ),
                    ),
                };
                SearchResult {
                    id: (i + 1).to_string(),
                    title,
                    url: format!("https://{}/{}?r={}", domain, encoded, i + 1),
                    snippet,
                    domain: domain.to_string(),
                }
            })
            .collect()
    }
}

/// Percent-encodes a query for inclusion in a synthetic URL.
fn encode_query(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for byte in query.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
