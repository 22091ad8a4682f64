//! Name vocabulary — category exclusion keywords and plan-variant strip
//! tokens.
//!
//! Both lists are coupled to one regional naming convention, so they are
//! injectable configuration rather than hard-coded in the filters. The
//! defaults reproduce the standard vocabulary; a TOML config can override
//! either list wholesale.

use serde::{Deserialize, Serialize};

/// Scheme categories excluded from trend analysis (case-insensitive
/// substring match against the display name). Cash-equivalent categories
/// park money at a pinned NAV and carry no trend signal.
const DEFAULT_EXCLUSION_KEYWORDS: &[&str] = &["liquid fund", "overnight fund"];

/// Plan/option/descriptor tokens removed when normalizing a scheme name
/// down to its underlying-fund identity. Multi-word tokens must be applied
/// before their single-word components, which `strip()` guarantees by
/// processing longest-first.
const DEFAULT_STRIP_TOKENS: &[&str] = &[
    "direct plan",
    "regular plan",
    "growth option",
    "idcw option",
    "reinvestment",
    "payout",
    "direct",
    "regular",
    "growth",
    "option",
    "scheme",
    "funds",
    "fund",
    "plan",
    "idcw",
    "dp-g",
    "dp-i",
    "p-g",
    "p-i",
    "-",
    "(",
    ")",
    ".",
    ",",
];

/// Injectable vocabulary for category exclusion and name normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameVocabulary {
    /// Schemes whose display name contains any of these (case-insensitive)
    /// are removed entirely before any rolling computation.
    pub exclusion_keywords: Vec<String>,
    /// Tokens replaced by a space when deriving the normalized identity.
    pub strip_tokens: Vec<String>,
}

impl Default for NameVocabulary {
    fn default() -> Self {
        Self {
            exclusion_keywords: DEFAULT_EXCLUSION_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            strip_tokens: DEFAULT_STRIP_TOKENS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl NameVocabulary {
    /// Case-insensitive substring match against the exclusion keywords.
    pub fn is_excluded(&self, scheme_name: &str) -> bool {
        let lower = scheme_name.to_lowercase();
        self.exclusion_keywords
            .iter()
            .any(|kw| lower.contains(&kw.to_lowercase()))
    }

    /// Derive the normalized identity of a scheme name: lower-case, replace
    /// every strip token (longest first) with a space, collapse repeated
    /// whitespace, trim.
    ///
    /// Two names with equal normalized identities are treated as the same
    /// underlying fund by the deduplicator.
    pub fn normalize(&self, scheme_name: &str) -> String {
        let mut tokens: Vec<&str> = self.strip_tokens.iter().map(|s| s.as_str()).collect();
        tokens.sort_by_key(|t| std::cmp::Reverse(t.len()));

        let mut name = scheme_name.to_lowercase();
        for token in tokens {
            if name.contains(token) {
                name = name.replace(token, " ");
            }
        }
        name.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
