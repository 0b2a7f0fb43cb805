//! Skill Extractor: finds which dictionary terms a free-text document mentions.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::dictionaries::{SOFT_SKILLS, TECH_SKILLS};

/// How a dictionary term is located inside lowercased text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Plain substring containment: "java" is found inside "javascript".
    #[default]
    Substring,
    /// The characters on both sides of a hit must not be alphanumeric.
    TokenBoundary,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "token" | "token_boundary" => Ok(MatchMode::TokenBoundary),
            other => Err(format!(
                "unknown match mode '{other}' (expected 'substring' or 'token')"
            )),
        }
    }
}

static TOOL_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:proficient in|experienced with|skilled in|using)[ \t]+([a-z][a-z ,\t]*)")
        .expect("tool phrase pattern is valid")
});

static TOOL_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*,\s*|\s+and\s+").expect("tool separator pattern is valid"));

static CERTIFICATION_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:certified|certification|certificate)[ \t]+(?:in[ \t]+)?[a-z][a-z \t]*")
        .expect("certification pattern is valid")
});

/// Skills found in one document. Built fresh per request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
    pub certifications: Vec<String>,
}

impl SkillSet {
    pub fn extract(text: &str, mode: MatchMode) -> Self {
        SkillSet {
            technical: to_owned(extract_terms(text, TECH_SKILLS, mode)),
            soft: to_owned(extract_terms(text, SOFT_SKILLS, mode)),
            tools: extract_tools(text),
            certifications: extract_certifications(text),
        }
    }
}

/// Returns the dictionary terms present in `text`, in dictionary order, without repeats.
///
/// Never returns a term that is not in `dictionary`. Empty text yields an empty vec.
pub fn extract_terms(text: &str, dictionary: &[&'static str], mode: MatchMode) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let mut found: Vec<&'static str> = Vec::new();

    for &term in dictionary {
        if !found.contains(&term) && contains_term(&lower, term, mode) {
            found.push(term);
        }
    }

    found
}

/// True if lowercased `text` mentions any of `markers`.
pub fn mentions_any(text: &str, markers: &[&str], mode: MatchMode) -> bool {
    let lower = text.to_lowercase();
    markers.iter().any(|m| contains_term(&lower, m, mode))
}

/// `haystack` must already be lowercase.
pub fn contains_term(haystack: &str, term: &str, mode: MatchMode) -> bool {
    if term.is_empty() {
        return false;
    }

    match mode {
        MatchMode::Substring => haystack.contains(term),
        MatchMode::TokenBoundary => haystack.match_indices(term).any(|(start, hit)| {
            let before = haystack[..start].chars().next_back();
            let after = haystack[start + hit.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        }),
    }
}

/// Pulls tool names out of phrases like "proficient in Docker, Redis and Kafka".
/// Best effort: whatever follows the phrase up to the end of the line is split
/// on commas and "and".
fn extract_tools(text: &str) -> Vec<String> {
    let mut tools: Vec<String> = Vec::new();

    for caps in TOOL_PHRASE.captures_iter(text) {
        let Some(list) = caps.get(1) else { continue };
        for piece in TOOL_SEPARATOR.split(list.as_str()) {
            let tool = piece.trim().to_lowercase();
            if !tool.is_empty() && !tools.contains(&tool) {
                tools.push(tool);
            }
        }
    }

    tools
}

fn extract_certifications(text: &str) -> Vec<String> {
    let mut certs: Vec<String> = Vec::new();
    for m in CERTIFICATION_PHRASE.find_iter(text) {
        let cert = m.as_str().trim().to_string();
        if !certs.contains(&cert) {
            certs.push(cert);
        }
    }
    certs
}

fn to_owned(terms: Vec<&'static str>) -> Vec<String> {
    terms.into_iter().map(str::to_string).collect()
}
