//! Resume quality: four categories scored by fixed penalties off a base.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::composite::{resume_overall, CategoryIcon, CategoryTally, ResumeCategory};
use crate::analysis::dictionaries::ACTION_VERBS;
use crate::analysis::extractor::{extract_terms, MatchMode};
use crate::analysis::fallbacks::{or_placeholder, RESUME_CATEGORY_PLACEHOLDERS};
use crate::analysis::schema::{check_non_empty, check_score, check_texts, Schema, SchemaViolation};
use crate::analysis::EngineOptions;
use crate::errors::AppError;
use crate::responders::{require, validated};

pub const FAILURE: &str = "Failed to check resume";

const BULLET_GLYPHS: &[char] = &['•', '●', '○', '→', '▪', '■'];

static SUMMARY_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)summary|objective|profile").expect("summary pattern is valid"));
static EXPERIENCE_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)experience|work history|employment").expect("experience pattern is valid")
});
static EDUCATION_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)education|degree|university|college").expect("education pattern is valid")
});
static SKILLS_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)skills|technologies|expertise").expect("skills pattern is valid")
});
static QUANTIFIED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+%|\d+\+|increased|decreased|improved|reduced")
        .expect("quantification pattern is valid")
});
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("number pattern is valid"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("email pattern is valid"));
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern is valid")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub name: String,
    pub score: u32,
    pub icon_type: CategoryIcon,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeCheckResult {
    pub overall_score: u32,
    pub categories: Vec<CategoryResult>,
}

impl Schema for ResumeCheckResult {
    fn validate(&self) -> Result<(), SchemaViolation> {
        check_score("overallScore", self.overall_score)?;
        check_non_empty("categories", &self.categories)?;
        for (i, category) in self.categories.iter().enumerate() {
            check_score(&format!("categories[{i}].score"), category.score)?;
            check_non_empty(&format!("categories[{i}].issues"), &category.issues)?;
            check_non_empty(&format!("categories[{i}].suggestions"), &category.suggestions)?;
            check_texts(&format!("categories[{i}].issues"), &category.issues)?;
            check_texts(&format!("categories[{i}].suggestions"), &category.suggestions)?;
        }
        Ok(())
    }
}

/// Text measurements the penalty table is evaluated against.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeSignals {
    pub word_count: usize,
    pub line_count: usize,
    pub blank_lines: usize,
    pub bullet_count: usize,
    pub avg_line_length: f64,
    pub has_summary: bool,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
    pub action_verbs: usize,
    pub has_quantification: bool,
    pub number_count: usize,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_non_ascii: bool,
}

impl ResumeSignals {
    pub fn measure(text: &str, mode: MatchMode) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        let line_count = lines.len().max(1);

        ResumeSignals {
            word_count: text.split_whitespace().count(),
            line_count,
            blank_lines: lines.iter().filter(|l| l.trim().is_empty()).count(),
            bullet_count: text.chars().filter(|c| BULLET_GLYPHS.contains(c)).count(),
            avg_line_length: text.chars().count() as f64 / line_count as f64,
            has_summary: SUMMARY_SECTION.is_match(text),
            has_experience: EXPERIENCE_SECTION.is_match(text),
            has_education: EDUCATION_SECTION.is_match(text),
            has_skills: SKILLS_SECTION.is_match(text),
            action_verbs: extract_terms(text, ACTION_VERBS, mode).len(),
            has_quantification: QUANTIFIED.is_match(text),
            number_count: NUMBER.find_iter(text).count(),
            has_email: EMAIL.is_match(text),
            has_phone: PHONE.is_match(text),
            has_non_ascii: text
                .chars()
                .any(|c| !c.is_ascii() && !BULLET_GLYPHS.contains(&c)),
        }
    }

    /// More than two blank lines counts as deliberate section spacing.
    fn well_spaced(&self) -> bool {
        self.blank_lines > 2
    }
}

pub fn check_resume(resume_text: &str, options: &EngineOptions) -> Result<ResumeCheckResult, AppError> {
    require("resumeText", resume_text)?;
    let signals = ResumeSignals::measure(resume_text, options.match_mode);

    let tallies = [
        formatting(&signals),
        ats_compatibility(&signals),
        content_quality(&signals),
        design_layout(&signals),
    ];

    let categories: Vec<CategoryResult> = tallies
        .into_iter()
        .zip(RESUME_CATEGORY_PLACEHOLDERS)
        .map(|(tally, (issue, suggestion))| CategoryResult {
            name: tally.category.name().to_string(),
            score: tally.score(),
            icon_type: tally.category.icon(),
            issues: or_placeholder(tally.issues, &[issue]),
            suggestions: or_placeholder(tally.suggestions, &[suggestion]),
        })
        .collect();

    let scores: Vec<u32> = categories.iter().map(|c| c.score).collect();
    let overall_score = resume_overall(&scores);

    info!(
        "Resume checked: overall={}, words={}, action_verbs={}, categories={:?}",
        overall_score, signals.word_count, signals.action_verbs, scores
    );

    validated(
        ResumeCheckResult {
            overall_score,
            categories,
        },
        FAILURE,
    )
}

fn formatting(s: &ResumeSignals) -> CategoryTally {
    let mut tally = CategoryTally::new(ResumeCategory::Formatting);

    if s.word_count < 200 {
        tally.penalize(
            15,
            Some("Resume is too short - aim for 400-600 words"),
            "Add more details about your experience and achievements",
        );
    } else if s.word_count > 800 {
        tally.penalize(
            10,
            Some("Resume is too long - keep it concise"),
            "Focus on the most relevant and recent 10 years of experience",
        );
    }
    if !s.well_spaced() {
        tally.penalize(
            5,
            Some("Inconsistent spacing between sections"),
            "Use consistent whitespace to improve readability",
        );
    }
    if s.bullet_count < 5 {
        tally.penalize(
            5,
            None,
            "Use bullet points to list achievements and responsibilities",
        );
    }
    if s.avg_line_length > 120.0 {
        tally.penalize(
            5,
            Some("Some lines are too long"),
            "Keep line lengths under 100 characters for better readability",
        );
    }
    tally
}

fn ats_compatibility(s: &ResumeSignals) -> CategoryTally {
    let mut tally = CategoryTally::new(ResumeCategory::AtsCompatibility);

    if !s.has_email || !s.has_phone {
        tally.penalize(
            15,
            Some("Missing contact information"),
            "Include both email and phone number at the top",
        );
    }
    if !s.has_summary {
        tally.penalize(
            10,
            Some("No professional summary section"),
            "Add a 2-3 line summary highlighting your key qualifications",
        );
    }
    if !s.has_experience {
        tally.penalize(
            20,
            Some("No clear work experience section"),
            "Create a dedicated 'Work Experience' or 'Professional Experience' section",
        );
    }
    if !s.has_skills {
        tally.penalize(
            15,
            Some("No dedicated skills section"),
            "Add a 'Skills' section with relevant keywords for ATS scanning",
        );
    }
    if s.action_verbs < 5 {
        tally.penalize(
            10,
            Some("Insufficient action verbs"),
            "Start bullet points with strong action verbs (developed, managed, led, etc.)",
        );
    }
    tally
}

fn content_quality(s: &ResumeSignals) -> CategoryTally {
    let mut tally = CategoryTally::new(ResumeCategory::ContentQuality);

    if !s.has_quantification {
        tally.penalize(
            15,
            Some("Missing quantifiable achievements"),
            "Add metrics and numbers to demonstrate impact (e.g., 'increased sales by 25%')",
        );
    } else if s.number_count < 3 {
        tally.penalize(
            5,
            None,
            "Include more quantifiable results to strengthen your achievements",
        );
    }
    if s.action_verbs < 8 {
        tally.penalize(
            10,
            Some("Limited variety in action verbs"),
            "Use diverse action verbs to describe your accomplishments",
        );
    }
    if !s.has_education {
        tally.penalize(
            10,
            Some("Education section is missing or unclear"),
            "Include your education with degree, institution, and graduation year",
        );
    }
    if s.word_count < 300 {
        tally.penalize(
            15,
            Some("Insufficient detail about responsibilities and achievements"),
            "Expand on your key accomplishments in each role",
        );
    }
    tally
}

fn design_layout(s: &ResumeSignals) -> CategoryTally {
    let mut tally = CategoryTally::new(ResumeCategory::DesignLayout);

    if s.bullet_count == 0 {
        tally.penalize(
            15,
            Some("No bullet points used"),
            "Use bullet points to organize information and improve scannability",
        );
    }
    if !s.well_spaced() {
        tally.penalize(
            10,
            Some("Poor visual hierarchy"),
            "Use consistent spacing and clear section headers",
        );
    }
    if s.line_count < 15 {
        tally.penalize(
            10,
            Some("Layout appears sparse"),
            "Better utilize the space with relevant content",
        );
    }
    if s.has_non_ascii {
        tally.penalize(
            5,
            Some("Contains special characters that may not be ATS-compatible"),
            "Stick to standard ASCII characters for better ATS compatibility",
        );
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strong_resume() -> String {
        let mut text = String::from(
            "Jane Doe\njane.doe@example.com\n(555) 123-4567\n\n\
             Professional Summary\nBackend engineer with 8+ years building payment systems.\n\n\
             Work Experience\n",
        );
        let bullets = [
            "• Developed a ledger service handling 2000 requests per second",
            "• Managed a migration that reduced costs by 30%",
            "• Led a rewrite of the billing pipeline",
            "• Created dashboards that increased visibility for 4 teams",
            "• Implemented retries that improved uptime to 99.9%",
            "• Designed the settlement schema",
            "• Achieved SOC2 compliance in 6 months",
        ];
        for _ in 0..6 {
            for b in bullets {
                text.push_str(b);
                text.push_str(" across several regions and product lines\n");
            }
        }
        text.push_str("\nSkills\nRust, Go, PostgreSQL\n\nEducation\nBSc Computer Science, State University\n");
        text
    }

    #[test]
    fn test_empty_resume_is_rejected() {
        let err = check_resume("   \n ", &EngineOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("resumeText")));
    }

    #[test]
    fn test_signals_of_strong_resume() {
        let s = ResumeSignals::measure(&strong_resume(), MatchMode::Substring);
        assert!(s.has_email);
        assert!(s.has_phone);
        assert!(s.has_summary && s.has_experience && s.has_skills && s.has_education);
        assert!(s.bullet_count >= 5);
        assert!(s.action_verbs >= 8);
        assert!(!s.has_non_ascii, "bullet glyphs are not special characters");
        assert!(s.blank_lines > 2);
    }

    #[test]
    fn test_strong_resume_gets_placeholder_praise() {
        let result = check_resume(&strong_resume(), &EngineOptions::default()).unwrap();
        assert_eq!(result.categories.len(), 4);
        let ats = &result.categories[1];
        assert_eq!(ats.name, "ATS Compatibility");
        assert_eq!(ats.score, 80);
        assert_eq!(ats.issues, vec!["Good ATS compatibility"]);
        assert_eq!(ats.icon_type, CategoryIcon::Bot);
    }

    #[test]
    fn test_sparse_resume_hits_floors() {
        let result = check_resume("hello", &EngineOptions::default()).unwrap();
        let scores: Vec<u32> = result.categories.iter().map(|c| c.score).collect();
        // Formatting 85-15-5-5 = 60; ATS 80-70 floored to 35; Content 75-50 floored to 30; Design 80-35 = 45
        assert_eq!(scores, vec![60, 35, 30, 45]);
        assert_eq!(result.overall_score, 43);
    }

    #[test]
    fn test_trailing_blank_lines_count_toward_layout() {
        let mut text = (1..=14)
            .map(|i| format!("Line {i} of plain resume content"))
            .collect::<Vec<_>>()
            .join("\n");
        text.push_str("\n\n\n");

        let signals = ResumeSignals::measure(&text, MatchMode::Substring);
        assert_eq!(signals.line_count, 17);
        assert_eq!(signals.blank_lines, 3);

        let result = check_resume(&text, &EngineOptions::default()).unwrap();
        let design = &result.categories[3];
        assert_eq!(design.issues, vec!["No bullet points used"]);
        assert_eq!(design.score, 65);
        assert!(!result.categories[0]
            .issues
            .iter()
            .any(|i| i.contains("Inconsistent spacing")));
    }

    #[test]
    fn test_bullet_only_suggestion_has_no_issue() {
        let tally = formatting(&ResumeSignals::measure("short", MatchMode::Substring));
        assert!(tally
            .suggestions
            .iter()
            .any(|s| s.starts_with("Use bullet points to list")));
        assert!(!tally.issues.iter().any(|i| i.contains("bullet")));
    }

    #[test]
    fn test_non_ascii_penalized_in_design() {
        let s = ResumeSignals::measure("Résumé with accents", MatchMode::Substring);
        assert!(s.has_non_ascii);
        let tally = design_layout(&s);
        assert!(tally.issues.iter().any(|i| i.contains("special characters")));
    }

    #[test]
    fn test_icon_type_serializes() {
        let result = check_resume("hello", &EngineOptions::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["categories"][0]["iconType"], "layout");
        assert_eq!(json["categories"][3]["iconType"], "palette");
        assert!(json.get("overallScore").is_some());
    }

    proptest! {
        #[test]
        fn prop_category_scores_respect_floors(text in "[a-zA-Z0-9 •\n@.%+]{1,400}") {
            prop_assume!(!text.trim().is_empty());
            let result = check_resume(&text, &EngineOptions::default()).unwrap();
            let floors = [40, 35, 30, 40];
            for (category, floor) in result.categories.iter().zip(floors) {
                prop_assert!(category.score >= floor);
                prop_assert!(category.score <= 100);
            }
        }
    }
}
