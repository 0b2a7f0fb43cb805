//! Job match: scores a resume against a job description.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::classifiers::{score_personality, MatchLabel, Personality};
use crate::analysis::composite::JobMatchScores;
use crate::analysis::extractor::SkillSet;
use crate::analysis::fallbacks::{
    or_placeholder, GAP_SKILL_PLACEHOLDER, MATCHED_SKILLS_PLACEHOLDER, MISSING_SKILLS_PLACEHOLDER,
};
use crate::analysis::overlap::overlap_score;
use crate::analysis::schema::{check_non_empty, check_score, check_texts, Schema, SchemaViolation};
use crate::analysis::EngineOptions;
use crate::errors::AppError;
use crate::responders::{display_name, require, validated};

pub const FAILURE: &str = "Failed to analyze job match";

const MAX_MISSING_SKILLS: usize = 5;
const GAP_SUGGESTION_SKILLS: usize = 3;

const TAILORING_TIPS: &[&str] = &[
    "Add quantifiable achievements with metrics (e.g., \"improved performance by 30%\")",
    "Include relevant certifications or courses related to missing skills",
    "Tailor your resume summary to mirror the job description language",
    "Add a projects section showcasing work with required technologies",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResult {
    pub overall_score: u32,
    pub match_label: String,
    pub skills_fit: u32,
    pub experience_fit: u32,
    pub tools_fit: u32,
    pub domain_fit: u32,
    pub communication_fit: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub personality: Personality,
}

impl Schema for JobMatchResult {
    fn validate(&self) -> Result<(), SchemaViolation> {
        check_score("overallScore", self.overall_score)?;
        check_score("skillsFit", self.skills_fit)?;
        check_score("experienceFit", self.experience_fit)?;
        check_score("toolsFit", self.tools_fit)?;
        check_score("domainFit", self.domain_fit)?;
        check_score("communicationFit", self.communication_fit)?;
        check_non_empty("matchedSkills", &self.matched_skills)?;
        check_non_empty("missingSkills", &self.missing_skills)?;
        check_non_empty("suggestions", &self.suggestions)?;
        check_texts("suggestions", &self.suggestions)?;

        let p = &self.personality;
        check_score("personality.analytical", p.analytical)?;
        check_score("personality.creative", p.creative)?;
        check_score("personality.detailOriented", p.detail_oriented)?;
        check_score("personality.leadership", p.leadership)?;
        check_score("personality.collaborative", p.collaborative)?;
        check_non_empty("personality.recommendedRoles", &p.recommended_roles)?;
        Ok(())
    }
}

pub fn analyze_job_match(
    resume: &str,
    job_description: &str,
    options: &EngineOptions,
) -> Result<JobMatchResult, AppError> {
    let resume = require("resume", resume)?;
    let job_description = require("jobDescription", job_description)?;

    let resume_skills = SkillSet::extract(resume, options.match_mode);
    let jd_skills = SkillSet::extract(job_description, options.match_mode);

    let skills_fit = overlap_score(&resume_skills.technical, &jd_skills.technical);
    let tools_fit = overlap_score(&resume_skills.tools, &jd_skills.tools);
    let soft_fit = overlap_score(&resume_skills.soft, &jd_skills.soft);

    let scores = JobMatchScores::compute(skills_fit.score, tools_fit.score, soft_fit.score);
    let label = MatchLabel::from_score(scores.overall);

    let (matched, missing) = split_requirements(&resume_skills, &jd_skills);
    let missing_cert = first_missing_certification(&resume_skills, &jd_skills);
    let suggestions = build_suggestions(&missing, missing_cert, label);

    info!(
        "Job match scored: overall={}, skills={}/{}, tools={}/{}, soft={}/{}",
        scores.overall,
        skills_fit.present,
        skills_fit.required,
        tools_fit.present,
        tools_fit.required,
        soft_fit.present,
        soft_fit.required
    );

    let missing_display: Vec<String> = missing
        .iter()
        .take(MAX_MISSING_SKILLS)
        .map(|s| display_name(s))
        .collect();
    let matched_display: Vec<String> = matched.iter().map(|s| display_name(s)).collect();

    let result = JobMatchResult {
        overall_score: scores.overall,
        match_label: label.label().to_string(),
        skills_fit: scores.skills_fit,
        experience_fit: scores.experience_fit,
        tools_fit: scores.tools_fit,
        domain_fit: scores.domain_fit,
        communication_fit: scores.communication_fit,
        matched_skills: or_placeholder(matched_display, MATCHED_SKILLS_PLACEHOLDER),
        missing_skills: or_placeholder(missing_display, MISSING_SKILLS_PLACEHOLDER),
        suggestions,
        personality: score_personality(resume, &options.jitter, options.match_mode),
    };

    validated(result, FAILURE)
}

/// Splits the JD's technical skills and tools into those the resume covers
/// (case-insensitive equality) and those it lacks. JD order is kept.
fn split_requirements(resume: &SkillSet, jd: &SkillSet) -> (Vec<String>, Vec<String>) {
    let mut required: Vec<&String> = Vec::new();
    for skill in jd.technical.iter().chain(jd.tools.iter()) {
        if !required.iter().any(|r| r.eq_ignore_ascii_case(skill)) {
            required.push(skill);
        }
    }

    let offered: Vec<&String> = resume.technical.iter().chain(resume.tools.iter()).collect();

    required
        .into_iter()
        .cloned()
        .partition(|skill| offered.iter().any(|o| o.eq_ignore_ascii_case(skill)))
}

/// First certification phrase in the JD that the resume does not repeat.
fn first_missing_certification<'a>(resume: &SkillSet, jd: &'a SkillSet) -> Option<&'a str> {
    jd.certifications
        .iter()
        .find(|c| !resume.certifications.iter().any(|r| r.eq_ignore_ascii_case(c)))
        .map(String::as_str)
}

fn build_suggestions(
    missing: &[String],
    missing_certification: Option<&str>,
    label: MatchLabel,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !missing.is_empty() {
        let top: Vec<String> = missing
            .iter()
            .take(GAP_SUGGESTION_SKILLS)
            .map(|s| display_name(s))
            .collect();
        suggestions.push(format!(
            "Consider learning {} to strengthen your application",
            top.join(", ")
        ));
    }

    suggestions.push(label.advice().to_string());

    let first_gap = missing
        .first()
        .map(|s| display_name(s))
        .unwrap_or_else(|| GAP_SKILL_PLACEHOLDER.to_string());
    suggestions.push(format!(
        "Highlight your experience with {first_gap} to better match job requirements"
    ));

    if let Some(certification) = missing_certification {
        suggestions.push(format!(
            "The posting asks for \"{certification}\" - list it if you hold it or plan to earn it"
        ));
    }

    suggestions.extend(TAILORING_TIPS.iter().map(|t| t.to_string()));
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::MatchMode;

    const RESUME: &str = "Backend engineer. Built services in Python and Docker on AWS. \
        Proficient in Terraform, Grafana and Kafka. Strong communication.";
    const JD: &str = "We need Python, Kubernetes and AWS experience. \
        Experienced with Terraform and Kafka. Communication and mentoring matter.";

    fn options() -> EngineOptions {
        EngineOptions::default()
    }

    #[test]
    fn test_missing_resume_is_a_validation_error() {
        let err = analyze_job_match("  ", JD, &options()).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("resume")));
    }

    #[test]
    fn test_missing_job_description_is_a_validation_error() {
        let err = analyze_job_match(RESUME, "", &options()).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("jobDescription")));
    }

    #[test]
    fn test_overall_follows_weighted_formula() {
        let result = analyze_job_match(RESUME, JD, &options()).unwrap();
        let expected = JobMatchScores::compute(
            result.skills_fit,
            result.tools_fit,
            // communicationFit is the soft overlap whenever it is non-zero
            result.communication_fit,
        );
        assert_eq!(result.overall_score, expected.overall);
        assert_eq!(result.match_label, MatchLabel::from_score(result.overall_score).label());
    }

    #[test]
    fn test_matched_and_missing_skills() {
        let result = analyze_job_match(RESUME, JD, &options()).unwrap();
        assert!(result.matched_skills.contains(&"Python".to_string()));
        assert!(result.matched_skills.contains(&"Aws".to_string()));
        assert!(result.missing_skills.contains(&"Kubernetes".to_string()));
        assert!(result.suggestions[0].contains("Kubernetes"));
    }

    #[test]
    fn test_placeholders_when_nothing_overlaps() {
        let result = analyze_job_match(
            "I enjoy pottery and gardening.",
            "We value curiosity.",
            &options(),
        )
        .unwrap();
        assert_eq!(result.matched_skills, vec!["General Skills", "Problem Solving"]);
        assert_eq!(result.missing_skills, vec!["Additional Technical Skills"]);
        // No requirements anywhere, so every overlap defaults to 70.
        assert_eq!(result.skills_fit, 70);
        assert_eq!(result.tools_fit, 70);
        assert_eq!(result.communication_fit, 70);
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("key technologies")));
    }

    #[test]
    fn test_missing_skills_capped_at_five() {
        let jd = "python java rust ruby php swift kotlin scala docker kubernetes";
        let result = analyze_job_match("I write prose.", jd, &options()).unwrap();
        assert_eq!(result.missing_skills.len(), 5);
    }

    #[test]
    fn test_seeded_results_are_reproducible() {
        let a = analyze_job_match(RESUME, JD, &options()).unwrap();
        let b = analyze_job_match(RESUME, JD, &options()).unwrap();
        assert_eq!(a.personality, b.personality);
        assert_eq!(a.overall_score, b.overall_score);
    }

    #[test]
    fn test_token_mode_drops_embedded_hits() {
        let opts = EngineOptions {
            match_mode: MatchMode::TokenBoundary,
            ..EngineOptions::default()
        };
        let result = analyze_job_match("JavaScript developer", "JavaScript role", &opts).unwrap();
        assert!(!result.matched_skills.contains(&"Java".to_string()));
        assert!(result.matched_skills.contains(&"Javascript".to_string()));
    }

    #[test]
    fn test_missing_certification_is_suggested() {
        let jd = "Python role. Certified in Kubernetes Administration preferred.";
        let result = analyze_job_match("Python developer.", jd, &options()).unwrap();
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("Certified in Kubernetes Administration")));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = analyze_job_match(RESUME, JD, &options()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("overallScore").is_some());
        assert!(json["personality"].get("detailOriented").is_some());
        assert!(json["personality"].get("recommendedRoles").is_some());
    }
}
