//! GitHub analysis: profile strength from public repository data, or an
//! estimate when the profile cannot be fetched.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::classifiers::{
    activity_trend, documentation_quality, project_depth, ActivityLevel,
};
use crate::analysis::composite::github_strength;
use crate::analysis::fallbacks::{
    COMMITS_PER_REPO, DEFAULT_LANGUAGE_MIX, ESTIMATED_FOLLOWERS, ESTIMATED_REPOS,
    LANGUAGE_NAME_PLACEHOLDER,
};
use crate::analysis::schema::{check_non_empty, check_score, check_text, check_texts, Schema, SchemaViolation};
use crate::analysis::EngineOptions;
use crate::errors::AppError;
use crate::github_client::{GitHubProfile, ProfileSource};
use crate::responders::{require, validated};

pub const FAILURE: &str = "Failed to analyze GitHub profile";

const TOP_LANGUAGES: usize = 5;
const ENGAGED_FOLLOWERS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Figures come from the public API.
    Github,
    /// The fetch failed; repository and follower counts are estimates.
    Estimated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubAnalysis {
    pub strength_score: u32,
    pub code_frequency: String,
    pub primary_languages: Vec<LanguageShare>,
    pub documentation_quality: String,
    pub activity_trend: String,
    pub project_depth: String,
    pub total_repos: u32,
    pub total_commits: u32,
    pub insights: Vec<String>,
    pub data_source: DataSource,
}

impl Schema for GitHubAnalysis {
    fn validate(&self) -> Result<(), SchemaViolation> {
        check_score("strengthScore", self.strength_score)?;
        check_text("codeFrequency", &self.code_frequency)?;
        check_non_empty("primaryLanguages", &self.primary_languages)?;
        for (i, language) in self.primary_languages.iter().enumerate() {
            check_text(&format!("primaryLanguages[{i}].name"), &language.name)?;
            check_score(&format!("primaryLanguages[{i}].percentage"), language.percentage)?;
        }
        check_text("documentationQuality", &self.documentation_quality)?;
        check_text("activityTrend", &self.activity_trend)?;
        check_text("projectDepth", &self.project_depth)?;
        check_non_empty("insights", &self.insights)?;
        check_texts("insights", &self.insights)?;
        Ok(())
    }
}

/// Takes the path segment after "github.com/", dropping any further path and query.
pub fn parse_username(github_url: &str) -> Option<String> {
    let (_, rest) = github_url.split_once("github.com/")?;
    let username = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .trim();

    if username.is_empty() {
        None
    } else {
        Some(username.to_string())
    }
}

pub async fn analyze_github(
    github_url: &str,
    profiles: &dyn ProfileSource,
    options: &EngineOptions,
) -> Result<GitHubAnalysis, AppError> {
    let github_url = require("githubUrl", github_url)?;
    let username = parse_username(github_url)
        .ok_or_else(|| AppError::Validation("Invalid GitHub URL".to_string()))?;

    let profile = match profiles.fetch_profile(&username).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!("GitHub profile fetch for {username} failed, using estimates: {e}");
            None
        }
    };

    let analysis = build_analysis(&username, profile.as_ref(), Utc::now(), options);

    info!(
        "GitHub profile analyzed: user={}, strength={}, repos={}, source={:?}",
        username, analysis.strength_score, analysis.total_repos, analysis.data_source
    );

    validated(analysis, FAILURE)
}

/// Assembles the analysis from fetched data, or from estimates keyed on the
/// username when `profile` is `None`.
pub fn build_analysis(
    username: &str,
    profile: Option<&GitHubProfile>,
    now: DateTime<Utc>,
    options: &EngineOptions,
) -> GitHubAnalysis {
    let jitter = &options.jitter;

    let (total_repos, followers, data_source) = match profile {
        Some(p) => (p.user.public_repos, p.user.followers, DataSource::Github),
        None => (
            jitter.pick("estimated_repos", username, ESTIMATED_REPOS),
            jitter.pick("estimated_followers", username, ESTIMATED_FOLLOWERS),
            DataSource::Estimated,
        ),
    };

    let primary_languages = profile
        .map(|p| language_shares(p, total_repos))
        .filter(|shares| !shares.is_empty())
        .unwrap_or_else(default_language_mix);

    let strength_score = github_strength(total_repos, followers, primary_languages.len());
    let total_commits =
        total_repos.saturating_mul(jitter.pick("commits_per_repo", username, COMMITS_PER_REPO));
    let code_frequency = ActivityLevel::from_commits(total_commits).label();

    let days_since_update = profile
        .and_then(|p| p.repos.iter().filter_map(|r| r.updated_at).max())
        .map(|latest| (now - latest).num_days());

    let insights = build_insights(&primary_languages, total_repos, followers, code_frequency);

    GitHubAnalysis {
        strength_score,
        code_frequency: code_frequency.to_string(),
        primary_languages,
        documentation_quality: documentation_quality(total_repos).to_string(),
        activity_trend: activity_trend(days_since_update).to_string(),
        project_depth: project_depth(total_repos).to_string(),
        total_repos,
        total_commits,
        insights,
        data_source,
    }
}

/// Top languages by repository count, ties broken by name.
fn language_shares(profile: &GitHubProfile, total_repos: u32) -> Vec<LanguageShare> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for language in profile.repos.iter().filter_map(|r| r.language.as_deref()) {
        *counts.entry(language).or_default() += 1;
    }

    let mut ranked: Vec<(&str, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    // The listing can hold more repositories than the user's public count
    // (e.g. org forks), which would push a share past 100.
    let denominator = total_repos.max(profile.repos.len() as u32).max(1);

    ranked
        .into_iter()
        .take(TOP_LANGUAGES)
        .map(|(name, count)| LanguageShare {
            name: name.to_string(),
            percentage: (f64::from(count) / f64::from(denominator) * 100.0).round() as u32,
        })
        .collect()
}

fn default_language_mix() -> Vec<LanguageShare> {
    DEFAULT_LANGUAGE_MIX
        .iter()
        .map(|(name, percentage)| LanguageShare {
            name: name.to_string(),
            percentage: *percentage,
        })
        .collect()
}

fn build_insights(
    languages: &[LanguageShare],
    total_repos: u32,
    followers: u32,
    code_frequency: &str,
) -> Vec<String> {
    let lead_language = languages
        .first()
        .map(|l| l.name.as_str())
        .unwrap_or(LANGUAGE_NAME_PLACEHOLDER);

    let network = if followers > ENGAGED_FOLLOWERS {
        format!("Community engagement with {followers} followers shows influence")
    } else {
        "Growing developer network".to_string()
    };

    vec![
        format!("Strong presence in {lead_language} development"),
        format!("Portfolio of {total_repos} public repositories demonstrates active development"),
        network,
        "Consider adding more detailed README files to showcase project highlights".to_string(),
        "Pinned repositories can help highlight your best work to recruiters".to_string(),
        format!("Contribution graph shows {}", code_frequency.to_lowercase()),
        "Regular commits indicate consistent coding practice".to_string(),
        "Diverse language skills enhance versatility as a developer".to_string(),
    ]
}
