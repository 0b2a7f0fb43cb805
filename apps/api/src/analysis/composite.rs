//! Composite Score Calculator: fixed weighted formulas per feature.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Job match
// ────────────────────────────────────────────────────────────────────────────

/// Communication fit used when the resume shares none of the JD's soft skills.
pub const COMMUNICATION_FALLBACK: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobMatchScores {
    pub overall: u32,
    pub skills_fit: u32,
    pub experience_fit: u32,
    pub tools_fit: u32,
    pub domain_fit: u32,
    pub communication_fit: u32,
}

impl JobMatchScores {
    /// overall = 0.30·skills + 0.20·experience + 0.20·tools + 0.15·domain + 0.15·communication
    ///
    /// experience and domain are derived from skills/tools, not measured. The
    /// weighted sum runs on the unrounded derived values; each reported
    /// dimension is rounded separately.
    pub fn compute(skills_fit: u32, tools_fit: u32, soft_fit: u32) -> Self {
        let skills = f64::from(skills_fit.min(100));
        let tools = f64::from(tools_fit.min(100));

        let experience = (skills * 1.1).min(100.0);
        let domain = ((skills + tools) / 2.0).min(100.0);
        let communication = if soft_fit > 0 {
            f64::from(soft_fit.min(100))
        } else {
            COMMUNICATION_FALLBACK
        };

        let overall = skills * 0.30
            + experience * 0.20
            + tools * 0.20
            + domain * 0.15
            + communication * 0.15;

        JobMatchScores {
            overall: clamp_score(overall),
            skills_fit: clamp_score(skills),
            experience_fit: clamp_score(experience),
            tools_fit: clamp_score(tools),
            domain_fit: clamp_score(domain),
            communication_fit: clamp_score(communication),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume quality
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryIcon {
    Layout,
    Bot,
    FileText,
    Palette,
}

/// The four independently scored resume categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeCategory {
    Formatting,
    AtsCompatibility,
    ContentQuality,
    DesignLayout,
}

impl ResumeCategory {
    pub const ALL: [ResumeCategory; 4] = [
        ResumeCategory::Formatting,
        ResumeCategory::AtsCompatibility,
        ResumeCategory::ContentQuality,
        ResumeCategory::DesignLayout,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResumeCategory::Formatting => "Formatting",
            ResumeCategory::AtsCompatibility => "ATS Compatibility",
            ResumeCategory::ContentQuality => "Content Quality",
            ResumeCategory::DesignLayout => "Design & Layout",
        }
    }

    pub fn base_score(self) -> i32 {
        match self {
            ResumeCategory::Formatting => 85,
            ResumeCategory::AtsCompatibility => 80,
            ResumeCategory::ContentQuality => 75,
            ResumeCategory::DesignLayout => 80,
        }
    }

    pub fn floor(self) -> i32 {
        match self {
            ResumeCategory::Formatting => 40,
            ResumeCategory::AtsCompatibility => 35,
            ResumeCategory::ContentQuality => 30,
            ResumeCategory::DesignLayout => 40,
        }
    }

    pub fn icon(self) -> CategoryIcon {
        match self {
            ResumeCategory::Formatting => CategoryIcon::Layout,
            ResumeCategory::AtsCompatibility => CategoryIcon::Bot,
            ResumeCategory::ContentQuality => CategoryIcon::FileText,
            ResumeCategory::DesignLayout => CategoryIcon::Palette,
        }
    }
}

/// Running score for one category while penalties are applied.
#[derive(Debug, Clone)]
pub struct CategoryTally {
    pub category: ResumeCategory,
    score: i32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl CategoryTally {
    pub fn new(category: ResumeCategory) -> Self {
        Self {
            category,
            score: category.base_score(),
            issues: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Deducts `points`, recording the issue (if any) and the suggestion.
    pub fn penalize(&mut self, points: i32, issue: Option<&str>, suggestion: &str) {
        self.score -= points;
        if let Some(issue) = issue {
            self.issues.push(issue.to_string());
        }
        self.suggestions.push(suggestion.to_string());
    }

    /// Final score, never below the category floor.
    pub fn score(&self) -> u32 {
        self.score.max(self.category.floor()).clamp(0, 100) as u32
    }
}

/// Overall resume score: rounded mean of the category scores.
pub fn resume_overall(category_scores: &[u32]) -> u32 {
    if category_scores.is_empty() {
        return 0;
    }
    let sum: u32 = category_scores.iter().sum();
    clamp_score(f64::from(sum) / category_scores.len() as f64)
}

// ────────────────────────────────────────────────────────────────────────────
// GitHub strength
// ────────────────────────────────────────────────────────────────────────────

pub const GITHUB_BASE_SCORE: f64 = 60.0;

/// 60 + min(20, repos/2) + min(15, followers/10) + min(5, languages)
pub fn github_strength(total_repos: u32, followers: u32, language_count: usize) -> u32 {
    let repo_bonus = (f64::from(total_repos) / 2.0).min(20.0);
    let follower_bonus = (f64::from(followers) / 10.0).min(15.0);
    let language_bonus = (language_count as f64).min(5.0);
    clamp_score(GITHUB_BASE_SCORE + repo_bonus + follower_bonus + language_bonus)
}

fn clamp_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}
