//! Heuristic Classifiers: ordered threshold and keyword-presence rules.
//!
//! Thresholds are checked high to low; the first one that holds wins.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::analysis::dictionaries::{
    ANALYTICAL_MARKERS, COLLABORATIVE_MARKERS, CREATIVE_MARKERS, LEADERSHIP_MARKERS,
};
use crate::analysis::extractor::{mentions_any, MatchMode};
use crate::analysis::fallbacks::RECOMMENDED_ROLES_PLACEHOLDER;
use crate::analysis::jitter::Jitter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLabel {
    Excellent,
    Strong,
    Moderate,
    NeedsImprovement,
}

impl MatchLabel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => MatchLabel::Excellent,
            s if s >= 70 => MatchLabel::Strong,
            s if s >= 50 => MatchLabel::Moderate,
            _ => MatchLabel::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchLabel::Excellent => "Excellent Match",
            MatchLabel::Strong => "Strong Match",
            MatchLabel::Moderate => "Moderate Match",
            MatchLabel::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Advice line shown under the job-match score.
    pub fn advice(self) -> &'static str {
        match self {
            MatchLabel::Excellent => {
                "Excellent match! Focus on demonstrating cultural fit and passion for the role"
            }
            MatchLabel::Strong => {
                "Strong candidate! Emphasize your most relevant projects in your cover letter"
            }
            MatchLabel::Moderate => {
                "Highlight transferable skills and projects that demonstrate related experience"
            }
            MatchLabel::NeedsImprovement => {
                "This role may require significant upskilling - consider similar entry-level positions"
            }
        }
    }
}

/// Commit activity, judged on an estimated commit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    HighlyActive,
    Active,
    Moderate,
}

impl ActivityLevel {
    pub fn from_commits(commits: u32) -> Self {
        if commits > 500 {
            ActivityLevel::HighlyActive
        } else if commits > 200 {
            ActivityLevel::Active
        } else {
            ActivityLevel::Moderate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::HighlyActive => "Highly Active - Multiple commits weekly",
            ActivityLevel::Active => "Active - Regular commits",
            ActivityLevel::Moderate => "Moderate - Occasional commits",
        }
    }
}

pub fn documentation_quality(total_repos: u32) -> &'static str {
    if total_repos > 20 {
        "Good - Well-documented projects"
    } else {
        "Moderate - Some documentation present"
    }
}

pub fn project_depth(total_repos: u32) -> &'static str {
    if total_repos > 30 {
        "Extensive - Diverse project portfolio"
    } else if total_repos > 15 {
        "Solid - Good variety of projects"
    } else {
        "Growing - Building project portfolio"
    }
}

/// Trend from the age in days of the most recently updated repository.
/// `None` (no repository data) reports the steady-state label.
pub fn activity_trend(days_since_last_update: Option<i64>) -> &'static str {
    match days_since_last_update {
        None => "Consistent - Regular activity over time",
        Some(d) if d <= 30 => "Consistent - Regular activity over time",
        Some(d) if d <= 180 => "Steady - Recent activity in the last six months",
        Some(_) => "Slowing - No recent repository updates",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personality traits
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub analytical: u32,
    pub creative: u32,
    pub detail_oriented: u32,
    pub leadership: u32,
    pub collaborative: u32,
    pub recommended_roles: Vec<String>,
}

struct TraitBand {
    name: &'static str,
    markers: &'static [&'static str],
    high: Range<u32>,
    low: Range<u32>,
}

const ANALYTICAL: TraitBand = TraitBand {
    name: "analytical",
    markers: ANALYTICAL_MARKERS,
    high: 85..100,
    low: 70..90,
};

const CREATIVE: TraitBand = TraitBand {
    name: "creative",
    markers: CREATIVE_MARKERS,
    high: 85..100,
    low: 65..85,
};

// No markers: every resume gets the same band.
const DETAIL_ORIENTED: TraitBand = TraitBand {
    name: "detail_oriented",
    markers: &[],
    high: 80..95,
    low: 80..95,
};

const LEADERSHIP: TraitBand = TraitBand {
    name: "leadership",
    markers: LEADERSHIP_MARKERS,
    high: 80..95,
    low: 60..80,
};

const COLLABORATIVE: TraitBand = TraitBand {
    name: "collaborative",
    markers: COLLABORATIVE_MARKERS,
    high: 85..100,
    low: 70..90,
};

fn score_trait(band: &TraitBand, resume: &str, jitter: &Jitter, mode: MatchMode) -> u32 {
    let range = if mentions_any(resume, band.markers, mode) {
        band.high.clone()
    } else {
        band.low.clone()
    };
    jitter.pick(band.name, resume, range)
}

/// Scores the five traits from keyword presence, then derives roles from them.
pub fn score_personality(resume: &str, jitter: &Jitter, mode: MatchMode) -> Personality {
    let analytical = score_trait(&ANALYTICAL, resume, jitter, mode);
    let creative = score_trait(&CREATIVE, resume, jitter, mode);
    let detail_oriented = score_trait(&DETAIL_ORIENTED, resume, jitter, mode);
    let leadership = score_trait(&LEADERSHIP, resume, jitter, mode);
    let collaborative = score_trait(&COLLABORATIVE, resume, jitter, mode);

    let recommended_roles = recommend_roles(
        analytical,
        creative,
        detail_oriented,
        leadership,
        collaborative,
    );

    Personality {
        analytical,
        creative,
        detail_oriented,
        leadership,
        collaborative,
        recommended_roles,
    }
}

fn recommend_roles(
    analytical: u32,
    creative: u32,
    detail_oriented: u32,
    leadership: u32,
    collaborative: u32,
) -> Vec<String> {
    let mut roles: Vec<&str> = Vec::new();

    if analytical > 70 {
        roles.extend(["Data Analyst", "Business Analyst", "Research Engineer"]);
    }
    if creative > 70 {
        roles.extend(["UX Designer", "Product Designer", "Creative Developer"]);
    }
    if detail_oriented > 70 {
        roles.extend(["QA Engineer", "Technical Writer", "DevOps Engineer"]);
    }
    if leadership > 70 {
        roles.extend(["Engineering Manager", "Tech Lead", "Product Manager"]);
    }
    if collaborative > 70 && analytical > 60 {
        roles.extend(["Full Stack Developer", "Solutions Architect"]);
    }

    if roles.is_empty() {
        roles.extend(RECOMMENDED_ROLES_PLACEHOLDER);
    }
    roles.into_iter().map(str::to_string).collect()
}
