//! Preparation roadmap for a target company.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::schema::{check_non_empty, check_text, check_texts, Schema, SchemaViolation};
use crate::errors::AppError;
use crate::responders::{require, validated};

pub const FAILURE: &str = "Failed to generate roadmap";

const STACK_FALLBACK: &str = "your core stack";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HiringTrack {
    /// Large tech companies with a multi-round onsite and hiring committee.
    BigTech,
    General,
}

struct CompanyProfile {
    /// Matched as substrings of the lowercased company name.
    aliases: &'static [&'static str],
    skills: &'static [&'static str],
    certifications: &'static [&'static str],
    track: HiringTrack,
}

const COMPANY_PROFILES: &[CompanyProfile] = &[
    CompanyProfile {
        aliases: &["google"],
        skills: &["Python", "C++", "Go", "Java", "Kubernetes", "TensorFlow", "Distributed Systems", "Algorithm Design"],
        certifications: &["Google Cloud Professional Architect", "Kubernetes Administrator (CKA)", "TensorFlow Developer Certificate"],
        track: HiringTrack::BigTech,
    },
    CompanyProfile {
        aliases: &["amazon", "aws"],
        skills: &["Java", "Python", "AWS Services", "DynamoDB", "Lambda", "System Design", "Leadership Principles", "Data Structures"],
        certifications: &["AWS Solutions Architect", "AWS Developer Associate", "AWS SysOps Administrator"],
        track: HiringTrack::BigTech,
    },
    CompanyProfile {
        aliases: &["microsoft"],
        skills: &["C#", ".NET", "Azure", "TypeScript", "SQL Server", "Cloud Architecture", "DevOps", "Agile"],
        certifications: &["Azure Solutions Architect", "Azure Developer Associate", "Microsoft Certified: DevOps Engineer"],
        track: HiringTrack::BigTech,
    },
    CompanyProfile {
        aliases: &["meta", "facebook"],
        skills: &["React", "JavaScript", "Python", "C++", "GraphQL", "System Design", "Mobile Development", "Machine Learning"],
        certifications: &["Meta Frontend Developer Certificate", "AWS Certified Developer", "System Design Course"],
        track: HiringTrack::BigTech,
    },
    CompanyProfile {
        aliases: &["apple"],
        skills: &["Swift", "Objective-C", "C++", "iOS Development", "macOS Development", "System Design", "Security", "Hardware Integration"],
        certifications: &["iOS Developer Certification", "Swift Certification", "Security+ Certification"],
        track: HiringTrack::BigTech,
    },
    CompanyProfile {
        aliases: &["netflix"],
        skills: &["Java", "JavaScript", "Python", "AWS", "Microservices", "Streaming Technologies", "DevOps", "A/B Testing"],
        certifications: &["AWS Solutions Architect", "Microservices Architecture", "Site Reliability Engineering"],
        track: HiringTrack::BigTech,
    },
];

const DEFAULT_PROFILE: CompanyProfile = CompanyProfile {
    aliases: &[],
    skills: &["JavaScript", "TypeScript", "React", "Node.js", "Python", "SQL", "Git", "REST APIs", "Agile", "Testing"],
    certifications: &["AWS Cloud Practitioner", "Professional Scrum Master I", "JavaScript Algorithms and Data Structures"],
    track: HiringTrack::General,
};

fn profile_for(company: &str) -> &'static CompanyProfile {
    let lower = company.to_lowercase();
    COMPANY_PROFILES
        .iter()
        .find(|p| p.aliases.iter().any(|a| lower.contains(a)))
        .unwrap_or(&DEFAULT_PROFILE)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewStage {
    pub stage: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub company: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub projects: Vec<Project>,
    pub interview_process: Vec<InterviewStage>,
    pub weekly_plan: Vec<WeekPlan>,
    pub resume_tips: Vec<String>,
}

impl Schema for Roadmap {
    fn validate(&self) -> Result<(), SchemaViolation> {
        check_text("company", &self.company)?;
        check_non_empty("skills", &self.skills)?;
        check_non_empty("certifications", &self.certifications)?;
        check_non_empty("projects", &self.projects)?;
        for (i, p) in self.projects.iter().enumerate() {
            check_text(&format!("projects[{i}].title"), &p.title)?;
            check_text(&format!("projects[{i}].description"), &p.description)?;
        }
        check_non_empty("interviewProcess", &self.interview_process)?;
        for (i, s) in self.interview_process.iter().enumerate() {
            check_text(&format!("interviewProcess[{i}].stage"), &s.stage)?;
            check_text(&format!("interviewProcess[{i}].description"), &s.description)?;
        }
        check_non_empty("weeklyPlan", &self.weekly_plan)?;
        for (i, w) in self.weekly_plan.iter().enumerate() {
            check_text(&format!("weeklyPlan[{i}].week"), &w.week)?;
            check_non_empty(&format!("weeklyPlan[{i}].tasks"), &w.tasks)?;
            check_texts(&format!("weeklyPlan[{i}].tasks"), &w.tasks)?;
        }
        check_non_empty("resumeTips", &self.resume_tips)?;
        check_texts("resumeTips", &self.resume_tips)?;
        Ok(())
    }
}

pub fn generate_roadmap(company_name: &str) -> Result<Roadmap, AppError> {
    let company = require("companyName", company_name)?;
    let profile = profile_for(company);

    let first_skill = profile.skills.first().copied().unwrap_or(STACK_FALLBACK);

    let projects = build_projects(company, profile.skills);
    let weekly_plan = build_weekly_plan(company, first_skill, &projects);
    let resume_tips = build_resume_tips(company, profile);

    info!(
        "Roadmap generated: company={}, track={:?}",
        company, profile.track
    );

    validated(
        Roadmap {
            company: company.to_string(),
            skills: to_strings(profile.skills),
            certifications: to_strings(profile.certifications),
            projects,
            interview_process: interview_process(profile.track),
            weekly_plan,
            resume_tips,
        },
        FAILURE,
    )
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_projects(company: &str, skills: &[&str]) -> Vec<Project> {
    let first = skills.first().copied().unwrap_or(STACK_FALLBACK);
    let second = skills.get(1).copied().unwrap_or(STACK_FALLBACK);
    let cloud = if skills.contains(&"AWS") {
        "AWS"
    } else if skills.contains(&"Azure") {
        "Azure"
    } else {
        "cloud"
    };

    vec![
        Project {
            title: format!("Full-Stack {company} Clone"),
            description: format!(
                "Build a simplified version of {company}'s core product using {first} and {second}. \
                 Implement key features like authentication, data management, and responsive UI. \
                 Deploy to cloud platform with CI/CD pipeline."
            ),
        },
        Project {
            title: "System Design Project".to_string(),
            description: format!(
                "Design and implement a scalable microservices architecture for a high-traffic application. \
                 Use {cloud} services for deployment, implement caching, load balancing, and monitoring."
            ),
        },
        Project {
            title: "Algorithm & Data Structures Portfolio".to_string(),
            description: format!(
                "Create a GitHub repository with 50+ LeetCode solutions in {first}. \
                 Focus on medium and hard problems. Include detailed explanations, \
                 time/space complexity analysis, and multiple approaches for each problem."
            ),
        },
    ]
}

fn interview_process(track: HiringTrack) -> Vec<InterviewStage> {
    let stages: &[(&str, &str)] = match track {
        HiringTrack::BigTech => &[
            (
                "Initial Screening",
                "15-30 minute phone call with recruiter. Discuss your background, interest in the company, and basic technical qualifications. Prepare your elevator pitch.",
            ),
            (
                "Online Assessment",
                "1-2 hour coding challenge on a platform like HackerRank. Typically 2-3 algorithmic problems. Focus on correctness, efficiency, and code quality.",
            ),
            (
                "Technical Phone Screen",
                "45-60 minute video call with an engineer. Live coding problem solving (1-2 medium LeetCode problems). Use a collaborative editor. Think out loud.",
            ),
            (
                "Virtual Onsite (4-5 rounds)",
                "Full day of back-to-back interviews covering: coding (2 rounds), system design (1 round), behavioral (1-2 rounds). Each 45-60 minutes.",
            ),
            (
                "Hiring Committee Review",
                "Your interview feedback is reviewed by hiring committee. This can take 1-2 weeks. They evaluate technical skills, culture fit, and leveling.",
            ),
        ],
        HiringTrack::General => &[
            (
                "Initial Screening",
                "Phone call with recruiter or hiring manager. Discuss your experience, motivations, and general fit for the role.",
            ),
            (
                "Technical Interview",
                "1-2 rounds of technical interviews covering coding, problem-solving, and relevant technologies. May include live coding or take-home assignment.",
            ),
            (
                "Team Interview",
                "Meet with potential team members. Discuss past projects, collaboration style, and technical depth. Focus on cultural fit and teamwork.",
            ),
            (
                "Final Interview",
                "Meeting with senior leadership or hiring manager. High-level technical discussion, career goals, and compensation negotiation.",
            ),
        ],
    };

    stages
        .iter()
        .map(|(stage, description)| InterviewStage {
            stage: stage.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn build_weekly_plan(company: &str, first_skill: &str, projects: &[Project]) -> Vec<WeekPlan> {
    let project = |i: usize| {
        projects
            .get(i)
            .map(|p| p.title.as_str())
            .unwrap_or("a portfolio project")
    };

    let week = |label: &str, tasks: Vec<String>| WeekPlan {
        week: label.to_string(),
        tasks,
    };

    vec![
        week(
            "Week 1-2: Foundations",
            vec![
                "Review data structures: arrays, linked lists, stacks, queues, hash tables".to_string(),
                "Practice 15-20 easy LeetCode problems".to_string(),
                format!("Set up development environment with {first_skill}"),
                format!("Research {company} products, culture, and recent news"),
                "Update resume with quantifiable achievements".to_string(),
            ],
        ),
        week(
            "Week 3-4: Algorithm Mastery",
            vec![
                "Study algorithms: sorting, searching, dynamic programming, graphs".to_string(),
                "Practice 20-25 medium LeetCode problems".to_string(),
                format!("Start building project #1: {}", project(0)),
                "Practice explaining your thought process out loud".to_string(),
                "Mock interview with friend or platform like Pramp".to_string(),
            ],
        ),
        week(
            "Week 5-6: System Design",
            vec![
                "Study system design fundamentals: scalability, databases, caching, load balancing".to_string(),
                "Read 'Designing Data-Intensive Applications' or 'System Design Interview' book".to_string(),
                format!("Complete project #2: {}", project(1)),
                "Practice 3-5 system design problems".to_string(),
                format!("Join {company} technical communities and forums"),
            ],
        ),
        week(
            "Week 7: Behavioral Prep",
            vec![
                "Prepare STAR method stories for 10+ scenarios".to_string(),
                format!("Practice behavioral questions specific to {company} culture"),
                format!("Complete project #3: {}", project(2)),
                "Practice 5-10 hard LeetCode problems".to_string(),
                "Research salary ranges and prepare negotiation points".to_string(),
            ],
        ),
        week(
            "Week 8: Mock Interviews & Polish",
            vec![
                "Do 3-4 full mock interviews (coding + system design + behavioral)".to_string(),
                "Review and optimize all projects - add READMEs and documentation".to_string(),
                format!("Final resume review with specific {company} keywords"),
                "Practice with timed coding challenges".to_string(),
                "Prepare thoughtful questions to ask interviewers".to_string(),
            ],
        ),
    ]
}

fn build_resume_tips(company: &str, profile: &CompanyProfile) -> Vec<String> {
    let top_skills: Vec<&str> = profile.skills.iter().take(3).copied().collect();
    let certification = profile
        .certifications
        .first()
        .copied()
        .unwrap_or("industry-recognised certifications");

    vec![
        "Start bullet points with action verbs and quantify impact (e.g., 'Reduced load time by 40%')".to_string(),
        format!(
            "Highlight technologies that align with {company}'s stack: {}",
            top_skills.join(", ")
        ),
        "Include 2-3 impressive projects with GitHub links and live demos".to_string(),
        "Keep it to 1-2 pages with clear section headers and consistent formatting".to_string(),
        format!("Mention relevant certifications: {certification}"),
        "Use keywords from the job description naturally throughout your resume".to_string(),
        "Add metrics to every achievement (users served, performance gains, cost savings)".to_string(),
        "Include education, but keep it brief if you have 3+ years of experience".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_company_profile() {
        let roadmap = generate_roadmap("Amazon Web Services").unwrap();
        assert_eq!(roadmap.skills[0], "Java");
        assert_eq!(roadmap.certifications[0], "AWS Solutions Architect");
        assert_eq!(roadmap.interview_process.len(), 5);
        assert_eq!(roadmap.interview_process[4].stage, "Hiring Committee Review");
    }

    #[test]
    fn test_unknown_company_uses_default_profile() {
        let roadmap = generate_roadmap("  Acme Corp ").unwrap();
        assert_eq!(roadmap.company, "Acme Corp");
        assert_eq!(roadmap.skills.len(), 10);
        assert_eq!(roadmap.interview_process.len(), 4);
        assert_eq!(roadmap.projects[0].title, "Full-Stack Acme Corp Clone");
    }

    #[test]
    fn test_cloud_choice_in_system_design_project() {
        let netflix = generate_roadmap("Netflix").unwrap();
        assert!(netflix.projects[1].description.contains("Use AWS services"));
        let microsoft = generate_roadmap("Microsoft").unwrap();
        assert!(microsoft.projects[1].description.contains("Use Azure services"));
        let google = generate_roadmap("Google").unwrap();
        assert!(google.projects[1].description.contains("Use cloud services"));
    }

    #[test]
    fn test_plan_and_tips_shape() {
        let roadmap = generate_roadmap("Meta").unwrap();
        assert_eq!(roadmap.weekly_plan.len(), 5);
        assert!(roadmap.weekly_plan.iter().all(|w| w.tasks.len() == 5));
        assert_eq!(roadmap.resume_tips.len(), 8);
        assert!(roadmap.resume_tips[1].ends_with("React, JavaScript, Python"));
        assert!(roadmap.weekly_plan[1].tasks[2].contains("Full-Stack Meta Clone"));
    }

    #[test]
    fn test_every_profile_has_enough_entries() {
        for profile in COMPANY_PROFILES.iter().chain(std::iter::once(&DEFAULT_PROFILE)) {
            assert!(profile.skills.len() >= 3);
            assert!(!profile.certifications.is_empty());
        }
    }

    #[test]
    fn test_missing_company_rejected() {
        assert!(matches!(generate_roadmap(""), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(generate_roadmap("Apple").unwrap()).unwrap();
        assert!(json.get("interviewProcess").is_some());
        assert!(json.get("weeklyPlan").is_some());
        assert!(json.get("resumeTips").is_some());
    }
}
