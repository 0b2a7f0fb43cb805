//! Interview questions: a fixed bank, filtered by the skills the resume and job
//! description share, the first skill gap, and the role's seniority.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::dictionaries::{
    CLOUD_TRIGGERS, FRONTEND_TRIGGERS, JAVASCRIPT_TRIGGERS, PYTHON_TRIGGERS, SENIORITY_MARKERS,
    SQL_TRIGGERS, TECH_SKILLS,
};
use crate::analysis::extractor::{extract_terms, mentions_any};
use crate::analysis::schema::{check_max_len, check_non_empty, check_text, Schema, SchemaViolation};
use crate::analysis::EngineOptions;
use crate::errors::AppError;
use crate::responders::{display_name, require, validated};

pub const FAILURE: &str = "Failed to generate interview questions";

pub const MAX_QUESTIONS: usize = 12;
/// Below this many questions the maintainability question is appended.
const FILLER_THRESHOLD: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    #[serde(rename = "System Design")]
    SystemDesign,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub category: QuestionCategory,
    pub question: String,
    pub tip: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestions {
    pub questions: Vec<Question>,
}

impl Schema for InterviewQuestions {
    fn validate(&self) -> Result<(), SchemaViolation> {
        check_non_empty("questions", &self.questions)?;
        check_max_len("questions", &self.questions, MAX_QUESTIONS)?;
        for (i, q) in self.questions.iter().enumerate() {
            check_text(&format!("questions[{i}].question"), &q.question)?;
            check_text(&format!("questions[{i}].tip"), &q.tip)?;
        }
        Ok(())
    }
}

struct Template {
    category: QuestionCategory,
    difficulty: Difficulty,
    question: &'static str,
    tip: &'static str,
}

impl Template {
    fn to_question(&self) -> Question {
        Question {
            category: self.category,
            question: self.question.to_string(),
            tip: self.tip.to_string(),
            difficulty: self.difficulty,
        }
    }
}

/// Technical questions asked when both documents mention one of the triggers.
const SKILL_QUESTIONS: &[(&[&str], Template)] = &[
    (
        JAVASCRIPT_TRIGGERS,
        Template {
            category: QuestionCategory::Technical,
            difficulty: Difficulty::Easy,
            question: "Explain the difference between var, let, and const in JavaScript. When would you use each?",
            tip: "Focus on scope, hoisting, and immutability. Provide real-world examples of when each is appropriate.",
        },
    ),
    (
        FRONTEND_TRIGGERS,
        Template {
            category: QuestionCategory::Technical,
            difficulty: Difficulty::Medium,
            question: "How do you optimize performance in a React application? Describe specific techniques you've used.",
            tip: "Mention React.memo, useMemo, useCallback, code splitting, lazy loading, and virtual scrolling. Share concrete examples from your experience.",
        },
    ),
    (
        PYTHON_TRIGGERS,
        Template {
            category: QuestionCategory::Technical,
            difficulty: Difficulty::Medium,
            question: "Explain Python decorators and provide an example of when you would use them.",
            tip: "Demonstrate understanding of higher-order functions. Common use cases include logging, authentication, and caching.",
        },
    ),
    (
        SQL_TRIGGERS,
        Template {
            category: QuestionCategory::Technical,
            difficulty: Difficulty::Medium,
            question: "How would you optimize a slow SQL query? Walk me through your debugging process.",
            tip: "Discuss EXPLAIN plans, indexing strategies, query rewriting, and avoiding N+1 queries. Use specific examples.",
        },
    ),
    (
        CLOUD_TRIGGERS,
        Template {
            category: QuestionCategory::Technical,
            difficulty: Difficulty::Medium,
            question: "Describe your experience with cloud services. How do you ensure security and cost optimization?",
            tip: "Cover IAM, VPC, security groups, cost monitoring tools, and resource tagging. Mention specific services you've used.",
        },
    ),
];

const SENIOR_DESIGN: &[Template] = &[
    Template {
        category: QuestionCategory::SystemDesign,
        difficulty: Difficulty::Hard,
        question: "Design a scalable URL shortening service like bit.ly. How would you handle millions of requests per day?",
        tip: "Cover database design, hashing algorithms, caching strategies, load balancing, and monitoring. Discuss trade-offs between different approaches.",
    },
    Template {
        category: QuestionCategory::SystemDesign,
        difficulty: Difficulty::Hard,
        question: "How would you design a real-time notification system for a social media platform?",
        tip: "Discuss WebSockets vs Server-Sent Events, message queues, database design for fan-out, and handling scale. Consider reliability and latency requirements.",
    },
];

const JUNIOR_DESIGN: &[Template] = &[Template {
    category: QuestionCategory::SystemDesign,
    difficulty: Difficulty::Medium,
    question: "Explain how you would design a simple e-commerce checkout flow. What components would you need?",
    tip: "Cover user authentication, shopping cart management, payment processing, inventory checks, and order confirmation. Discuss API design and data flow.",
}];

/// Problem-solving then behavioural questions, asked of everyone.
const ALWAYS_ASKED: &[Template] = &[
    Template {
        category: QuestionCategory::ProblemSolving,
        difficulty: Difficulty::Medium,
        question: "Describe a complex technical problem you encountered and how you solved it.",
        tip: "Use the STAR method: Situation, Task, Action, Result. Be specific about the problem, your approach, and the measurable outcome. Show your debugging and analytical skills.",
    },
    Template {
        category: QuestionCategory::ProblemSolving,
        difficulty: Difficulty::Medium,
        question: "How do you approach debugging a production issue that you can't reproduce locally?",
        tip: "Discuss logging, monitoring tools, error tracking, hypothesis-driven debugging, and working with production data safely. Mention specific tools you've used.",
    },
    Template {
        category: QuestionCategory::Behavioral,
        difficulty: Difficulty::Easy,
        question: "Tell me about a time when you had to learn a new technology quickly for a project.",
        tip: "Use STAR method. Emphasize your learning process, resources you used, and how you applied the knowledge successfully. Show adaptability.",
    },
    Template {
        category: QuestionCategory::Behavioral,
        difficulty: Difficulty::Medium,
        question: "Describe a situation where you disagreed with a team member about a technical decision. How did you handle it?",
        tip: "Show collaboration skills, respect for others' opinions, and ability to find compromise. Focus on the problem-solving process rather than winning the argument.",
    },
    Template {
        category: QuestionCategory::Behavioral,
        difficulty: Difficulty::Easy,
        question: "Tell me about a time when you had to balance multiple competing priorities. How did you manage your time?",
        tip: "Discuss prioritization frameworks, communication with stakeholders, and delivering results under pressure. Show organizational skills.",
    },
];

const MAINTAINABILITY: Template = Template {
    category: QuestionCategory::Technical,
    difficulty: Difficulty::Easy,
    question: "What is your approach to writing maintainable code? How do you ensure code quality in your projects?",
    tip: "Discuss code reviews, testing strategies (unit, integration, e2e), documentation, naming conventions, and design patterns. Mention specific tools and practices.",
};

fn gap_question(skill: &str) -> Question {
    let skill = display_name(skill);
    Question {
        category: QuestionCategory::Technical,
        question: format!(
            "I see the role requires {skill} experience. Can you tell me about your familiarity with {skill}?"
        ),
        tip: format!(
            "Be honest about your experience level. If you haven't used {skill} professionally, \
             mention similar technologies you've used and your ability to learn quickly. \
             Highlight any personal projects or coursework."
        ),
        difficulty: Difficulty::Hard,
    }
}

pub fn generate_questions(
    resume: &str,
    job_description: &str,
    options: &EngineOptions,
) -> Result<InterviewQuestions, AppError> {
    let resume = require("resume", resume)?;
    let job_description = require("jobDescription", job_description)?;
    let mode = options.match_mode;

    let resume_skills = extract_terms(resume, TECH_SKILLS, mode);
    let job_skills = extract_terms(job_description, TECH_SKILLS, mode);
    let shared: Vec<&str> = job_skills
        .iter()
        .copied()
        .filter(|s| resume_skills.contains(s))
        .collect();
    let first_gap = job_skills.iter().find(|s| !resume_skills.contains(s));
    let senior = mentions_any(job_description, SENIORITY_MARKERS, mode);

    let mut questions: Vec<Question> = SKILL_QUESTIONS
        .iter()
        .filter(|(triggers, _)| triggers.iter().any(|t| shared.contains(t)))
        .map(|(_, template)| template.to_question())
        .collect();

    if let Some(skill) = first_gap {
        questions.push(gap_question(skill));
    }

    let design = if senior { SENIOR_DESIGN } else { JUNIOR_DESIGN };
    questions.extend(design.iter().map(Template::to_question));
    questions.extend(ALWAYS_ASKED.iter().map(Template::to_question));

    if questions.len() < FILLER_THRESHOLD {
        questions.push(MAINTAINABILITY.to_question());
    }
    questions.truncate(MAX_QUESTIONS);

    info!(
        "Interview questions generated: count={}, shared_skills={}, senior={}",
        questions.len(),
        shared.len(),
        senior
    );

    validated(InterviewQuestions { questions }, FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(resume: &str, jd: &str) -> Vec<Question> {
        generate_questions(resume, jd, &EngineOptions::default())
            .unwrap()
            .questions
    }

    #[test]
    fn test_react_non_senior() {
        let questions = generate(
            "Frontend developer building React apps.",
            "Join our team to build React interfaces.",
        );

        let react: Vec<&Question> = questions
            .iter()
            .filter(|q| q.question.contains("React application"))
            .collect();
        assert_eq!(react.len(), 1);
        assert_eq!(react[0].category, QuestionCategory::Technical);
        assert_eq!(react[0].difficulty, Difficulty::Medium);

        let design: Vec<&Question> = questions
            .iter()
            .filter(|q| q.category == QuestionCategory::SystemDesign)
            .collect();
        assert_eq!(design.len(), 1);
        assert_eq!(design[0].difficulty, Difficulty::Medium);
        assert!(questions.len() <= MAX_QUESTIONS);
    }

    #[test]
    fn test_senior_role_gets_two_hard_design_questions() {
        let questions = generate("Rust engineer.", "Senior Rust engineer, 8+ years.");
        let design: Vec<&Question> = questions
            .iter()
            .filter(|q| q.category == QuestionCategory::SystemDesign)
            .collect();
        assert_eq!(design.len(), 2);
        assert!(design.iter().all(|q| q.difficulty == Difficulty::Hard));
    }

    #[test]
    fn test_first_gap_skill_question() {
        let questions = generate("Python developer.", "We need Python and Kubernetes.");
        let gap = questions
            .iter()
            .find(|q| q.difficulty == Difficulty::Hard)
            .expect("gap question");
        assert!(gap.question.contains("Kubernetes"));
    }

    #[test]
    fn test_filler_added_when_few_questions() {
        // No shared skills, no gap: design (1) + always asked (5) = 6 < 10.
        let questions = generate("I like hiking.", "We value curiosity.");
        assert_eq!(questions.len(), 7);
        assert!(questions
            .last()
            .is_some_and(|q| q.question.contains("maintainable code")));
    }

    #[test]
    fn test_capped_at_twelve() {
        let text = "JavaScript React Python SQL AWS";
        let questions = generate(text, &format!("Senior role. {text} Kubernetes"));
        // 5 skill + 1 gap + 2 design + 5 always = 13
        assert_eq!(questions.len(), MAX_QUESTIONS);
    }

    #[test]
    fn test_missing_input_rejected() {
        let err = generate_questions("resume", " ", &EngineOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_category_serializes_with_spaces() {
        assert_eq!(
            serde_json::to_string(&QuestionCategory::SystemDesign).unwrap(),
            "\"System Design\""
        );
        assert_eq!(
            serde_json::to_string(&QuestionCategory::ProblemSolving).unwrap(),
            "\"Problem Solving\""
        );
    }
}
