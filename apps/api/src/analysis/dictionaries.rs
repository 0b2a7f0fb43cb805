//! Keyword Dictionaries: the one canonical vocabulary every responder reads from.
//!
//! All terms are lowercase. Order matters: extraction returns matches in
//! dictionary order, so reordering a list changes response ordering.

/// Bumped whenever a list below gains or loses a term.
pub const DICTIONARY_VERSION: &str = "2024.1";

/// Recognised technical skills.
pub const TECH_SKILLS: &[&str] = &[
    // Programming languages
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "go",
    "rust",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    // Frontend
    "react",
    "vue",
    "angular",
    "next.js",
    "nuxt",
    "svelte",
    "html",
    "css",
    "sass",
    "tailwind",
    "bootstrap",
    // Backend
    "node",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "fastapi",
    "rails",
    "laravel",
    "graphql",
    "rest",
    "api",
    "microservices",
    // Databases
    "sql",
    "nosql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "dynamodb",
    "elasticsearch",
    "firebase",
    "supabase",
    // Cloud & DevOps
    "aws",
    "azure",
    "gcp",
    "cloud",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "github actions",
    "ci/cd",
    "devops",
    "security",
    // Data & AI
    "machine learning",
    "deep learning",
    "data science",
    "analytics",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
    // Tools
    "git",
    "jira",
    "figma",
    "postman",
    "webpack",
    "vite",
];

/// Recognised soft skills and working practices.
pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem-solving",
    "problem solving",
    "critical thinking",
    "time management",
    "adaptability",
    "creativity",
    "collaboration",
    "presentation",
    "mentoring",
    "project management",
    "stakeholder management",
    "agile",
    "scrum",
];

/// Verbs an ATS rewards at the start of a bullet.
pub const ACTION_VERBS: &[&str] = &[
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "designed",
    "achieved",
    "improved",
    "increased",
    "reduced",
];

/// A job description containing any of these is treated as a senior role.
pub const SENIORITY_MARKERS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "architect",
    "manager",
    "10+",
    "10 years",
    "8+",
    "8 years",
];

// Personality-trait markers. A resume mentioning any marker lands in the
// trait's high band.
pub const ANALYTICAL_MARKERS: &[&str] = &["data", "analysis"];
pub const CREATIVE_MARKERS: &[&str] = &["design", "creative"];
pub const LEADERSHIP_MARKERS: &[&str] = &["lead", "manage"];
pub const COLLABORATIVE_MARKERS: &[&str] = &["team", "collaborate"];

// Interview-question trigger groups, matched against the skills both
// documents share.
pub const JAVASCRIPT_TRIGGERS: &[&str] = &["javascript", "typescript"];
pub const FRONTEND_TRIGGERS: &[&str] = &["react", "vue", "angular"];
pub const PYTHON_TRIGGERS: &[&str] = &["python"];
pub const SQL_TRIGGERS: &[&str] = &["sql", "postgresql", "mysql"];
pub const CLOUD_TRIGGERS: &[&str] = &["aws", "azure", "cloud"];
