//! Career chat: picks one templated answer by keyword priority.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::schema::{check_text, Schema, SchemaViolation};
use crate::errors::AppError;
use crate::responders::validated;

pub const FAILURE: &str = "Failed to process chat";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub content: String,
}

impl Schema for ChatReply {
    fn validate(&self) -> Result<(), SchemaViolation> {
        check_text("content", &self.content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    CareerChange,
    Resume,
    InterviewPrep,
    Learning,
    Salary,
    JobSearch,
    TechTrends,
    Overview,
}

impl Topic {
    /// Rules are checked in declaration order; the first that holds wins.
    pub fn detect(message: &str) -> Self {
        let m = message.to_lowercase();
        let has = |word: &str| m.contains(word);

        if has("career") && (has("change") || has("switch")) {
            Topic::CareerChange
        } else if has("resume") || has("cv") {
            Topic::Resume
        } else if has("interview") && !has("questions") {
            Topic::InterviewPrep
        } else if has("learn") || has("skill") {
            Topic::Learning
        } else if has("salary") || has("negotiat") {
            Topic::Salary
        } else if has("job") && (has("find") || has("search") || has("looking")) {
            Topic::JobSearch
        } else if has("tech") && (has("industry") || has("trend")) {
            Topic::TechTrends
        } else {
            Topic::Overview
        }
    }

    pub fn response(self) -> &'static str {
        match self {
            Topic::CareerChange => CAREER_CHANGE,
            Topic::Resume => RESUME,
            Topic::InterviewPrep => INTERVIEW_PREP,
            Topic::Learning => LEARNING,
            Topic::Salary => SALARY,
            Topic::JobSearch => JOB_SEARCH,
            Topic::TechTrends => TECH_TRENDS,
            Topic::Overview => OVERVIEW,
        }
    }
}

/// Answers the most recent user message. Earlier turns are not consulted.
pub fn reply(messages: &[ChatMessage]) -> Result<ChatReply, AppError> {
    if messages.is_empty() {
        return Err(AppError::Validation("messages are required".to_string()));
    }

    let last_user = messages
        .iter()
        .rev()
        .find(|m| m.role.eq_ignore_ascii_case("user"))
        .map(|m| m.content.as_str())
        .unwrap_or_default();

    let topic = Topic::detect(last_user);
    info!("Chat reply selected: topic={:?}, history={}", topic, messages.len());

    validated(
        ChatReply {
            content: topic.response().to_string(),
        },
        FAILURE,
    )
}

const CAREER_CHANGE: &str = "Making a career change is a significant decision! Here's my advice:\n\n\
1. **Assess Your Skills**: Identify transferable skills from your current role\n\
2. **Research**: Study the new industry's requirements, salary ranges, and growth potential\n\
3. **Bridge the Gap**: Take online courses, earn certifications, or build portfolio projects\n\
4. **Network**: Connect with people in your target field through LinkedIn and industry events\n\
5. **Start Small**: Consider freelance work or side projects to gain experience\n\n\
What specific field are you interested in transitioning to?";

const RESUME: &str = "I'd be happy to help with your resume! Here are key tips:\n\n\
**Structure:**\n\
- Contact info at top (email, phone, LinkedIn, GitHub)\n\
- Professional summary (2-3 lines)\n\
- Work experience (reverse chronological)\n\
- Skills section with relevant technologies\n\
- Education\n\n\
**Content Tips:**\n\
- Use action verbs: 'Developed', 'Led', 'Improved', 'Achieved'\n\
- Quantify everything: 'Increased performance by 40%'\n\
- Keep it to 1-2 pages\n\
- Tailor it to each job posting\n\n\
Use our Resume Checker feature to get detailed feedback on your resume!";

const INTERVIEW_PREP: &str = "Interview preparation is crucial! Here's a comprehensive approach:\n\n\
**Before the Interview:**\n\
- Research the company thoroughly (products, culture, recent news)\n\
- Practice STAR method for behavioral questions\n\
- Prepare 5-10 questions to ask them\n\
- Review the job description and align your experience\n\n\
**Technical Prep:**\n\
- Practice coding problems on LeetCode/HackerRank\n\
- Review system design fundamentals\n\
- Be ready to explain your past projects in detail\n\n\
**During Interview:**\n\
- Think out loud during technical problems\n\
- Ask clarifying questions\n\
- Be honest about what you don't know\n\
- Show enthusiasm and cultural fit\n\n\
Try our Interview Generator to practice with role-specific questions!";

const LEARNING: &str = "Great question about skill development! Here's my framework:\n\n\
**For Beginners:**\n\
1. Start with fundamentals: HTML/CSS/JavaScript for web, or Python for general programming\n\
2. Build small projects as you learn each concept\n\
3. Use free resources: freeCodeCamp, The Odin Project, CS50\n\n\
**For Intermediate:**\n\
1. Learn a framework (React, Angular, Vue for frontend; Node/Django/Spring for backend)\n\
2. Understand databases (SQL and NoSQL)\n\
3. Learn Git and version control\n\
4. Build 2-3 portfolio projects\n\n\
**For Advanced:**\n\
1. Master system design and architecture\n\
2. Learn cloud platforms (AWS/Azure/GCP)\n\
3. Contribute to open source\n\
4. Earn relevant certifications\n\n\
What's your current skill level and what are you interested in learning?";

const SALARY: &str = "Salary negotiation is important! Here's how to approach it:\n\n\
**Research First:**\n\
- Use Glassdoor, Levels.fyi, Payscale to find market rates\n\
- Consider location, experience level, and company size\n\
- Know your minimum acceptable offer\n\n\
**During Negotiation:**\n\
- Let them make the first offer if possible\n\
- Always negotiate - most expect it\n\
- Consider total compensation: salary, bonus, equity, benefits\n\
- Ask for 10-20% more than their initial offer\n\
- Be professional and grateful throughout\n\n\
**What to Say:**\n\
- 'Based on my research and experience, I was expecting something in the range of $X-Y'\n\
- 'I'm very excited about this role. Is there any flexibility in the compensation?'\n\
- 'Could we discuss the equity package and other benefits?'\n\n\
Never accept on the spot - ask for 24-48 hours to consider.";

const JOB_SEARCH: &str = "Job searching can be challenging, but here's a strategic approach:\n\n\
**Where to Look:**\n\
- LinkedIn (set up job alerts)\n\
- Company career pages directly\n\
- AngelList/Wellfound for startups\n\
- Indeed, Glassdoor, ZipRecruiter\n\
- Tech-specific: Hired, Dice, Stack Overflow Jobs\n\n\
**How to Stand Out:**\n\
1. Optimize your LinkedIn profile (professional photo, detailed experience)\n\
2. Network actively - 70% of jobs come through connections\n\
3. Tailor your resume for each application\n\
4. Follow up with recruiters after applying\n\
5. Build a portfolio website with your projects\n\n\
**Application Strategy:**\n\
- Apply to 10-15 jobs per week\n\
- Track all applications in a spreadsheet\n\
- Follow up after 1 week\n\
- Don't wait for perfect matches - apply if you meet 60% of requirements\n\n\
Use our Job Analyzer to see how well your resume matches specific job descriptions!";

const TECH_TRENDS: &str = "The tech industry is constantly evolving! Here are current trends and insights:\n\n\
**Hot Technologies:**\n\
- AI/Machine Learning (huge demand)\n\
- Cloud Computing (AWS, Azure, GCP)\n\
- Cybersecurity\n\
- Full-Stack Development (React, Node.js)\n\
- DevOps and Site Reliability Engineering\n\
- Mobile Development (React Native, Flutter)\n\n\
**Industry Trends:**\n\
- Remote/hybrid work is here to stay\n\
- Companies valuing practical skills over degrees\n\
- Emphasis on soft skills and collaboration\n\
- Shift toward sustainable and ethical tech\n\n\
**Career Advice:**\n\
- Focus on fundamentals - they don't change\n\
- Stay curious and keep learning\n\
- Build a strong online presence\n\
- Contribute to open source\n\
- Network consistently\n\n\
What specific area of tech interests you most?";

const OVERVIEW: &str = "I'm Career Compass, your career advisor! I can help you with:\n\n\
📝 **Resume & CV**: Tips for writing, formatting, and optimizing for ATS\n\
💼 **Job Search**: Strategies for finding opportunities and standing out\n\
🎯 **Interview Prep**: Technical and behavioral interview preparation\n\
📚 **Skill Development**: Learning paths and resources for tech skills\n\
💰 **Salary Negotiation**: How to negotiate offers effectively\n\
🚀 **Career Planning**: Transitioning roles, career growth, and goal setting\n\
🏢 **Company Research**: Insights on tech companies and interview processes\n\n\
Try our other features:\n\
- **Resume Checker**: Upload your resume for detailed ATS analysis\n\
- **Job Analyzer**: See how well your resume matches a job description\n\
- **Interview Generator**: Get personalized interview questions\n\
- **Career Roadmap**: Create preparation plans for target companies\n\
- **GitHub Analyzer**: Analyze your GitHub profile for recruiting\n\n\
What would you like help with today?";
