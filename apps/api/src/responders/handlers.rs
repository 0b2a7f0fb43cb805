use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::responders::chat::{self, ChatMessage, ChatReply};
use crate::responders::github::{self, GitHubAnalysis};
use crate::responders::interview::{self, InterviewQuestions};
use crate::responders::job_match::{self, JobMatchResult};
use crate::responders::resume_check::{self, ResumeCheckResult};
use crate::responders::roadmap::{self, Roadmap};
use crate::state::AppState;

// Absent fields deserialize to empty strings so the responder reports them as
// missing input rather than axum rejecting the body.

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobMatchRequest {
    pub resume: String,
    pub job_description: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeCheckRequest {
    pub resume_text: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubRequest {
    pub github_url: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub company_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// POST /api/analyze-job
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    payload: Result<Json<JobMatchRequest>, JsonRejection>,
) -> Result<Json<JobMatchResult>, AppError> {
    let Json(req) = payload?;
    let result = job_match::analyze_job_match(&req.resume, &req.job_description, &state.engine)?;
    Ok(Json(result))
}

/// POST /api/check-resume
pub async fn handle_check_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeCheckRequest>, JsonRejection>,
) -> Result<Json<ResumeCheckResult>, AppError> {
    let Json(req) = payload?;
    Ok(Json(resume_check::check_resume(&req.resume_text, &state.engine)?))
}

/// POST /api/analyze-github
pub async fn handle_analyze_github(
    State(state): State<AppState>,
    payload: Result<Json<GitHubRequest>, JsonRejection>,
) -> Result<Json<GitHubAnalysis>, AppError> {
    let Json(req) = payload?;
    let analysis =
        github::analyze_github(&req.github_url, state.profiles.as_ref(), &state.engine).await?;
    Ok(Json(analysis))
}

/// POST /api/generate-interview
pub async fn handle_generate_interview(
    State(state): State<AppState>,
    payload: Result<Json<JobMatchRequest>, JsonRejection>,
) -> Result<Json<InterviewQuestions>, AppError> {
    let Json(req) = payload?;
    let questions =
        interview::generate_questions(&req.resume, &req.job_description, &state.engine)?;
    Ok(Json(questions))
}

/// POST /api/generate-roadmap
pub async fn handle_generate_roadmap(
    payload: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<Roadmap>, AppError> {
    let Json(req) = payload?;
    Ok(Json(roadmap::generate_roadmap(&req.company_name)?))
}

/// POST /api/career-chat
pub async fn handle_career_chat(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(req) = payload?;
    Ok(Json(chat::reply(&req.messages)?))
}
