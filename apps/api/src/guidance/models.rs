use serde::Deserialize;

use crate::interpret::ResultSchema;

/// POST /generate-roadmap body. Every field is optional; blanks get defaults
/// when the prompt is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub name: String,
    pub career_goal: String,
    pub current_skills: String,
    pub experience: String,
    pub interests: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub query: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeAnalysisRequest {
    pub resume: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgressRequest {
    pub achievements: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeComparisonRequest {
    pub user_resume: String,
    pub peer_resume: String,
}

/// A validated request for one of the five guidance intents.
#[derive(Debug, Clone)]
pub enum GuidanceRequest {
    Roadmap(RoadmapRequest),
    Chat(ChatRequest),
    ResumeAnalysis(ResumeAnalysisRequest),
    Progress(ProgressRequest),
    ResumeComparison(ResumeComparisonRequest),
}

impl GuidanceRequest {
    pub fn schema(&self) -> ResultSchema {
        match self {
            GuidanceRequest::Roadmap(_) => ResultSchema::Roadmap,
            GuidanceRequest::Chat(_) => ResultSchema::ChatAdvice,
            GuidanceRequest::ResumeAnalysis(_) => ResultSchema::ResumeAnalysis,
            GuidanceRequest::Progress(_) => ResultSchema::Progress,
            GuidanceRequest::ResumeComparison(_) => ResultSchema::ResumeComparison,
        }
    }
}
