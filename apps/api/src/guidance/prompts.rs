// Prompt templates for the guidance intents.
// Placeholders are filled by llm_client::prompts::fill_template; user text is
// embedded verbatim.

use crate::guidance::models::GuidanceRequest;
use crate::llm_client::prompts::{
    fill_template, or_default, NONE_LISTED, PLAIN_BULLETS_INSTRUCTION, STRICT_JSON_INSTRUCTION,
};

/// Replace: {name}, {career_goal}, {current_skills}, {experience}, {interests}, {strict_json}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Generate a detailed career roadmap for {name}, who wants to become a {career_goal}.
Current skills: {current_skills}.
Experience level: {experience}.
Interests: {interests}.

Provide a step-by-step plan with:
- 3-5 milestones with specific titles, timeframes (e.g., '0-6 months'), and detailed descriptions.
- For each milestone, 3-5 specific skills to learn, tailored to the career goal and current skills.
- 2-4 actionable resources per milestone (websites, courses, books) with names and URLs where possible.
- A practical, motivating progression from {experience} level to working as a {career_goal}.

Return a JSON ARRAY with this structure:
[
  {
    "milestone": "title",
    "timeframe": "duration",
    "description": "detailed text",
    "skills": ["skill1", "skill2"],
    "resources": [{"name": "resource name", "url": "resource url"}]
  }
]

The array must be enclosed in square brackets. {strict_json}"#;

/// Replace: {query}, {plain_bullets}
pub const CHAT_PROMPT_TEMPLATE: &str = r#"You are a personal career guidance mentor. Respond to the user query: "{query}" with short, concise, and practical advice in bullet points.
- Keep each point brief (1-2 sentences max).
- Focus on actionable steps, key skills, or resources relevant to career development.
- Use a friendly, encouraging tone.
- {plain_bullets}"#;

/// Replace: {resume}, {strict_json}
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume text: "{resume}".

Provide a detailed summary with:
- "skills": 5-7 key skills identified (e.g., ["Python", "Project Management"]).
- "strengths": 3-5 strengths based on the resume (e.g., ["Strong coding skills"]).
- "weaknesses": 3-5 areas for improvement (e.g., ["Limited leadership experience"]).
- "career_options": 4 potential career paths, each with a fit score (0-100) and a brief reason.
- "improvements": 5 specific suggestions for improving the resume (e.g., ["Add quantifiable achievements"]).
- "experience_level": the estimated level ("Entry", "Mid", "Senior") with a confidence score (0-100).

Return a JSON object with this structure:
{
  "skills": ["skill1", "skill2"],
  "strengths": ["strength1", "strength2"],
  "weaknesses": ["weakness1", "weakness2"],
  "career_options": [{"name": "career1", "fit": 85, "reason": "reason1"}],
  "improvements": ["suggestion1", "suggestion2"],
  "experience_level": {"level": "Entry", "confidence": 80}
}

{strict_json}"#;

/// Replace: {achievements}, {strict_json}
pub const PROGRESS_PROMPT_TEMPLATE: &str = r#"Analyze the following weekly achievements: "{achievements}".

Provide:
- "progress_score": a score (0-100) reflecting the quality and impact of the achievements.
- "suggestions": 3-5 specific, actionable suggestions to improve next week's progress (e.g., ["Focus on advanced Python topics"]).
- "week": the current week number (infer it from context, or increment from previous entries).

Return a JSON object with this structure:
{
  "progress_score": 75,
  "suggestions": ["suggestion1", "suggestion2"],
  "week": 1
}

{strict_json}"#;

/// Replace: {user_resume}, {peer_resume}, {strict_json}
pub const RESUME_COMPARISON_PROMPT_TEMPLATE: &str = r#"Compare the following two resumes:
- User Resume: "{user_resume}"
- Peer Resume: "{peer_resume}"

Provide:
- "skill_comparison": an object comparing key skills with estimated scores (0-100) for both (e.g., {"Python": {"user": 85, "peer": 70}}).
- "experience_comparison": experience levels ("Entry", "Mid", "Senior") with confidence scores (0-100) for both.
- "insights": 3-5 actionable insights drawn from the comparison (e.g., ["User has stronger technical skills than peer."]).

Return a JSON object with this structure:
{
  "skill_comparison": {"skill1": {"user": 80, "peer": 60}},
  "experience_comparison": {"user": {"level": "Mid", "confidence": 85}, "peer": {"level": "Entry", "confidence": 90}},
  "insights": ["insight1", "insight2"]
}

{strict_json}"#;

/// Builds the model instruction for `request`.
pub fn build_prompt(request: &GuidanceRequest) -> String {
    match request {
        GuidanceRequest::Roadmap(r) => fill_template(
            ROADMAP_PROMPT_TEMPLATE,
            &[
                ("name", or_default(&r.name, "User")),
                ("career_goal", r.career_goal.as_str()),
                ("current_skills", or_default(&r.current_skills, NONE_LISTED)),
                ("experience", or_default(&r.experience, "beginner")),
                ("interests", or_default(&r.interests, NONE_LISTED)),
                ("strict_json", STRICT_JSON_INSTRUCTION),
            ],
        ),
        GuidanceRequest::Chat(r) => fill_template(
            CHAT_PROMPT_TEMPLATE,
            &[
                ("query", r.query.as_str()),
                ("plain_bullets", PLAIN_BULLETS_INSTRUCTION),
            ],
        ),
        GuidanceRequest::ResumeAnalysis(r) => fill_template(
            RESUME_ANALYSIS_PROMPT_TEMPLATE,
            &[("resume", r.resume.as_str()), ("strict_json", STRICT_JSON_INSTRUCTION)],
        ),
        GuidanceRequest::Progress(r) => fill_template(
            PROGRESS_PROMPT_TEMPLATE,
            &[
                ("achievements", r.achievements.as_str()),
                ("strict_json", STRICT_JSON_INSTRUCTION),
            ],
        ),
        GuidanceRequest::ResumeComparison(r) => fill_template(
            RESUME_COMPARISON_PROMPT_TEMPLATE,
            &[
                ("user_resume", r.user_resume.as_str()),
                ("peer_resume", r.peer_resume.as_str()),
                ("strict_json", STRICT_JSON_INSTRUCTION),
            ],
        ),
    }
}
