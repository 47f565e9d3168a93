//! Static substitute payloads, served whenever the model call or its
//! interpretation fails. Each one satisfies the same schema as a real result.

use serde_json::{json, Value};

use crate::guidance::models::GuidanceRequest;

pub const FALLBACK_PROGRESS_SCORE: u32 = 50;

/// Returns the fallback payload for `request`. Never fails.
///
/// The progress fallback carries no `week`; the progress store assigns one.
pub fn fallback_for(request: &GuidanceRequest) -> Value {
    match request {
        GuidanceRequest::Roadmap(r) => roadmap_fallback(&r.career_goal),
        GuidanceRequest::Chat(_) => json!({
            "response": "- Sorry, I couldn't process that.\n- Try asking again!"
        }),
        GuidanceRequest::ResumeAnalysis(_) => resume_analysis_fallback(),
        GuidanceRequest::Progress(_) => json!({
            "progress_score": FALLBACK_PROGRESS_SCORE,
            "suggestions": [
                "Try completing a small project this week.",
                "Focus on a new skill like time management.",
                "Review your achievements for clarity."
            ]
        }),
        GuidanceRequest::ResumeComparison(_) => resume_comparison_fallback(),
    }
}

fn roadmap_fallback(career_goal: &str) -> Value {
    json!([
        {
            "milestone": format!("Start Your {career_goal} Journey"),
            "timeframe": "0-6 months",
            "description": format!(
                "Begin your path to becoming a {career_goal} with foundational skills."
            ),
            "skills": ["Skill 1", "Skill 2", "Skill 3"],
            "resources": [
                {"name": "Example Course", "url": "https://example.com"},
                {"name": "Tutorial Site", "url": "https://tutorial.com"}
            ]
        },
        {
            "milestone": "Build Practical Experience",
            "timeframe": "6-12 months",
            "description": format!("Apply your skills to real-world {career_goal} projects."),
            "skills": ["Project Skill 1", "Project Skill 2"],
            "resources": [
                {"name": "GitHub", "url": "https://github.com"},
                {"name": "Docs", "url": "https://docs.example.com"}
            ]
        }
    ])
}

fn resume_analysis_fallback() -> Value {
    json!({
        "skills": ["Communication", "Teamwork", "Problem Solving", "Time Management", "Adaptability"],
        "strengths": ["Good communication", "Team collaboration", "Quick learner"],
        "weaknesses": ["Limited technical skills", "No leadership roles", "Few projects listed"],
        "career_options": [
            {"name": "Project Manager", "fit": 70, "reason": "Strong teamwork skills"},
            {"name": "Customer Support", "fit": 65, "reason": "Effective communication"},
            {"name": "Sales Representative", "fit": 60, "reason": "Adaptability"},
            {"name": "Junior Analyst", "fit": 55, "reason": "Problem-solving ability"}
        ],
        "improvements": [
            "Add specific skills like programming languages.",
            "Include more work experience details.",
            "Use action verbs for impact.",
            "Quantify achievements (e.g., 'increased sales by 20%').",
            "Highlight any certifications."
        ],
        "experience_level": {"level": "Entry", "confidence": 80}
    })
}

fn resume_comparison_fallback() -> Value {
    json!({
        "skill_comparison": {
            "Python": {"user": 85, "peer": 70},
            "Java": {"user": 70, "peer": 80},
            "Teamwork": {"user": 90, "peer": 85}
        },
        "experience_comparison": {
            "user": {"level": "Mid", "confidence": 85},
            "peer": {"level": "Entry", "confidence": 90}
        },
        "insights": [
            "User has stronger Python skills than peer.",
            "Peer excels in Java; consider learning from them.",
            "User's experience is more advanced than peer's."
        ]
    })
}
