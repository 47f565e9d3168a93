// Career guidance endpoints: roadmap, chat advice, resume analysis, progress
// tracking and resume comparison.
// All model calls go through the CompletionGateway in AppState.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
