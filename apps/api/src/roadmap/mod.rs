// Learning roadmaps: AI generation with static fallback, plus per-technology
// progress tracking. All LLM calls go through llm_client.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod prompts;
pub mod store;
