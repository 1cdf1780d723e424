// AI text summarizer. All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
