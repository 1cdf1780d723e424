// AI chat companion: one conversation-type preamble per request, no history.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
