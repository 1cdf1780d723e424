/// Summarization prompt template. Replace `{text}` before sending.
pub const SUMMARIZE_PROMPT_TEMPLATE: &str = "Please provide a comprehensive and well-structured summary of the following text.

Instructions:
- Create a clear, concise summary that captures the main points
- Use bullet points or numbered lists where appropriate
- Maintain the key insights and important details
- Keep the summary between 150-300 words depending on the original length
- Use professional and clear language
- Structure the summary with headings if the content is complex

Text to summarize:
{text}";
