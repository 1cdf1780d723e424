// All LLM prompt constants for the Roadmap module.

/// Roadmap generation prompt template.
/// Replace: {technology_name}, {current_knowledge}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a personalized learning roadmap for someone who wants to learn {technology_name}.

Current Knowledge: {current_knowledge}

Please generate a structured learning roadmap with exactly 3 levels (Beginner, Intermediate, Advanced).

For each level, provide:
1. A clear title for that learning phase
2. A description of what they'll accomplish in this phase
3. 5-6 specific skills they need to learn
4. 4-5 detailed topics, where each topic includes:
   - Topic name
   - 3-5 subtopics to cover within that topic
   - 2-3 recommended learning resources (books, courses, tutorials)
   - Estimated study hours for that topic
5. Estimated duration for completing this level

Format your response as a JSON array with this exact structure:
[
  {
    "level": "Beginner",
    "title": "Phase Title",
    "description": "What they'll learn and accomplish",
    "skills": ["Skill 1", "Skill 2", "Skill 3", "Skill 4", "Skill 5"],
    "topics": [
      {
        "name": "Topic Name",
        "subtopics": ["Subtopic 1", "Subtopic 2", "Subtopic 3", "Subtopic 4"],
        "resources": ["Resource 1", "Resource 2", "Resource 3"],
        "estimatedHours": 20
      }
    ],
    "duration": "X-Y months"
  }
]

Make the subtopics very specific and actionable. Resources should include a mix of free and paid options like courses, books, documentation, and tutorials. Estimated hours should be realistic for mastering each topic."#;

pub const BUSY_MESSAGE: &str =
    "AI service is currently busy. Here's a comprehensive roadmap based on industry standards.";

pub const QUOTA_MESSAGE: &str =
    "API quota exceeded. Here's a comprehensive roadmap based on industry standards.";

pub const UNAVAILABLE_MESSAGE: &str =
    "Unable to generate AI roadmap. Here's a comprehensive roadmap based on industry standards.";
