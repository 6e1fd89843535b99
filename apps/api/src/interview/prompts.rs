// All LLM prompt constants for the Interview module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{JSON_STRING_ARRAY_ONLY, VOICE_GUIDELINES};
use crate::models::interview::InterviewRequest;

/// Question generation prompt template.
/// Replace: {resume}, {job_title}, {company}, {job_description}, {count},
///          {difficulty}, {json_instruction}, {voice_guidelines}
///
/// Fields are inserted verbatim. Nothing is escaped.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"You are an expert technical interviewer with deep experience in assessing candidates for roles in technology companies. Your task is to create tailored interview questions based on the candidate's resume and the job description provided.

Resume:
{resume}

Job Description for the {job_title} position at {company}:
{job_description}

Step 1: Analyze the alignment between the candidate and the job by:
- Extracting key technical and soft skills from both the resume and the job description
- Evaluating the candidate's experience level relative to the role
- Highlighting major responsibilities outlined in the job description
- Identifying any technical or experience gaps
- Considering potential cultural fit based on the company's known values and role expectations

Step 2: Generate exactly {count} interview questions that:
- Reflect a {difficulty} difficulty level
- Include a balance of technical and behavioral questions
- Target areas where there are skill gaps or high-value responsibilities
- Assess both required competencies and alignment with company culture
- Are directly relevant to the {job_title} position at {company}

{json_instruction}

{voice_guidelines}"#;

/// Builds the question generation prompt for one request.
pub fn build_question_prompt(request: &InterviewRequest) -> String {
    // Fixed fragments first so placeholders inside user text are left alone.
    QUESTION_PROMPT_TEMPLATE
        .replace("{json_instruction}", JSON_STRING_ARRAY_ONLY)
        .replace("{voice_guidelines}", VOICE_GUIDELINES)
        .replace("{count}", &request.number_of_questions.to_string())
        .replace("{difficulty}", request.difficulty_level.as_str())
        .replace("{job_title}", &request.job_title)
        .replace("{company}", &request.company_name)
        .replace("{job_description}", &request.job_description)
        .replace("{resume}", &request.resume_content)
}
