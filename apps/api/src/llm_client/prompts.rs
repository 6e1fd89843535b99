// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Demands a bare JSON array of strings. Gemini has no system prompt slot on the
/// plain `generateContent` call, so this is appended to the user prompt.
pub const JSON_STRING_ARRAY_ONLY: &str = "\
CRITICAL: You must return ONLY a valid JSON array of strings containing the questions. \
No other text, no code blocks, no backticks. \
The response should start with [ and end with ]. Example:
[\"Tell me about your experience with...\", \"How would you handle...\", \"What approach would you take...\"]";

/// Guidelines for text that will be read aloud by a voice assistant.
pub const VOICE_GUIDELINES: &str = "\
Voice assistant guidelines:
- Keep language natural and conversational
- Avoid using symbols or punctuation like slashes (/) or asterisks (*)
- Ensure each question is clearly phrased for spoken delivery";
