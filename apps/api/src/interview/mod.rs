// Custom interview generation.
// Prompt building, the model call, output validation and persistence of the
// interview record. All LLM calls go through llm_client.

pub mod covers;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod queries;
pub mod record;
pub mod validation;
