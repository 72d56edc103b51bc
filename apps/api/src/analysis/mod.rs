// Resume analysis: keyword-overlap ATS scoring and LLM rewriting.
// All LLM calls go through llm_client.

pub mod ats;
pub mod enhancer;
pub mod handlers;
pub mod prompts;
