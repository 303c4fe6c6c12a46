//! Portfolio generation pipeline: validation, prompt assembly, response
//! sanitization, and the HTTP orchestrator tying them together.

pub mod builder;
pub mod handlers;
pub mod prompts;
pub mod sanitize;
pub mod validate;
