// Resume tailoring: prompt construction, completion, and response splitting.
// All completion calls go through llm_client; nothing here speaks HTTP to the provider.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod splitter;
