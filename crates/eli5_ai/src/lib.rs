pub mod enrich;
pub mod explain;
pub mod llm;
pub mod prompts;
pub mod wiki;
