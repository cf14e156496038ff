pub mod fallback;
pub mod generate_prompt;
pub mod prompt_builder;
