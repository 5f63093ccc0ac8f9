//! Outbound ポート

mod llm_completion;

pub use llm_completion::LlmCompletion;
