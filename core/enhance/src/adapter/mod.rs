//! アダプタ（Outbound ポートの実装）

mod llm_completion;
mod stub_llm;

pub use llm_completion::DriverLlmCompletion;
#[cfg(test)]
pub use stub_llm::StubLlm;
