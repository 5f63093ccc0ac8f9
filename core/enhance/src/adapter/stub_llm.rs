//! テスト用: 固定応答を返す LlmCompletion 実装（受け取ったリクエストを記録）


#[cfg(test)]
pub use stub::StubLlm;
