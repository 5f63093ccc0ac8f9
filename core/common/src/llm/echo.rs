//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、クエリを表示するだけです。
//! デバッグやテスト用に使用します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Echoプロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut payload = json!({
            "query": query,
        });
        if let Some(system) = system_instruction {
            payload["system_instruction"] = json!(system);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // クエリを表示（実際のAPI呼び出しは行わない）
        println!("[Echo Provider] Request JSON:");
        println!("{}", request_json);

        Ok(r#"{"echo": "This is a dummy response from echo provider"}"#.to_string())
    }

    fn parse_response_text(&self, _response_json: &str) -> Result<Option<String>, Error> {
        // Echoプロバイダは常に固定のメッセージを返す
        Ok(Some(
            "[Echo Provider] Query received (no actual LLM call made)".to_string(),
        ))
    }
}
