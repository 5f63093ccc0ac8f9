//! enhance ユースケース（Request Builder と Completion Client の結合）
//!
//! 状態遷移は Idle → Awaiting response → Idle のみ。呼び出しは同期で、
//! 完了か失敗まで戻らない。同時リクエストの調停は行わない（CLI は
//! 1 実行 1 リクエスト）。

use std::collections::BTreeMap;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};

use crate::domain::{SystemInstruction, UserPrompt};
use crate::ports::outbound::LlmCompletion;

/// enhance ユースケース
pub struct EnhanceUseCase {
    completion: Arc<dyn LlmCompletion>,
    logger: Arc<dyn Log>,
}

impl EnhanceUseCase {
    pub fn new(completion: Arc<dyn LlmCompletion>, logger: Arc<dyn Log>) -> Self {
        Self { completion, logger }
    }

    /// プロンプトを検証し、CombinedRequest を 1 回だけ送信して応答テキストを返す
    ///
    /// 空（trim 後）のプロンプトはネットワークに触れる前に拒否する。
    /// 応答テキストは一切加工しない。エラーはすべて呼び出し元へ伝播する。
    pub fn run(
        &self,
        instruction: &SystemInstruction,
        prompt: &UserPrompt,
    ) -> Result<String, Error> {
        if prompt.is_blank() {
            return Err(Error::invalid_argument(
                "No prompt provided. Pass the prompt to enhance as arguments.",
            ));
        }

        let request = instruction.combined_request(prompt.trimmed());

        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "enhance request".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("usecase".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert(
                    "prompt_chars".to_string(),
                    serde_json::json!(prompt.trimmed().chars().count()),
                );
                m.insert(
                    "request_chars".to_string(),
                    serde_json::json!(request.chars().count()),
                );
                Some(m)
            },
        });

        let text = self.completion.complete(&request)?;

        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "enhance response".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("usecase".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert(
                    "response_chars".to_string(),
                    serde_json::json!(text.chars().count()),
                );
                Some(m)
            },
        });

        Ok(text)
    }
}
