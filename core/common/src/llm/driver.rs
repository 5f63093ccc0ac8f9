//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// LLMにクエリを送信してレスポンスを取得
    ///
    /// 1 回の呼び出しにつき 1 リクエストのみ。失敗してもリトライせず、
    /// そのまま呼び出し元へ返す。テキストが無い・空白のみの場合は
    /// `Error::EmptyResponse`。
    ///
    /// # Arguments
    /// * `query` - 送信するプロンプト（結合済みリクエスト）
    /// * `system_instruction` - システム指示（オプション）
    ///
    /// # Returns
    /// * `Ok(String)` - LLMからの応答テキスト（加工なし）
    /// * `Err(Error)` - エラー
    pub fn query(&self, query: &str, system_instruction: Option<&str>) -> Result<String, Error> {
        // リクエストペイロードを生成
        let payload = self.provider.make_request_payload(query, system_instruction)?;

        // JSON文字列に変換
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        // HTTPリクエストを実行
        let response_json = self.provider.make_http_request(&request_json)?;

        // レスポンスからテキストを抽出
        let text = self
            .provider
            .parse_response_text(&response_json)?
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::empty_response("The model returned no content"))?;

        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
