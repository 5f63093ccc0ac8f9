//! 単発 LLM 完了の Outbound ポート
//!
//! 結合済みリクエスト 1 回で全文応答を取得する。ストリーミングも
//! リトライもしない。呼び出しは完了か失敗まで戻らない（キャンセル不可）。

use common::error::Error;

/// 単発の LLM 完了（結合済みリクエストで応答文字列を取得）
pub trait LlmCompletion: Send + Sync {
    fn complete(&self, request: &str) -> Result<String, Error>;
}
