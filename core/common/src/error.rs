//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。メッセージは利用者向け（stderr 表示用）で、
//! `exit_code()` は sysexits 風の終了コードを返す。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数不正（usage エラー）
    #[error("{0}")]
    InvalidArgument(String),
    /// 設定不備（API キー未設定など）。呼び出し前に解消が必要
    #[error("{0}")]
    Env(String),
    /// HTTP / リモート API エラー。メッセージはそのまま呼び出し元へ
    #[error("{0}")]
    Http(String),
    /// レスポンスは返ったがテキストが含まれない
    #[error("{0}")]
    EmptyResponse(String),
    /// JSON 変換エラー
    #[error("{0}")]
    Json(String),
    /// I/O エラー
    #[error("{0}")]
    Io(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// 環境変数・設定エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// HTTP エラー
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// 空レスポンスエラー
    pub fn empty_response(msg: impl Into<String>) -> Self {
        Self::EmptyResponse(msg.into())
    }

    /// JSON エラー
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// I/O エラー（メッセージのみ）
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// usage 表示が必要なエラーかどうか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// sysexits 風の終了コード（64: usage, 78: config, その他: 74）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Env(_) => 78,
            Self::Http(_) | Self::EmptyResponse(_) | Self::Json(_) | Self::Io(_) => 74,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_is_usage() {
        let err = Error::invalid_argument("bad flag");
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 64);
        assert_eq!(err.to_string(), "bad flag");
    }

    #[test]
    fn test_env_exit_code() {
        let err = Error::env("GEMINI_API_KEY environment variable is not set");
        assert!(!err.is_usage());
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_http_exit_code() {
        let err = Error::http("HTTP request failed: connection refused");
        assert_eq!(err.exit_code(), 74);
        assert_eq!(err.to_string(), "HTTP request failed: connection refused");
    }

    #[test]
    fn test_empty_response_exit_code() {
        let err = Error::empty_response("The model returned no content");
        assert_eq!(err.exit_code(), 74);
    }
}
