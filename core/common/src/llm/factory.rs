//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。
//! Gemini の API キーはここで環境変数から解決し、未設定なら
//! ネットワークに触れる前に `Error::Env` を返す。

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::echo::EchoProvider;
use crate::llm::gemini::GeminiProvider;
use crate::llm::provider::LlmProvider;
use crate::ports::outbound::EnvResolver;
use serde_json::Value;

/// Gemini の API キーを読むデフォルトの環境変数名
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Gemini
    Gemini,
    /// Echo（クエリを表示するだけ）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    Gemini(GeminiProvider),
    Echo(EchoProvider),
}

// GeminiProvider は API キーを保持するため、derive せず名前のみ出力する
impl std::fmt::Debug for AnyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AnyProvider").field(&self.name()).finish()
    }
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        match self {
            Self::Gemini(p) => p.make_request_payload(query, system_instruction),
            Self::Echo(p) => p.make_request_payload(query, system_instruction),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Gemini(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Gemini(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（オプション、デフォルト値が使用される）
/// * `api_key_env` - API キーを読む環境変数名（None のとき GEMINI_API_KEY）
/// * `env` - 環境変数解決（テストではモックを渡す）
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
    api_key_env: Option<&str>,
    env: &dyn EnvResolver,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::Gemini => {
            let key_env = api_key_env.unwrap_or(DEFAULT_API_KEY_ENV);
            let api_key = env
                .api_key(key_env)
                .ok_or_else(|| Error::env(format!("{} environment variable is not set", key_env)))?;
            Ok(AnyProvider::Gemini(GeminiProvider::new(model, api_key)))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}

/// ドライバーを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（オプション、デフォルト値が使用される）
/// * `api_key_env` - API キーを読む環境変数名（None のとき GEMINI_API_KEY）
/// * `env` - 環境変数解決
pub fn create_driver(
    provider_type: ProviderType,
    model: Option<String>,
    api_key_env: Option<&str>,
    env: &dyn EnvResolver,
) -> Result<LlmDriver<AnyProvider>, Error> {
    let provider = create_provider(provider_type, model, api_key_env, env)?;
    Ok(LlmDriver::new(provider))
}
