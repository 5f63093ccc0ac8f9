//! 単発 LLM 完了の標準実装（common::llm のドライバへ委譲）

use std::sync::Arc;

use common::domain::ModelName;
use common::error::Error;
use common::llm::factory::create_driver;
use common::llm::resolver::ResolvedProvider;
use common::ports::outbound::EnvResolver;

use crate::ports::outbound::LlmCompletion;

/// 標準の単発完了アダプタ
///
/// 呼び出しごとにプロバイダを組み立てて 1 リクエストを送る。
/// API キーの解決は呼び出し時に行い、未設定ならネットワークに触れる前に失敗する。
pub struct DriverLlmCompletion {
    resolved: ResolvedProvider,
    model: Option<ModelName>,
    env: Arc<dyn EnvResolver>,
}

impl DriverLlmCompletion {
    pub fn new(
        resolved: ResolvedProvider,
        model: Option<ModelName>,
        env: Arc<dyn EnvResolver>,
    ) -> Self {
        Self {
            resolved,
            model,
            env,
        }
    }
}

impl LlmCompletion for DriverLlmCompletion {
    fn complete(&self, request: &str) -> Result<String, Error> {
        // -m 指定 > プロファイルの model > プロバイダのデフォルト
        let model = self
            .model
            .as_ref()
            .map(|m| m.to_string())
            .or_else(|| self.resolved.model.clone());
        let driver = create_driver(
            self.resolved.provider_type,
            model,
            self.resolved.api_key_env.as_deref(),
            &*self.env,
        )?;
        driver.query(request, None)
    }
}
