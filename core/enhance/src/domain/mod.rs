//! ドメイン型

pub mod instruction;

pub use instruction::SystemInstruction;

use common::domain::{ModelName, ProviderName};

/// ユーザー入力のプロンプト（1 呼び出し分。呼び出しを越えて共有されない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPrompt(String);

impl UserPrompt {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 前後空白を除いたプロンプト
    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }

    /// trim 後に空かどうか（空プロンプトは送信前に拒否される）
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

/// CLI から組み立てるコマンド
#[derive(Debug, Clone)]
pub enum EnhanceCommand {
    Help,
    ListProfiles,
    Enhance {
        profile: Option<ProviderName>,
        model: Option<ModelName>,
        instruction: Option<String>,
        prompt: UserPrompt,
    },
}
