//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・設定ファイルパス・API キーを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. ENHANCE_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/enhance（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/enhance
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// プロバイダプロファイル設定ファイルのパス
    /// resolve_home_dir() 直下の profiles.json（例: ~/.config/enhance/profiles.json）
    fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error>;

    /// 指定した環境変数から API キーを取得する（未設定・空文字は None）
    fn api_key(&self, env_name: &str) -> Option<String>;
}
