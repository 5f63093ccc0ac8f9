//! プロファイル一覧ユースケース

use std::sync::Arc;

use common::error::Error;
use common::llm::resolver::{builtin_provider_names, load_profiles_config};
use common::ports::outbound::{EnvResolver, FileSystem};

/// profiles.json とビルトインからプロファイル一覧を組み立てる
pub struct ListProfilesUseCase {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
}

impl ListProfilesUseCase {
    pub fn new(fs: Arc<dyn FileSystem>, env: Arc<dyn EnvResolver>) -> Self {
        Self { fs, env }
    }

    /// プロファイル名一覧（ソート済み）と default 名を返す
    pub fn run(&self) -> Result<(Vec<String>, Option<String>), Error> {
        let cfg = load_profiles_config(&*self.fs, &*self.env)?;

        let mut names: Vec<String> = builtin_provider_names()
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        if let Some(cfg) = &cfg {
            for k in cfg.providers.keys() {
                if !names.contains(k) {
                    names.push(k.clone());
                }
            }
        }
        names.sort();

        let default = cfg.as_ref().and_then(|c| c.default_provider.clone());
        Ok((names, default))
    }
}
