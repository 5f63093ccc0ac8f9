//! 配線: 標準アダプタでアプリを組み立てる

use std::sync::Arc;

use common::adapter::{EnvResolver, FileJsonLog, FileSystem, NoopLog, StdEnvResolver, StdFileSystem};
use common::ports::outbound::Log;

/// 標準アダプタの束
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire() -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    // ホームが解決できた場合のみファイルへ JSONL を書く（できなければ Noop）
    let logger: Arc<dyn Log> = match env_resolver.resolve_home_dir() {
        Ok(home) => Arc::new(FileJsonLog::new(
            Arc::clone(&fs),
            home.join("log").join("enhance.jsonl"),
        )),
        Err(_) => Arc::new(NoopLog),
    };
    App {
        fs,
        env_resolver,
        logger,
    }
}
