//! Outbound ポート（usecase から外界への抽象）

mod env_resolver;
mod fs;
mod log;

pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
