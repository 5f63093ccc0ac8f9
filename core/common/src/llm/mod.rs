//! LLMドライバーとプロバイダの実装
//!
//! このモジュールは、異なるLLMプロバイダ（Gemini、Echoなど）で共通する処理を提供します。
//! 呼び出しは同期・ブロッキングで、1 回の呼び出しにつき 1 リクエストのみ。
//! リトライ・レート制御・ストリーミングは行わない。

pub mod config;
pub mod driver;
pub mod echo;
pub mod factory;
pub mod gemini;
pub mod provider;
pub mod resolver;

pub use driver::LlmDriver;
pub use factory::{create_driver, create_provider, AnyProvider, ProviderType};
pub use provider::LlmProvider;
