//! prompt-enhance 共通ライブラリ
//!
//! `enhance` コマンドから使われる機能を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports（Outbound トレイト）
pub mod ports;

/// 標準アダプタ
pub mod adapter;

/// LLMドライバーとプロバイダ
pub mod llm;
