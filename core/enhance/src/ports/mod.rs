/// Inbound ポート
pub mod inbound;

/// Outbound ポート
pub mod outbound;
