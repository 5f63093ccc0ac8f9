/// Outbound ポート
pub mod outbound;
