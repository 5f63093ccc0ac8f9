//! 結合テスト

mod enhance_tests;
