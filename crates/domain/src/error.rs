//! # ドメイン層エラー定義
//!
//! 値オブジェクトのバリデーション失敗を表現するエラー型。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 値オブジェクトの生成時にビジネスルール違反を検出した場合に返す。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
