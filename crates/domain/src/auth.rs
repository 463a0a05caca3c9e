//! # 認可トークン導出
//!
//! リモートコメント保存を認可する短いトークンを、ユーザーごとの
//! ソルトと作成者メールアドレスから導出する。
//!
//! ## 設計方針
//!
//! - **決定的**: 同じ (ソルト, メールアドレス) からは常に同じトークン
//! - **非暗号学的**: CRC-32 を 10 進表記して先頭 3 文字に切り詰めるだけの
//!   軽量ななりすまし抑止であり、認可の証明ではない。既存システムとの
//!   値互換を保つため、プロダクト判断なしに強化してはならない
//! - **永続化しない**: notify のたびに計算し直す

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// トークンの最大文字数
pub const TOKEN_LENGTH: usize = 3;

/// 認可トークン
///
/// `ソルト + メールアドレス` の CRC-32 チェックサムを 10 進表記し、
/// 先頭 [`TOKEN_LENGTH`] 文字に切り詰めた値。
///
/// # セキュリティ上の注意
///
/// 暗号学的な強度はない。リモートコメントサービスに対する
/// 軽量ななりすまし抑止としてのみ機能する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct AuthToken(String);

impl AuthToken {
    /// ソルトとメールアドレスからトークンを導出する
    pub fn derive(salt: &str, email: &str) -> Self {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(salt.as_bytes());
        hasher.update(email.as_bytes());
        let checksum = hasher.finalize().to_string();

        Self(checksum.chars().take(TOKEN_LENGTH).collect())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
