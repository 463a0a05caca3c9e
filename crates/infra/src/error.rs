//! # インフラ層エラー定義
//!
//! データベースや外部サービスとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: `sqlx::Error` / `reqwest::Error` を `#[from]` でラップ
//! - **呼び出し側チェック**: すべて戻り値として返す（この層に panic はない）

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// データベースクエリ、リモート Todo サービス呼び出しなどで発生する
/// エラーの具体的な種別。
#[derive(Debug, Error)]
pub enum InfraError {
    /// データベースエラー
    ///
    /// SQL クエリの実行失敗、接続エラーなど。
    #[error("データベースエラー: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP 通信エラー
    ///
    /// リモート Todo サービスへの接続失敗、タイムアウトなど。
    #[error("Todo サービスへのリクエストに失敗: {0}")]
    Http(#[from] reqwest::Error),

    /// Todo サービスがエラー応答を返した
    #[error("Todo サービスがエラーを返却: status={status} {message}")]
    TodoApi {
        /// HTTP ステータスコード
        status:  u16,
        /// サービスが返したエラーメッセージ（空の場合あり）
        message: String,
    },

    /// ソルト行が存在しない
    ///
    /// `user_salts` に該当メールアドレスの行が 1 件もない場合。
    #[error("ソルトが見つかりません: {email}")]
    SaltNotFound {
        /// 検索に使用したメールアドレス
        email: String,
    },

    /// 応答データが不正
    ///
    /// リモートサービスの応答をドメイン型に変換できなかった場合。
    #[error("不正な応答データ: {0}")]
    InvalidData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displayはステータスとメッセージを含む() {
        let err = InfraError::TodoApi {
            status:  502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Todo サービスがエラーを返却: status=502 bad gateway"
        );
    }

    #[test]
    fn salt_not_foundはメールアドレスを含む() {
        let err = InfraError::SaltNotFound {
            email: "a@example.com".to_string(),
        };
        assert!(format!("{err}").contains("a@example.com"));
    }
}
