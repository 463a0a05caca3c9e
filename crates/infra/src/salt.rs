//! # SaltRepository
//!
//! 認可トークン導出に使うユーザーごとのソルトを取得するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一クエリ契約**: `SELECT salt FROM user_salts WHERE email = $1` のみ
//! - **0 行は明示エラー**: 行がない場合は黙って失敗せず
//!   [`InfraError::SaltNotFound`] を返す
//! - **複数行は先頭優先**: レガシー互換の first-row-wins を維持しつつ、
//!   warn ログで観測可能にする

use async_trait::async_trait;
use sqlx::PgPool;
use todogate_domain::value_objects::Email;

use crate::error::InfraError;

/// ソルトリポジトリトレイト
#[async_trait]
pub trait SaltRepository: Send + Sync {
    /// メールアドレスに対応するソルトを取得する
    async fn salt_for(&self, email: &Email) -> Result<String, InfraError>;
}

/// PostgreSQL 実装の SaltRepository
#[derive(Debug, Clone)]
pub struct PostgresSaltRepository {
    pool: PgPool,
}

impl PostgresSaltRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaltRepository for PostgresSaltRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn salt_for(&self, email: &Email) -> Result<String, InfraError> {
        let salts: Vec<String> =
            sqlx::query_scalar("SELECT salt FROM user_salts WHERE email = $1")
                .bind(email.as_str())
                .fetch_all(&self.pool)
                .await?;

        match salts.as_slice() {
            [] => Err(InfraError::SaltNotFound {
                email: email.to_string(),
            }),
            [salt] => Ok(salt.clone()),
            [salt, ..] => {
                tracing::warn!(
                    email = %email,
                    rows = salts.len(),
                    "user_salts に複数行が存在するため先頭行を使用"
                );
                Ok(salt.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresSaltRepository>();
    }
}
