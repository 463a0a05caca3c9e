//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **チャネル非依存**: [`EmailMessage`] は件名・本文・受信者のみを持ち、
//!   送信手段（SMTP 等）には関知しない
//! - **件名デフォルト**: 空件名は送信側で [`DEFAULT_SUBJECT`] に置換される
//! - **結果チェック必須**: 送信失敗は [`NotificationError`] として返り、
//!   呼び出し側が明示的に確認する（例外的な制御フローは使わない）

use thiserror::Error;

use crate::value_objects::Email;

/// 件名が空の場合に使用する既定の件名
pub const DEFAULT_SUBJECT: &str = "Email notification";

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}

/// メールメッセージ
///
/// 通知チャネルに渡す送信単位。受信者は全員が個別の宛先として
/// 追加される（BCC やグループ化は行わない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 件名（空の場合は送信側が [`DEFAULT_SUBJECT`] を使用する）
    pub subject:    String,
    /// HTML 本文（UTF-8）
    pub body:       String,
    /// 受信者メールアドレス一覧
    pub recipients: Vec<Email>,
}

impl EmailMessage {
    /// 件名を返す（空の場合は既定値）
    pub fn subject_or_default(&self) -> &str {
        if self.subject.is_empty() {
            DEFAULT_SUBJECT
        } else {
            &self.subject
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn message(subject: &str) -> EmailMessage {
        EmailMessage {
            subject:    subject.to_string(),
            body:       "<p>本文</p>".to_string(),
            recipients: vec![Email::new("a@example.com").unwrap()],
        }
    }

    #[test]
    fn 件名があればそのまま返す() {
        assert_eq!(message("お知らせ").subject_or_default(), "お知らせ");
    }

    #[test]
    fn 空件名は既定値に置換される() {
        assert_eq!(message("").subject_or_default(), DEFAULT_SUBJECT);
    }
}
