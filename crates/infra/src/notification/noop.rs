//! Noop 通知送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! 通知無効化時やテスト環境で使用する。

use async_trait::async_trait;
use todogate_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone, Default)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), NotificationError> {
        tracing::info!(
            subject = message.subject_or_default(),
            recipients = message.recipients.len(),
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}
