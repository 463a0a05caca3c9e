//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! 接続先はレガシー構成と同じ平文 SMTP リレーを想定する。

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Message, SinglePart, header::ContentType},
};
use todogate_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// 本文は HTML（UTF-8）で送信し、受信者は全員を個別の `To` 宛先として
/// 追加する（BCC やグループ化は使わない）。
pub struct SmtpNotificationSender {
    transport:    AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP サーバーのホスト名
    /// - `port`: SMTP サーバーのポート番号
    /// - `from_address`: 送信元メールアドレス
    pub fn new(host: &str, port: u16, from_address: String) -> Self {
        // builder_dangerous: TLS なしで接続（レガシー SMTP リレー向け）
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            transport,
            from_address,
        }
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), NotificationError> {
        let mut builder = Message::builder()
            .from(self.from_address.parse().map_err(|e| {
                NotificationError::SendFailed(format!("送信元アドレス不正: {e}"))
            })?)
            .subject(message.subject_or_default());

        // 受信者が空の場合もそのまま組み立てを試み、結果はトランスポート層
        // （メッセージ構築）の判断に委ねる
        for recipient in &message.recipients {
            builder = builder.to(recipient.as_str().parse().map_err(|e| {
                NotificationError::SendFailed(format!("宛先アドレス不正: {e}"))
            })?);
        }

        let email = builder
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(message.body.clone()),
            )
            .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}
