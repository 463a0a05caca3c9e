//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: [`NotificationSender`] trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（実送信）、Noop（通知無効化・テスト用）
//! - **設定による切替**: 上位層が設定値からどちらを使うか選択する

mod noop;
mod smtp;

use async_trait::async_trait;
pub use noop::NoopNotificationSender;
pub use smtp::SmtpNotificationSender;
use todogate_domain::notification::{EmailMessage, NotificationError};

/// メール送信トレイト
///
/// 通知基盤の中核。「何が起きたか」と「人にどう伝えるか」を切り離す
/// 間接層で、送信手段の差し替えとモック化を可能にする。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    ///
    /// ちょうど 1 通のメッセージを、全受信者を個別の宛先として送出する。
    /// 失敗は戻り値で通知され、呼び出し側が確認する（リトライはしない）。
    async fn send_email(&self, message: &EmailMessage) -> Result<(), NotificationError>;
}
