//! # タスク購読者通知ポリシー
//!
//! タスクへの新規コメントを購読者へのメール通知に変換する。
//! リモートコメントセッションは経由しない、メール専用の単純な経路。
//!
//! ## 設計方針
//!
//! - **ステートレス**: 「新規コメント」イベントから 1 回の送信呼び出しへの
//!   純粋な変換のみを行う
//! - **空の購読者リストは no-op**: 送信も行わずエラーにもしない
//!   （意図されたポリシーであり、エラー経路ではない）

use std::sync::Arc;

use todogate_domain::{
    notification::{EmailMessage, NotificationError},
    task::TaskComment,
};
use todogate_infra::NotificationSender;

/// タスク購読者通知
///
/// 注入された通知チャネルを通じて、コメントが付いたタスクの
/// 購読者全員にメールを送る。
pub struct TaskNotifier {
    sender: Arc<dyn NotificationSender>,
}

impl TaskNotifier {
    /// 新しい通知ポリシーを作成する
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }

    /// 新規コメントについて購読者へ通知する
    ///
    /// 件名はタスク番号から組み立て、本文はコメント本文をそのまま使う。
    /// 購読者が 1 人以上いる場合のみ、ちょうど 1 回の送信を行う。
    pub async fn notify_about_new_comment(
        &self,
        comment: &TaskComment,
    ) -> Result<(), NotificationError> {
        let task = &comment.task;

        if task.subscribers.is_empty() {
            tracing::debug!(task_id = %task.id, "購読者がいないため通知しない");
            return Ok(());
        }

        let message = EmailMessage {
            subject:    format!("New comment for task #{}", task.number),
            body:       comment.body.clone(),
            recipients: task.subscribers.clone(),
        };

        self.sender.send_email(&message).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use todogate_domain::{
        task::{TaskId, TaskSummary},
        value_objects::Email,
    };
    use todogate_infra::mock::MockNotificationSender;

    use super::*;

    fn comment_with_subscribers(subscribers: Vec<Email>) -> TaskComment {
        TaskComment {
            task: TaskSummary {
                id: TaskId::new(7),
                number: 123,
                subscribers,
            },
            body: "<p>進捗を更新しました</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn 購読者がいなければチャネルを呼ばない() {
        let sender = MockNotificationSender::new();
        let notifier = TaskNotifier::new(Arc::new(sender.clone()));

        let result = notifier
            .notify_about_new_comment(&comment_with_subscribers(Vec::new()))
            .await;

        assert!(result.is_ok());
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn 購読者がいればちょうど1回送信する() {
        let sender = MockNotificationSender::new();
        let notifier = TaskNotifier::new(Arc::new(sender.clone()));
        let subscribers = vec![
            Email::new("a@example.com").unwrap(),
            Email::new("b@example.com").unwrap(),
        ];

        notifier
            .notify_about_new_comment(&comment_with_subscribers(subscribers.clone()))
            .await
            .unwrap();

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New comment for task #123");
        assert_eq!(sent[0].body, "<p>進捗を更新しました</p>");
        assert_eq!(sent[0].recipients, subscribers);
    }

    #[tokio::test]
    async fn 送信失敗はそのまま呼び出し側へ返る() {
        let sender = MockNotificationSender::new();
        sender.set_failure("接続失敗");
        let notifier = TaskNotifier::new(Arc::new(sender.clone()));
        let subscribers = vec![Email::new("a@example.com").unwrap()];

        let result = notifier
            .notify_about_new_comment(&comment_with_subscribers(subscribers))
            .await;

        assert!(matches!(result, Err(NotificationError::SendFailed(_))));
    }
}
