//! 通知フロー統合テスト
//!
//! モックコラボレータと一時ディレクトリを使い、通知セッションと
//! 購読者通知ポリシーのエンドツーエンドの振る舞いを検証する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p todogate-notifier --test notify_flow_test
//! ```

use std::sync::{Arc, Once};

use pretty_assertions::assert_eq;
use todogate_domain::{
    auth::AuthToken,
    task::{TaskComment, TaskId, TaskSummary},
    value_objects::Email,
};
use todogate_infra::{
    TodoGateway,
    mock::{MockNotificationSender, MockSaltRepository, MockTodoGateway},
};
use todogate_notifier::{NotifyError, NotifyOutcome, TaskNotifier, TodoNotifier};
use todogate_shared::observability::{LogFormat, TracingConfig, init_tracing};

static TRACING: Once = Once::new();

/// テストバイナリ全体で一度だけトレーシングを初期化する
fn init() {
    TRACING.call_once(|| {
        init_tracing(&TracingConfig::new("notify-flow-test", LogFormat::Pretty));
    });
}

fn email(value: &str) -> Email {
    Email::new(value).unwrap()
}

fn make_notifier(
    scratch: &std::path::Path,
) -> (TodoNotifier, MockTodoGateway, MockSaltRepository) {
    let gateway = MockTodoGateway::new();
    let salts = MockSaltRepository::new();
    let notifier = TodoNotifier::new(
        TaskId::new(42),
        Arc::new(gateway.clone()),
        Arc::new(salts.clone()),
    )
    .with_scratch_dir(scratch);
    (notifier, gateway, salts)
}

#[tokio::test]
async fn 実通知e2e_本文と添付とトークンがコミットされファイルは削除される() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let (mut notifier, gateway, salts) = make_notifier(dir.path());
    salts.insert_salt("alice@example.com", "alice-salt");

    notifier.set_message("hello").await.unwrap();
    let staged = notifier.attach_string("log.txt", "data").await.unwrap();
    assert!(staged.exists());

    let outcome = notifier
        .notify(&email("alice@example.com"), None)
        .await
        .unwrap();

    assert_eq!(outcome, NotifyOutcome::Committed);
    let saved = gateway.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].body, "hello");
    assert_eq!(saved[0].attachments.len(), 1);
    assert!(saved[0].attachments[0].ends_with("log.txt"));
    assert_eq!(saved[0].author.as_str(), "alice@example.com");
    // トークンは登録済みソルトから決定的に導出される
    assert_eq!(
        saved[0].token,
        AuthToken::derive("alice-salt", "alice@example.com")
    );
    // 実経路では一時ファイルが削除される
    assert!(!staged.exists());
}

#[tokio::test]
async fn テスト宛先e2e_成功を返しコミットもソルト検索も行わない() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let (mut notifier, gateway, salts) = make_notifier(dir.path());

    let outcome = notifier
        .notify(&email("qa-test@example.com"), None)
        .await
        .unwrap();

    assert_eq!(outcome, NotifyOutcome::SkippedTest);
    assert_eq!(gateway.add_comment_calls(), 0);
    assert!(gateway.saved().is_empty());
    assert_eq!(salts.lookup_count(), 0);
}

#[tokio::test]
async fn テスト宛先では一時ファイルが残る() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let (mut notifier, _gateway, salts) = make_notifier(dir.path());
    salts.insert_salt("qa-test@example.com", "unused");

    let staged = notifier.attach_string("log.txt", "data").await.unwrap();
    let outcome = notifier
        .notify(&email("qa-test@example.com"), None)
        .await
        .unwrap();

    assert_eq!(outcome, NotifyOutcome::SkippedTest);
    // レガシー互換: テスト経路は後始末しない（実経路との非対称）
    assert!(staged.exists());
    assert_eq!(salts.lookup_count(), 0);
}

#[tokio::test]
async fn コミット失敗でもerrと共に一時ファイルは削除される() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let (mut notifier, gateway, salts) = make_notifier(dir.path());
    salts.insert_salt("alice@example.com", "alice-salt");
    gateway.set_save_failure("リモートサービス到達不能");

    let staged = notifier.attach_string("log.txt", "data").await.unwrap();
    let result = notifier.notify(&email("alice@example.com"), None).await;

    assert!(matches!(result, Err(NotifyError::Commit(_))));
    assert!(!staged.exists());
}

#[tokio::test]
async fn notifyのメッセージ引数は本文として設定される() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let (mut notifier, gateway, salts) = make_notifier(dir.path());
    salts.insert_salt("bob@example.com", "bob-salt");

    notifier
        .notify(&email("bob@example.com"), Some("引数からの本文"))
        .await
        .unwrap();

    assert_eq!(gateway.saved()[0].body, "引数からの本文");
}

#[tokio::test]
async fn 同一セッションでトークンを2回導出しても同じ値になる() {
    init();
    let token_a = AuthToken::derive("shared-salt", "carol@example.com");
    let token_b = AuthToken::derive("shared-salt", "carol@example.com");
    assert_eq!(token_a, token_b);
}

#[tokio::test]
async fn 購読者がいないタスクのコメントは通知されない() {
    init();
    let sender = MockNotificationSender::new();
    let notifier = TaskNotifier::new(Arc::new(sender.clone()));
    let comment = TaskComment {
        task: TaskSummary {
            id:          TaskId::new(7),
            number:      123,
            subscribers: Vec::new(),
        },
        body: "本文".to_string(),
    };

    notifier.notify_about_new_comment(&comment).await.unwrap();

    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn タスク取得から購読者通知までの一連の流れ() {
    init();
    let gateway = MockTodoGateway::new();
    gateway.insert_task(TaskSummary {
        id:          TaskId::new(42),
        number:      42,
        subscribers: vec![email("subscriber@example.com")],
    });
    let sender = MockNotificationSender::new();
    let notifier = TaskNotifier::new(Arc::new(sender.clone()));

    // ホストアプリケーションと同じ順序: タスク取得 → コメントイベント → 通知
    let task = gateway.fetch_task(TaskId::new(42)).await.unwrap();
    let comment = TaskComment {
        task,
        body: "完了しました".to_string(),
    };
    notifier.notify_about_new_comment(&comment).await.unwrap();

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New comment for task #42");
    assert_eq!(sent[0].recipients[0].as_str(), "subscriber@example.com");
}

#[tokio::test]
async fn 購読者がいるタスクのコメントは全員へ1回で送信される() {
    init();
    let sender = MockNotificationSender::new();
    let notifier = TaskNotifier::new(Arc::new(sender.clone()));
    let subscribers = vec![email("a@example.com"), email("b@example.com")];
    let comment = TaskComment {
        task: TaskSummary {
            id:          TaskId::new(7),
            number:      456,
            subscribers: subscribers.clone(),
        },
        body: "<p>新しいコメント</p>".to_string(),
    };

    notifier.notify_about_new_comment(&comment).await.unwrap();

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New comment for task #456");
    assert_eq!(sent[0].body, "<p>新しいコメント</p>");
    assert_eq!(sent[0].recipients, subscribers);
}
