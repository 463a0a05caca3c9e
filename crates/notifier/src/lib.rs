//! # Todogate 通知オーケストレーション
//!
//! 作業項目（タスク）上のイベントを関係者へ届けるサブシステム。
//! ホストアプリケーションから呼び出されるライブラリであり、CLI や
//! ネットワークリスナーは持たない。
//!
//! ## 2 つの通知経路
//!
//! - [`TodoNotifier`]: リモート作業項目のコメントスレッドへの通知。
//!   本文と添付をローカルに蓄積し、notify でまとめてコミットする
//!   ステートフルなセッション
//! - [`TaskNotifier`]: タスク購読者へのメール通知。新規コメントを
//!   1 回の送信に変換するだけのステートレスなポリシー
//!
//! ## 利用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use todogate_domain::{task::TaskId, value_objects::Email};
//! use todogate_infra::{HttpTodoGateway, PostgresSaltRepository};
//! use todogate_notifier::{NotifierConfig, TodoNotifier};
//!
//! async fn example(pool: sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NotifierConfig::from_env();
//!     let gateway = Arc::new(HttpTodoGateway::new(
//!         &config.twgate.host,
//!         &config.twgate.user,
//!     ));
//!     let salts = Arc::new(PostgresSaltRepository::new(pool));
//!
//!     // 通知イベントごとに 1 セッション（共有しない）
//!     let mut notifier = TodoNotifier::new(TaskId::new(42), gateway, salts);
//!     notifier.attach_string("build.log", "…").await?;
//!     notifier
//!         .notify(&Email::new("alice@example.com")?, Some("ビルド完了"))
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod task_notifier;
pub mod todo_notifier;

pub use config::{
    DatabaseConfig,
    NotificationBackend,
    NotificationConfig,
    NotifierConfig,
    TwgateConfig,
    build_sender,
};
pub use error::NotifyError;
pub use task_notifier::TaskNotifier;
pub use todo_notifier::{NotifyOutcome, TodoNotifier};
