//! # Todogate インフラ層
//!
//! 外部コラボレータとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! 通知オーケストレーションが必要とする外部接点を trait で抽象化し、
//! その具体実装を提供する。上位層は trait のみに依存するため、
//! チャネルの差し替え・モック化が可能になる。
//!
//! ## 責務
//!
//! - **通知チャネル**: SMTP / Noop によるメール送信（[`notification`]）
//! - **リモート Todo サービス**: コメント作成・保存の薄い HTTP クライアント（[`todo`]）
//! - **ソルトリポジトリ**: `user_salts` テーブルへの単一クエリ（[`salt`]）
//! - **一時添付ストア**: スクラッチディレクトリのファイル生成と後始末（[`attachment`]）
//!
//! ## 依存関係
//!
//! ```text
//! notifier → infra → domain
//! ```

pub mod attachment;
pub mod error;
pub mod notification;
pub mod salt;
pub mod todo;

#[cfg(feature = "test-utils")]
pub mod mock;

pub use attachment::TempAttachmentStore;
pub use error::InfraError;
pub use notification::{NoopNotificationSender, NotificationSender, SmtpNotificationSender};
pub use salt::{PostgresSaltRepository, SaltRepository};
pub use todo::{HttpTodoGateway, TodoGateway};
