//! # Todogate ドメイン層
//!
//! 通知サブシステムの中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! このクレートは通知オーケストレーションが扱う値オブジェクトと
//! ビジネスルールのみを含む:
//!
//! - **値オブジェクト**: 不正な値の生成を型レベルで防ぐ（例: [`value_objects::Email`]）
//! - **コメントドラフト**: リモートコメントのローカル蓄積状態
//! - **トークン導出**: ソルト + メールアドレスからの認可トークン計算
//!
//! ## 依存関係の方向
//!
//! ```text
//! notifier → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、メール、外部サービス）に一切依存しない。

pub mod auth;
pub mod comment;
pub mod error;
pub mod notification;
pub mod task;
pub mod value_objects;

pub use error::DomainError;
