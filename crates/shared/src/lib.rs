//! # Todogate 共有ユーティリティ
//!
//! 通知サブシステムを組み込むホストアプリケーションと統合テストが
//! 共通で使うユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod observability;

pub use observability::{LogFormat, TracingConfig, init_tracing};
