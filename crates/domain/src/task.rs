//! # タスク読み取りモデル
//!
//! リモート Todo サービスが保持するタスクのうち、通知処理が参照する
//! 部分だけを写した読み取りモデルを定義する。
//!
//! ## 設計方針
//!
//! - ID はリモートサービスが採番する整数をそのままラップする
//! - エンティティの永続化はリモートサービスの責務（ここでは読み取り専用）

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::value_objects::Email;

/// タスク ID（リモートの作業項目を一意に識別する整数）
///
/// セッション生成時に一度だけ与えられ、以後変更されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TaskId(i64);

impl TaskId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// タスクの要約（リモートサービスからの取得結果）
///
/// 購読者への通知ポリシーが必要とするフィールドのみを持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    /// タスク ID
    pub id:          TaskId,
    /// タスク番号（件名に使用する表示用識別子）
    pub number:      i64,
    /// 購読者のメールアドレス一覧（空の場合は通知しない）
    pub subscribers: Vec<Email>,
}

/// タスクに投稿された新規コメント（通知イベントの入力）
///
/// 所属タスクの要約とコメント本文を運ぶ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskComment {
    /// コメントが属するタスク
    pub task: TaskSummary,
    /// コメント本文（通知メールの本文になる）
    pub body: String,
}
