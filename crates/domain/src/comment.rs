//! # リモートコメントのローカルドラフト
//!
//! リモート作業項目に紐づくコメントの「未コミット状態」を表現する。
//! 本文と添付ファイルパスをローカルに蓄積し、コミット時にまとめて
//! リモートサービスへ渡す。
//!
//! ## 設計方針
//!
//! - ドラフトはリモート側で空本文のコメントが作成された時点で生成される
//!   （リモート ID を必ず持つ）
//! - 本文・添付の変更はコミットまでネットワークに触れない
//! - コミット後もローカルの読み取りは可能（再コミットは呼び出し側の責務）

use std::path::PathBuf;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// リモートコメント ID（リモートサービスが採番する整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct RemoteCommentId(i64);

impl RemoteCommentId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// コメントドラフト
///
/// リモート作業項目に紐づく未コミットのコメント。
/// 本文（空を許す）と添付ファイルパスの順序付きリストを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    remote_id:   RemoteCommentId,
    body:        String,
    attachments: Vec<PathBuf>,
}

impl CommentDraft {
    /// 空本文のドラフトを作成する
    ///
    /// リモート側の「空コメント作成」呼び出しが返した ID に紐づける。
    pub fn new(remote_id: RemoteCommentId) -> Self {
        Self {
            remote_id,
            body: String::new(),
            attachments: Vec::new(),
        }
    }

    /// リモートコメント ID を返す
    pub fn remote_id(&self) -> RemoteCommentId {
        self.remote_id
    }

    /// 本文を返す
    pub fn body(&self) -> &str {
        &self.body
    }

    /// 本文を全置換する
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// 添付ファイルパスを末尾に追加する
    pub fn attach(&mut self, path: impl Into<PathBuf>) {
        self.attachments.push(path.into());
    }

    /// 添付ファイルパスの一覧を追加順で返す
    pub fn attachments(&self) -> &[PathBuf] {
        &self.attachments
    }
}
