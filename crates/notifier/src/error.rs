//! # 通知オーケストレーションのエラー定義
//!
//! ## 設計方針
//!
//! - **ハードストップとソフト失敗の区別**: 添付ファイルの I/O エラーは
//!   その場で処理を中断させる。トランスポート系（認可取得・コミット）の
//!   失敗は戻り値として返り、呼び出し側が確認する
//! - **リトライしない**: どの失敗もこの層では再試行せず呼び出し側に委ねる

use thiserror::Error;
use todogate_infra::InfraError;

/// 通知セッションで発生するエラー
#[derive(Debug, Error)]
pub enum NotifyError {
    /// 添付ファイルの作成・検証に失敗
    ///
    /// 欠落した添付を黙って飲み込むとコメントが壊れるため、
    /// attach 呼び出しの時点で即座に返す。
    #[error("添付ファイルの処理に失敗: {0}")]
    Attachment(#[from] std::io::Error),

    /// リモートコメントのオープン（空コメント作成）に失敗
    #[error("リモートコメントの作成に失敗: {0}")]
    CommentOpen(#[source] InfraError),

    /// 認可情報（ソルト）の取得に失敗
    #[error("認可情報の取得に失敗: {0}")]
    Authentication(#[source] InfraError),

    /// コメントのコミットに失敗
    ///
    /// リモートサービスが到達不能な場合など。一時ファイルの後始末は
    /// このエラーでも実行済み。
    #[error("コメントのコミットに失敗: {0}")]
    Commit(#[source] InfraError),
}
