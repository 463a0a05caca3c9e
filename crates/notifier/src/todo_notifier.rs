//! # リモートコメント通知セッション
//!
//! 1 つの作業項目に紐づくリモートコメントへの通知を組み立てて確定する
//! ステートフルなセッション。
//!
//! ## 状態遷移
//!
//! ```text
//! IDLE → COMMENT_OPEN (± 添付, ± 本文) → NOTIFIED(test) | NOTIFIED(real)
//! ```
//!
//! notify 後の状態は固定しない（以後の attach / notify もレガシー互換で
//! 受け付ける）。
//!
//! ## 設計方針
//!
//! - **明示的な 2 段階契約**: リモートへの「空コメント作成」は
//!   [`open_comment`](TodoNotifier::open_comment) に分離され、getter の裏に
//!   隠れない。冪等で、リモート作成はセッションにつき 1 回だけ発生する
//! - **セッション単占有**: 1 通知イベントにつき 1 インスタンス。`&mut self`
//!   により並行再利用をコンパイル時に排除する
//! - **後始末の保証**: 実通知経路では認可取得・コミットの成否によらず
//!   追跡中の一時ファイルをすべて削除する

use std::{path::PathBuf, sync::Arc};

use todogate_domain::{
    auth::AuthToken,
    comment::CommentDraft,
    task::TaskId,
    value_objects::Email,
};
use todogate_infra::{SaltRepository, TempAttachmentStore, TodoGateway};

use crate::error::NotifyError;

/// notify の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// リモートコメントへコミットされた
    Committed,
    /// 合成（テスト）宛先と判定され、何も送信しなかった
    SkippedTest,
}

/// 作成者アドレスが合成（テスト）宛先かを判定する
///
/// 部分文字列 `"test"` を（大文字小文字を区別して）任意の位置に
/// 含む場合に真。
fn is_test_notification(author: &Email) -> bool {
    author.as_str().contains("test")
}

/// リモートコメント通知セッション
///
/// 本文と添付ファイルをローカルに蓄積し、[`notify`](Self::notify) で
/// まとめてリモートコメントへコミットする。
pub struct TodoNotifier {
    task_id:     TaskId,
    gateway:     Arc<dyn TodoGateway>,
    salts:       Arc<dyn SaltRepository>,
    draft:       Option<CommentDraft>,
    attachments: TempAttachmentStore,
}

impl TodoNotifier {
    /// 新しい通知セッションを作成する
    ///
    /// スクラッチディレクトリはプラットフォームの一時ディレクトリを使う。
    pub fn new(
        task_id: TaskId,
        gateway: Arc<dyn TodoGateway>,
        salts: Arc<dyn SaltRepository>,
    ) -> Self {
        Self {
            task_id,
            gateway,
            salts,
            draft: None,
            attachments: TempAttachmentStore::new(),
        }
    }

    /// スクラッチディレクトリを差し替える（テスト・DI 用）
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.attachments = TempAttachmentStore::with_dir(dir);
        self
    }

    /// 対象の作業項目 ID を返す
    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// コメントドラフトを開く（冪等）
    ///
    /// 初回呼び出しでリモートサービスに空本文のコメントを作成し、
    /// 採番された ID に紐づくドラフトを保持する。2 回目以降は
    /// 既存のドラフトをそのまま返し、リモート作成は発生しない。
    pub async fn open_comment(&mut self) -> Result<&mut CommentDraft, NotifyError> {
        let draft = match self.draft.take() {
            Some(draft) => draft,
            None => {
                let remote_id = self
                    .gateway
                    .add_comment(self.task_id, "")
                    .await
                    .map_err(NotifyError::CommentOpen)?;
                tracing::debug!(
                    task_id = %self.task_id,
                    comment_id = %remote_id,
                    "リモートコメントを作成"
                );
                CommentDraft::new(remote_id)
            }
        };
        Ok(self.draft.insert(draft))
    }

    /// コメント本文を設定する
    ///
    /// ドラフトが未オープンならここで開く。本文自体はコミットまで
    /// ネットワークに送られない。
    pub async fn set_message(&mut self, text: impl Into<String>) -> Result<(), NotifyError> {
        let draft = self.open_comment().await?;
        draft.set_body(text);
        Ok(())
    }

    /// コメント本文を返す（ドラフト未オープンの場合は `None`）
    pub fn message(&self) -> Option<&str> {
        self.draft.as_ref().map(CommentDraft::body)
    }

    /// 実在するファイルをコメントに添付する
    ///
    /// パスはドラフトの添付リストと後始末の追跡リストの両方に積まれる
    /// （実通知の完了時に削除される）。パスが存在しない場合は
    /// [`NotifyError::Attachment`] で即座に失敗する。
    pub async fn attach_file(&mut self, path: impl Into<PathBuf>) -> Result<(), NotifyError> {
        let path = path.into();
        tokio::fs::metadata(&path).await?;

        let draft = self.open_comment().await?;
        draft.attach(path.clone());
        self.attachments.track(path);
        Ok(())
    }

    /// 文字列内容をスクラッチファイル化してコメントに添付する
    ///
    /// ラベルはトラバーサル防止のためサニタイズされ、スクラッチ
    /// ディレクトリ内のファイルとして作成（既存なら全置換）される。
    /// ファイルを作成できない場合は I/O エラーで中断する。
    /// 書き込んだパスを返す。
    pub async fn attach_string(
        &mut self,
        label: &str,
        content: &str,
    ) -> Result<PathBuf, NotifyError> {
        let path = self.attachments.stage(label, content).await?;
        self.attach_file(&path).await?;
        Ok(path)
    }

    /// 通知を確定する
    ///
    /// # 処理フロー
    ///
    /// 1. `message` 指定があれば本文を設定
    /// 2. 作成者が合成（テスト）宛先なら、認可導出もコミットも行わず
    ///    成功を返す。このとき一時ファイルは削除しない（実経路との
    ///    非対称はレガシー挙動の保存。意図的かはプロダクト未確認）
    /// 3. 実通知: ソルト取得 → トークン導出 → （未オープンなら）
    ///    コメント作成 → コミット。成否によらず一時ファイルを削除する
    ///
    /// # エラー
    ///
    /// コミット失敗・認可取得失敗は戻り値で返る。リトライはしない。
    pub async fn notify(
        &mut self,
        author: &Email,
        message: Option<&str>,
    ) -> Result<NotifyOutcome, NotifyError> {
        // 1. メッセージ指定があれば本文を設定
        if let Some(text) = message {
            self.set_message(text).await?;
        }

        // 2. 合成（テスト）宛先の判定
        if is_test_notification(author) {
            tracing::info!(
                task_id = %self.task_id,
                author = %author,
                "テスト通知と判定: リモートコミットをスキップ"
            );
            return Ok(NotifyOutcome::SkippedTest);
        }

        // 3. 実通知（後始末は結果によらず実行）
        let result = self.send_real_notification(author).await;
        self.attachments.cleanup().await;
        result
    }

    /// 実通知: 認可トークンを導出し、ドラフトをコミットする
    async fn send_real_notification(
        &mut self,
        author: &Email,
    ) -> Result<NotifyOutcome, NotifyError> {
        let task_id = self.task_id;

        // 1. ソルトを取得してトークンを導出（notify ごとに計算し直す）
        let salt = self
            .salts
            .salt_for(author)
            .await
            .map_err(NotifyError::Authentication)?;
        let token = AuthToken::derive(&salt, author.as_str());

        // 2. ドラフトが未オープンならここで開く
        let gateway = Arc::clone(&self.gateway);
        let draft = self.open_comment().await?;

        // 3. 確定保存
        gateway
            .save_comment(draft, author, &token)
            .await
            .map_err(NotifyError::Commit)?;

        tracing::info!(
            task_id = %task_id,
            comment_id = %draft.remote_id(),
            attachments = draft.attachments().len(),
            "リモートコメントをコミット"
        );
        Ok(NotifyOutcome::Committed)
    }
}
