//! # 一時添付ストア
//!
//! コメント添付に使う一時ファイルのスコープ付き生成と後始末を担当する。
//!
//! ## 設計方針
//!
//! - **トラバーサル防止**: ラベル中の `..` と先頭のパス区切りを除去してから
//!   スクラッチディレクトリに結合する。結合結果がスクラッチ外を指すことはない
//! - **生成失敗は即時エラー**: 書き込めない添付を黙って欠落させると
//!   コメントが壊れるため、I/O エラーはその場で呼び出し側へ返す
//! - **後始末はベストエフォート**: 存在確認してから削除し、削除失敗は
//!   ログのみでエラーにしない

use std::path::{Path, PathBuf};

/// ラベルからトラバーサル要素を除去する
///
/// `..` の出現をすべて取り除き、残った先頭のパス区切りを落とす。
/// この結果をスクラッチディレクトリに結合する限り、解決先が
/// ディレクトリ外に出ることはない。
fn sanitize_label(label: &str) -> String {
    let stripped = label.replace("..", "");
    stripped.trim_start_matches(['/', '\\']).to_string()
}

/// 一時添付ストア
///
/// 1 つの通知セッションが専有する。生成したファイルと外部から添付された
/// ファイルの両方を追跡リストに載せ、[`cleanup`](Self::cleanup) で
/// まとめて削除する。
#[derive(Debug)]
pub struct TempAttachmentStore {
    scratch_dir: PathBuf,
    tracked:     Vec<PathBuf>,
}

impl TempAttachmentStore {
    /// プラットフォームの一時ディレクトリをスクラッチとして使うストアを作成
    pub fn new() -> Self {
        Self::with_dir(std::env::temp_dir())
    }

    /// スクラッチディレクトリを指定してストアを作成（テスト・DI 用）
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            scratch_dir: dir.into(),
            tracked:     Vec::new(),
        }
    }

    /// スクラッチディレクトリを返す
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// ラベルをサニタイズしてスクラッチ内のパスに解決する
    pub fn sanitized_path(&self, label: &str) -> PathBuf {
        self.scratch_dir.join(sanitize_label(label))
    }

    /// ラベルに対応するスクラッチファイルを作成（既存なら全置換）する
    ///
    /// 書き込んだパスを返す。ファイルを作成できない場合は I/O エラーを
    /// そのまま返し、添付処理を中断させる。
    pub async fn stage(&self, label: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.sanitized_path(label);
        tokio::fs::write(&path, content).await?;
        Ok(path)
    }

    /// パスを後始末の対象として追跡する
    pub fn track(&mut self, path: impl Into<PathBuf>) {
        self.tracked.push(path.into());
    }

    /// 追跡中のパス一覧を返す
    pub fn tracked(&self) -> &[PathBuf] {
        &self.tracked
    }

    /// 追跡中のファイルをすべて削除し、追跡リストを空にする
    ///
    /// 存在しないファイルは黙って読み飛ばす。削除に失敗しても
    /// エラーは返さない（debug ログのみ）。
    pub async fn cleanup(&mut self) {
        for path in self.tracked.drain(..) {
            match tokio::fs::try_exists(&path).await {
                Ok(true) => {
                    if let Err(e) = tokio::fs::remove_file(&path).await {
                        tracing::debug!(path = %path.display(), error = %e, "一時ファイルの削除に失敗");
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "一時ファイルの存在確認に失敗");
                }
            }
        }
    }
}

impl Default for TempAttachmentStore {
    fn default() -> Self {
        Self::new()
    }
}
