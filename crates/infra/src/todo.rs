//! # リモート Todo サービスゲートウェイ
//!
//! 作業項目（タスク）を管理するリモート Todo サービスへの薄いクライアント。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: [`TodoGateway`] がコメント作成・保存・タスク取得の
//!   契約を定義し、RPC の詳細をこの層に閉じ込める
//! - **薄い JSON クライアント**: [`HttpTodoGateway`] は契約をそのまま HTTP に
//!   写すだけで、リトライやキューイングは行わない
//! - **添付はパス文字列**: ゲートウェイはサービスホストとファイルシステムを
//!   共有するレガシー配備を前提に、添付をパスとして渡す

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use todogate_domain::{
    auth::AuthToken,
    comment::{CommentDraft, RemoteCommentId},
    task::{TaskId, TaskSummary},
    value_objects::Email,
};

use crate::error::InfraError;

/// リモート Todo サービスの契約
///
/// コメントのライフサイクル（空コメント作成 → 保存）とタスク取得のみを
/// 公開する。認証バックエンドや RPC の内部実装はこの契約の外にある。
#[async_trait]
pub trait TodoGateway: Send + Sync {
    /// タスクの要約（番号・購読者）を取得する
    async fn fetch_task(&self, id: TaskId) -> Result<TaskSummary, InfraError>;

    /// タスクにコメントを作成し、採番されたコメント ID を返す
    ///
    /// セッションの初回利用時は空本文で呼ばれる。
    async fn add_comment(&self, task: TaskId, body: &str) -> Result<RemoteCommentId, InfraError>;

    /// ドラフトの本文・添付を作成者と認可トークン付きで確定保存する
    ///
    /// ネットワークに書き込む唯一のコミット操作。結果はサービスの報告を
    /// そのまま返す。
    async fn save_comment(
        &self,
        draft: &CommentDraft,
        author: &Email,
        token: &AuthToken,
    ) -> Result<(), InfraError>;
}

/// HTTP 実装の TodoGateway
///
/// twgate の JSON API を呼び出す。接続先ホストとゲートウェイユーザーは
/// 設定から注入される（ユーザーは `X-Twgate-User` ヘッダで送る）。
#[derive(Debug, Clone)]
pub struct HttpTodoGateway {
    client:   reqwest::Client,
    base_url: String,
    user:     String,
}

/// タスク取得応答
#[derive(Debug, Deserialize)]
struct TaskPayload {
    id:          i64,
    number:      i64,
    subscribers: Vec<String>,
}

/// コメント作成要求
#[derive(Debug, Serialize)]
struct NewCommentPayload<'a> {
    body: &'a str,
}

/// コメント作成応答
#[derive(Debug, Deserialize)]
struct CommentCreatedPayload {
    id: i64,
}

/// コメント保存要求
#[derive(Debug, Serialize)]
struct SaveCommentPayload<'a> {
    author_email: &'a str,
    auth_token:   &'a str,
    body:         &'a str,
    attachments:  Vec<String>,
}

impl HttpTodoGateway {
    /// 新しいゲートウェイインスタンスを作成
    ///
    /// # 引数
    ///
    /// - `base_url`: twgate のベース URL（例: `http://twgate.internal`）
    /// - `user`: ゲートウェイユーザー名
    pub fn new(base_url: impl Into<String>, user: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            user: user.into(),
        }
    }

    /// 非 2xx 応答を [`InfraError::TodoApi`] に変換する
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, InfraError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(InfraError::TodoApi {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TodoGateway for HttpTodoGateway {
    #[tracing::instrument(skip_all, level = "debug", fields(task_id = %id))]
    async fn fetch_task(&self, id: TaskId) -> Result<TaskSummary, InfraError> {
        let response = self
            .client
            .get(format!("{}/api/tasks/{}", self.base_url, id.value()))
            .header("X-Twgate-User", &self.user)
            .send()
            .await?;
        let payload: TaskPayload = Self::ensure_success(response).await?.json().await?;

        let subscribers = payload
            .subscribers
            .into_iter()
            .map(Email::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| InfraError::InvalidData(format!("購読者アドレスが不正: {e}")))?;

        Ok(TaskSummary {
            id:          TaskId::new(payload.id),
            number:      payload.number,
            subscribers,
        })
    }

    #[tracing::instrument(skip_all, level = "debug", fields(task_id = %task))]
    async fn add_comment(&self, task: TaskId, body: &str) -> Result<RemoteCommentId, InfraError> {
        let response = self
            .client
            .post(format!(
                "{}/api/tasks/{}/comments",
                self.base_url,
                task.value()
            ))
            .header("X-Twgate-User", &self.user)
            .json(&NewCommentPayload { body })
            .send()
            .await?;
        let payload: CommentCreatedPayload =
            Self::ensure_success(response).await?.json().await?;

        Ok(RemoteCommentId::new(payload.id))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(comment_id = %draft.remote_id()))]
    async fn save_comment(
        &self,
        draft: &CommentDraft,
        author: &Email,
        token: &AuthToken,
    ) -> Result<(), InfraError> {
        let attachments = draft
            .attachments()
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();

        let response = self
            .client
            .post(format!(
                "{}/api/comments/{}/save",
                self.base_url,
                draft.remote_id().value()
            ))
            .header("X-Twgate-User", &self.user)
            .json(&SaveCommentPayload {
                author_email: author.as_str(),
                auth_token: token.as_str(),
                body: draft.body(),
                attachments,
            })
            .send()
            .await?;
        Self::ensure_success(response).await?;

        Ok(())
    }
}
