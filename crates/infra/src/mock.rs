//! # テスト用モックコラボレータ
//!
//! オーケストレーション層のテストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todogate-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use todogate_domain::{
    auth::AuthToken,
    comment::{CommentDraft, RemoteCommentId},
    notification::{EmailMessage, NotificationError},
    task::{TaskId, TaskSummary},
    value_objects::Email,
};

use crate::{
    error::InfraError,
    notification::NotificationSender,
    salt::SaltRepository,
    todo::TodoGateway,
};

// ===== MockNotificationSender =====

/// 送信されたメッセージを記録する通知モック
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:      Arc<Mutex<Vec<EmailMessage>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録された送信メッセージを返す
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// 以後の送信を指定メッセージで失敗させる
    pub fn set_failure(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), NotificationError> {
        if let Some(reason) = self.fail_with.lock().unwrap().clone() {
            return Err(NotificationError::SendFailed(reason));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

// ===== MockTodoGateway =====

/// 保存されたコメントの記録
#[derive(Debug, Clone)]
pub struct SavedComment {
    pub remote_id:   RemoteCommentId,
    pub body:        String,
    pub attachments: Vec<PathBuf>,
    pub author:      Email,
    pub token:       AuthToken,
}

/// コメント作成・保存呼び出しを記録する Todo サービスモック
#[derive(Clone, Default)]
pub struct MockTodoGateway {
    tasks:             Arc<Mutex<HashMap<i64, TaskSummary>>>,
    add_comment_calls: Arc<Mutex<Vec<TaskId>>>,
    saved:             Arc<Mutex<Vec<SavedComment>>>,
    save_failure:      Arc<Mutex<Option<String>>>,
    next_comment_id:   Arc<Mutex<i64>>,
}

impl MockTodoGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// タスクを登録する
    pub fn insert_task(&self, task: TaskSummary) {
        self.tasks.lock().unwrap().insert(task.id.value(), task);
    }

    /// 以後の保存を指定メッセージで失敗させる
    pub fn set_save_failure(&self, message: impl Into<String>) {
        *self.save_failure.lock().unwrap() = Some(message.into());
    }

    /// `add_comment` の呼び出し回数を返す
    pub fn add_comment_calls(&self) -> usize {
        self.add_comment_calls.lock().unwrap().len()
    }

    /// 保存されたコメントの記録を返す
    pub fn saved(&self) -> Vec<SavedComment> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl TodoGateway for MockTodoGateway {
    async fn fetch_task(&self, id: TaskId) -> Result<TaskSummary, InfraError> {
        self.tasks
            .lock()
            .unwrap()
            .get(&id.value())
            .cloned()
            .ok_or_else(|| InfraError::TodoApi {
                status:  404,
                message: format!("task {id} not found"),
            })
    }

    async fn add_comment(&self, task: TaskId, _body: &str) -> Result<RemoteCommentId, InfraError> {
        self.add_comment_calls.lock().unwrap().push(task);
        let mut next = self.next_comment_id.lock().unwrap();
        *next += 1;
        Ok(RemoteCommentId::new(*next))
    }

    async fn save_comment(
        &self,
        draft: &CommentDraft,
        author: &Email,
        token: &AuthToken,
    ) -> Result<(), InfraError> {
        if let Some(reason) = self.save_failure.lock().unwrap().clone() {
            return Err(InfraError::TodoApi {
                status:  502,
                message: reason,
            });
        }
        self.saved.lock().unwrap().push(SavedComment {
            remote_id:   draft.remote_id(),
            body:        draft.body().to_string(),
            attachments: draft.attachments().to_vec(),
            author:      author.clone(),
            token:       token.clone(),
        });
        Ok(())
    }
}

// ===== MockSaltRepository =====

/// ソルト検索回数を数えるインメモリリポジトリ
#[derive(Clone, Default)]
pub struct MockSaltRepository {
    salts:   Arc<Mutex<HashMap<String, String>>>,
    lookups: Arc<Mutex<usize>>,
}

impl MockSaltRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// ソルトを登録する
    pub fn insert_salt(&self, email: impl Into<String>, salt: impl Into<String>) {
        self.salts.lock().unwrap().insert(email.into(), salt.into());
    }

    /// `salt_for` の呼び出し回数を返す
    pub fn lookup_count(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

#[async_trait]
impl SaltRepository for MockSaltRepository {
    async fn salt_for(&self, email: &Email) -> Result<String, InfraError> {
        *self.lookups.lock().unwrap() += 1;
        self.salts
            .lock()
            .unwrap()
            .get(email.as_str())
            .cloned()
            .ok_or_else(|| InfraError::SaltNotFound {
                email: email.to_string(),
            })
    }
}
