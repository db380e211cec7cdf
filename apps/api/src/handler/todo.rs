//! # Todo ハンドラ
//!
//! Todo の CRUD を提供する公開 API。
//!
//! ## エンドポイント
//!
//! - `POST /todos` - Todo 作成
//! - `GET /todos` - Todo 一覧
//! - `PUT /todos/{id}` - Todo 更新（title / description の置き換え）
//! - `DELETE /todos/{id}` - Todo 削除
//!
//! ## not found の扱い
//!
//! 更新・削除で「一致するドキュメントが 0 件」だった場合が not found の
//! 正準条件。UUID としてパースできない `{id}` はどのドキュメントにも
//! 一致し得ないため、同じく 404 を返す（ストアまで到達しない）。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todoflow_domain::todo::{NewTodo, Todo, TodoDescription, TodoId, TodoTitle};
use todoflow_infra::repository::TodoRepository;
use uuid::Uuid;

use crate::error::ApiError;

/// Todo API の共有状態
///
/// リポジトリは起動時に注入される（プロセス全体の暗黙状態は持たない）。
pub struct TodoState {
    pub repository: Arc<dyn TodoRepository>,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title:       String,
    pub description: String,
}

/// Todo 更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title:       String,
    pub description: String,
}

/// Todo DTO
///
/// エンベロープなしでそのままボディになる
/// （`{"id": ..., "title": ..., "description": ...}`）。
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoDto {
    pub id:          Uuid,
    pub title:       String,
    pub description: String,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id:          *todo.id().as_uuid(),
            title:       todo.title().as_str().to_string(),
            description: todo.description().as_str().to_string(),
        }
    }
}

// --- ハンドラ ---

/// POST /todos
///
/// Todo を作成する。`id` はストアが採番する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたレコード
/// - `500`: 必須フィールド欠落またはストア障害
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = TodoTitle::new(req.title).map_err(ApiError::creating)?;
    let description = TodoDescription::new(req.description).map_err(ApiError::creating)?;
    let new_todo = NewTodo::new(title, description);

    let todo = state
        .repository
        .insert(&new_todo)
        .await
        .map_err(ApiError::creating)?;

    Ok((StatusCode::CREATED, Json(TodoDto::from(&todo))))
}

/// GET /todos
///
/// 全 Todo をストアが返す順で取得する。
///
/// ## レスポンス
///
/// - `200 OK`: レコードの JSON 配列（空なら `[]`）
/// - `500`: ストア障害
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state
        .repository
        .find_all()
        .await
        .map_err(ApiError::fetching)?;

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// PUT /todos/{id}
///
/// `id` に一致する Todo の title / description を置き換える
/// （`id` は不変）。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のレコード
/// - `404 Not Found`: 一致するレコードがない
/// - `500`: 必須フィールド欠落またはストア障害
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(ApiError::TodoNotFound);
    };
    let id = TodoId::from_uuid(id);

    let title = TodoTitle::new(req.title).map_err(ApiError::updating)?;
    let description = TodoDescription::new(req.description).map_err(ApiError::updating)?;

    let updated = state
        .repository
        .update(&id, &title, &description)
        .await
        .map_err(ApiError::updating)?;

    let todo = updated.ok_or(ApiError::TodoNotFound)?;
    Ok((StatusCode::OK, Json(TodoDto::from(&todo))))
}

/// DELETE /todos/{id}
///
/// `id` に一致する Todo を削除する。
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功（ボディなし）
/// - `404 Not Found`: 一致するレコードがない
/// - `500`: ストア障害
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(ApiError::TodoNotFound);
    };
    let id = TodoId::from_uuid(id);

    let deleted = state
        .repository
        .delete(&id)
        .await
        .map_err(ApiError::deleting)?;

    if !deleted {
        return Err(ApiError::TodoNotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
