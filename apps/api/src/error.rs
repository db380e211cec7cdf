//! # Todo API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## ワイヤ形式
//!
//! レスポンスボディは固定:
//!
//! - `404`: `{"message": "Todo not found"}`
//! - `500`: `{"message": "<操作別の固定メッセージ>", "error": "<原因エラーの文字列>"}`
//!
//! ハンドラが生成するステータスコードは 201 / 200 / 204 / 404 / 500 のみ。
//! バリデーション違反（必須フィールドの欠落）はストア契約違反として
//! ストア障害と同じ 500 経路で返す。

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// エラーレスポンスボディ
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    /// 500 の場合のみ、原因エラーの文字列を格納する
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Todo API で発生するエラー
///
/// `IntoResponse` を実装しているため、axum がハンドラ境界で
/// 自動的に HTTP レスポンスに変換する。1 つのリクエストの失敗が
/// 他のリクエストに波及することはない。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 指定された ID の Todo が存在しない（更新・削除で 0 件一致）
    #[error("Todo not found")]
    TodoNotFound,

    /// ストア操作またはバリデーションの失敗
    ///
    /// `message` は操作別の固定メッセージ、`detail` は原因エラーの文字列。
    #[error("{message}: {detail}")]
    Internal {
        message: &'static str,
        detail:  String,
    },
}

impl ApiError {
    /// 作成操作の失敗
    pub fn creating(err: impl fmt::Display) -> Self {
        Self::Internal {
            message: "Error creating todo item",
            detail:  err.to_string(),
        }
    }

    /// 一覧取得操作の失敗
    pub fn fetching(err: impl fmt::Display) -> Self {
        Self::Internal {
            message: "Error fetching todo items",
            detail:  err.to_string(),
        }
    }

    /// 更新操作の失敗
    pub fn updating(err: impl fmt::Display) -> Self {
        Self::Internal {
            message: "Error updating todo item",
            detail:  err.to_string(),
        }
    }

    /// 削除操作の失敗
    pub fn deleting(err: impl fmt::Display) -> Self {
        Self::Internal {
            message: "Error deleting todo item",
            detail:  err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::TodoNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    message: "Todo not found".to_string(),
                    error:   None,
                }),
            )
                .into_response(),
            ApiError::Internal { message, detail } => {
                // 診断ログは 1 行のみ
                tracing::error!("{message}: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        message: message.to_string(),
                        error:   Some(detail),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Response};

    use super::*;

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_todo_not_foundは404と固定ボディに変換される() {
        let response = ApiError::TodoNotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "message": "Todo not found" }));
    }

    #[tokio::test]
    async fn test_internalは500と操作別メッセージに変換される() {
        let response = ApiError::creating("接続失敗").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Error creating todo item",
                "error": "接続失敗"
            })
        );
    }
}
