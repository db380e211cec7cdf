//! # TodoRepository
//!
//! Todo コレクションの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ストア側採番**: `INSERT ... RETURNING` で作成直後のレコードを取得し、
//!   ストアが採番した `id` をそのまま返す
//! - **「0 件一致」= not found**: 更新・削除で対象が存在しない場合は
//!   エラーではなく `None` / `false` を返す（存在しないことは操作の
//!   契約上の正常な結果であり、ストア障害とは区別する）

use async_trait::async_trait;
use sqlx::PgPool;
use todoflow_domain::todo::{NewTodo, Todo, TodoDescription, TodoId, TodoTitle};
use uuid::Uuid;

use crate::error::InfraError;

/// Todo リポジトリトレイト
///
/// Todo コレクションへの 4 つのストア操作を定義する。
/// いずれの操作も高々 1 件のドキュメントにしか触れないため、
/// トランザクションは使用しない。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 新しい Todo を挿入する
    ///
    /// `id` はストアが採番する。作成されたレコード全体を返す。
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError>;

    /// コレクション内の全 Todo を取得する
    ///
    /// 並び順はストアが返す順（明示的なソートなし。呼び出し間で
    /// 安定であることは保証されない）。
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// `id` に一致する Todo の `title` / `description` を置き換える
    ///
    /// 更新後のレコードを返す。一致するレコードがない場合は `Ok(None)`。
    async fn update(
        &self,
        id: &TodoId,
        title: &TodoTitle,
        description: &TodoDescription,
    ) -> Result<Option<Todo>, InfraError>;

    /// `id` に一致する Todo を削除する
    ///
    /// 削除できた場合は `Ok(true)`、一致するレコードがない場合は
    /// `Ok(false)`。
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError>;
}

/// `todos` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:          Uuid,
    title:       String,
    description: String,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        // DB の NOT NULL 制約と、この層を通じた挿入により常に有効
        let title = TodoTitle::new(row.title).expect("DB に格納された title は常に有効");
        let description =
            TodoDescription::new(row.description).expect("DB に格納された description は常に有効");
        Todo::from_db(TodoId::from_uuid(row.id), title, description)
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description
            "#,
        )
        .bind(new_todo.title.as_str())
        .bind(new_todo.description.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        // ORDER BY なし: ストアが返す順をそのまま返す
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description
            FROM todos
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(
        &self,
        id: &TodoId,
        title: &TodoTitle,
        description: &TodoDescription,
    ) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET title = $2, description = $3
            WHERE id = $1
            RETURNING id, title, description
            "#,
        )
        .bind(*id.as_uuid())
        .bind(title.as_str())
        .bind(description.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(*id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresTodoRepository>();
        assert_send_sync::<Box<dyn TodoRepository>>();
    }

    #[test]
    fn test_todo_rowからエンティティに変換できる() {
        let id = Uuid::new_v4();
        let row = TodoRow {
            id,
            title: "牛乳を買う".to_string(),
            description: "低脂肪 2%".to_string(),
        };

        let todo = Todo::from(row);

        assert_eq!(todo.id().as_uuid(), &id);
        assert_eq!(todo.title().as_str(), "牛乳を買う");
        assert_eq!(todo.description().as_str(), "低脂肪 2%");
    }
}
