//! # Todo
//!
//! このサービスが管理する唯一のエンティティ。タイトルと説明の
//! 2 つの必須フィールドを持つフラットなレコードで、他のエンティティとの
//! 関連は持たない。
//!
//! ## ライフサイクル
//!
//! - 作成: [`NewTodo`] をストアに渡し、ストアが `id` を採番する
//! - 更新: `title` / `description` のみ置き換え可能（`id` は不変）
//! - 削除: 物理削除のみ（論理削除・バージョニングなし）
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todoflow_domain::todo::{NewTodo, TodoDescription, TodoTitle};
//!
//! let new_todo = NewTodo::new(
//!     TodoTitle::new("牛乳を買う")?,
//!     TodoDescription::new("低脂肪 2%")?,
//! );
//! assert_eq!(new_todo.title.as_str(), "牛乳を買う");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::DomainError;

define_uuid_id! {
    /// Todo の一意識別子
    ///
    /// 永続化時はストア側が採番する。`new()` はテストなどローカルでの
    /// 生成用。
    pub struct TodoId;
}

// =========================================================================
// TodoTitle（タイトル）
// =========================================================================

/// Todo のタイトル（値オブジェクト）
///
/// 入力された文字列をそのまま保持する（正規化しない）。ストアに
/// 書き込んだバイト列と呼び出し側が渡したバイト列は常に一致する。
///
/// # 不変条件
///
/// - 空文字列ではない
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "タイトルを入力してください".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// TodoDescription（説明）
// =========================================================================

/// Todo の説明（値オブジェクト）
///
/// 存在チェックのみ行う（DB: `TEXT`、長さ上限なし）。タイトルと同様、
/// 入力された文字列をそのまま保持する。
///
/// # 不変条件
///
/// - 空文字列ではない
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDescription(String);

impl TodoDescription {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "説明を入力してください".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TodoDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// Todo（エンティティ）
// =========================================================================

/// Todo エンティティ
///
/// # 不変条件
///
/// - 永続化された Todo は `id` / `title` / `description` をすべて持つ
/// - `id` は作成時にストアが採番し、以後不変
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:          TodoId,
    title:       TodoTitle,
    description: TodoDescription,
}

impl Todo {
    /// 永続化済みのレコードからエンティティを復元する
    ///
    /// リポジトリ実装が DB の行をマッピングする際に使用する。
    pub fn from_db(id: TodoId, title: TodoTitle, description: TodoDescription) -> Self {
        Self {
            id,
            title,
            description,
        }
    }

    /// ID を取得する
    pub fn id(&self) -> &TodoId {
        &self.id
    }

    /// タイトルを取得する
    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// 説明を取得する
    pub fn description(&self) -> &TodoDescription {
        &self.description
    }
}

/// 作成リクエストのパラメータオブジェクト
///
/// `id` はまだ持たない（ストアが採番する）。フィールドは構築時に
/// バリデーション済みの値オブジェクトのみ受け付ける。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title:       TodoTitle,
    pub description: TodoDescription,
}

impl NewTodo {
    /// 新しい作成パラメータを組み立てる
    pub fn new(title: TodoTitle, description: TodoDescription) -> Self {
        Self { title, description }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // ===== TodoTitle =====

    #[rstest]
    #[case(" Buy milk ")]
    #[case("  牛乳を買う  ")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_タイトルは入力された文字列をそのまま保持する(#[case] input: &str) {
        let title = TodoTitle::new(input).unwrap();
        assert_eq!(title.as_str(), input);
    }

    #[test]
    fn test_空のタイトルはエラーになる() {
        let result = TodoTitle::new("");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_タイトルには長さ上限がない() {
        let input = "あ".repeat(10_000);
        let title = TodoTitle::new(input.clone()).unwrap();
        assert_eq!(title.as_str(), input);
    }

    // ===== TodoDescription =====

    #[rstest]
    #[case(" 低脂肪 2% ")]
    #[case(" ")]
    fn test_説明は入力された文字列をそのまま保持する(#[case] input: &str) {
        let description = TodoDescription::new(input).unwrap();
        assert_eq!(description.as_str(), input);
    }

    #[test]
    fn test_空の説明はエラーになる() {
        let result = TodoDescription::new("");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_説明には長さ上限がない() {
        let input = "x".repeat(10_000);
        let description = TodoDescription::new(input.clone()).unwrap();
        assert_eq!(description.as_str(), input);
    }

    // ===== Todo / NewTodo =====

    #[test]
    fn test_from_dbでエンティティを復元できる() {
        let id = TodoId::new();
        let todo = Todo::from_db(
            id.clone(),
            TodoTitle::new("牛乳を買う").unwrap(),
            TodoDescription::new("低脂肪 2%").unwrap(),
        );

        assert_eq!(todo.id(), &id);
        assert_eq!(todo.title().as_str(), "牛乳を買う");
        assert_eq!(todo.description().as_str(), "低脂肪 2%");
    }

    #[test]
    fn test_todo_idはuuid文字列としてシリアライズされる() {
        let id = TodoId::new();
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::json!(id.as_uuid().to_string()));
    }
}
