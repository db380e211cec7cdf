//! # TodoFlow ドメイン層
//!
//! Todo エンティティとその値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`]）
//! - **値オブジェクト**: 構築時にバリデーションされる不変オブジェクト
//!   （[`todo::TodoTitle`], [`todo::TodoDescription`]）
//! - **ドメインエラー**: 必須フィールド違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）に一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use todoflow_domain::todo::{NewTodo, TodoDescription, TodoTitle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let title = TodoTitle::new("牛乳を買う")?;
//! let description = TodoDescription::new("低脂肪 2%")?;
//! let new_todo = NewTodo::new(title, description);
//! assert_eq!(new_todo.title.as_str(), "牛乳を買う");
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod todo;

pub use error::DomainError;
