//! # リポジトリ実装
//!
//! Todo コレクションへのストア操作を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: トレイトを定義し、API 層は `Arc<dyn TodoRepository>`
//!   経由でストアにアクセスする
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でスタブ可能な設計

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};
