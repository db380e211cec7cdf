//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保つ: リクエストの検証とストア操作 1 回の呼び出し、
//!   結果の HTTP レスポンスへの変換のみを行う（リクエスト間の状態は
//!   一切持たない）

pub mod health;
pub mod todo;

pub use health::health_check;
pub use todo::{TodoState, create_todo, delete_todo, list_todos, update_todo};
