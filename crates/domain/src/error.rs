//! # ドメイン層エラー定義
//!
//! 必須フィールド違反などドメイン固有の例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//!
//! この層が検出するのは必須フィールドの欠落のみ（スキーマが強制する
//! 制約と同等）。API 層はこのエラーをストア契約違反として扱い、
//! ストア失敗と同じレスポンス経路で返す。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 値オブジェクトの構築時に発生する。API 層でこのエラーを受け取り、
/// HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 必須フィールドが空の場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
