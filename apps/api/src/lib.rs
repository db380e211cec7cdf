//! # Todo API ライブラリ
//!
//! ハンドラ・設定・エラー定義を公開する。
//! バイナリ（`main.rs`）とハンドラテストの双方から利用される。

pub mod config;
pub mod error;
pub mod handler;
