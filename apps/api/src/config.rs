//! # Todo API 設定
//!
//! 環境変数からサーバーの設定を読み込む。

use std::env;

/// Todo API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データベース接続 URL（オペレーターが外部から供給する）
    pub database_url: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// `DATABASE_URL` のみ必須。起動時に一度だけ読み込む。
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("API_PORT は有効なポート番号である必要があります"),
            database_url: env::var("DATABASE_URL")?,
        })
    }
}
