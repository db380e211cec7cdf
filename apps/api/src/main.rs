//! # Todo API サーバー
//!
//! Todo レコードの CRUD を提供する HTTP サービス。
//!
//! ## 役割
//!
//! ルートハンドラが HTTP リクエストをストア操作に変換し、JSON を返す
//! 薄いレイヤー。リクエストごとに独立・ステートレスで、プロセスが持つ
//! 共有状態はストアへの接続プールのみ。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! DATABASE_URL=postgres://localhost/todoflow cargo run -p todoflow-api
//! ```
//!
//! 起動時にストアへ接続できない場合は原因をログに出して
//! 非ゼロ終了する（リトライ・縮退運転なし）。

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, put},
};
use todoflow_api::{
    config::ApiConfig,
    handler::{TodoState, create_todo, delete_todo, health_check, list_todos, update_todo},
};
use todoflow_infra::{db, repository::PostgresTodoRepository};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Todo API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todoflow=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 設定読み込み
    let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました（DATABASE_URL は必須）");

    tracing::info!(
        "Todo API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成（失敗時は非ゼロ終了）
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("データベース接続に失敗しました");
    tracing::info!("データベースに接続しました");

    db::run_migrations(&pool)
        .await
        .expect("マイグレーションの実行に失敗しました");

    // リポジトリをルーターに注入する
    let state = Arc::new(TodoState {
        repository: Arc::new(PostgresTodoRepository::new(pool)),
    });

    // ルーター構築
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Todo API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
