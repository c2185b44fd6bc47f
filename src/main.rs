use classroom_log::{app, config::Config, state::AppState, store};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("failed to parse DATABASE_URL")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await
        .expect("failed to connect to db");

    store::init_schema(&pool)
        .await
        .expect("failed to create bookings table");

    let addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(pool, config);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("listening on {addr}");
    axum::serve(listener, app(state)).await.unwrap();
}
