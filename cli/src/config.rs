#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Durable tick-log connection string.
    pub database_url: String,

    /// Exchange WebSocket base URL.
    pub ws_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://pairwatch.db?mode=rwc".to_string());

        let ws_base_url = std::env::var("PAIRWATCH_WS_URL")
            .unwrap_or_else(|_| feed::stream::DEFAULT_WS_URL.to_string());

        Self {
            database_url,
            ws_base_url,
        }
    }
}
