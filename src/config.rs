//! Server configuration from environment variables.

use crate::store::StoreVariant;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to listen on
    pub port: u16,
    /// Which game store design to run
    pub store: StoreVariant,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            store: StoreVariant::Daily,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = std::env::var("PHRASECRACK_PORT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(8080);

        let store = match std::env::var("PHRASECRACK_STORE") {
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "session" => StoreVariant::Session,
                "daily" | "" => StoreVariant::Daily,
                other => {
                    tracing::warn!(
                        "Unknown PHRASECRACK_STORE value {:?}, falling back to daily",
                        other
                    );
                    StoreVariant::Daily
                }
            },
            Err(_) => StoreVariant::Daily,
        };

        Self { port, store }
    }
}
