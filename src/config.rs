use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub mongodb_url: String,
    pub mongodb_db: String,
    pub host: String,
    pub port: u16,
    pub env: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            mongodb_url: std::env::var("MONGODB_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".into()),
            mongodb_db: std::env::var("MONGODB_DB").unwrap_or_else(|_| "cooking".into()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(9000),
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
        })
    }

    pub fn is_development(&self) -> bool {
        self.env == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_mode_check() {
        let config = AppConfig {
            mongodb_url: "mongodb://localhost:27017".into(),
            mongodb_db: "cooking".into(),
            host: "0.0.0.0".into(),
            port: 9000,
            env: "development".into(),
        };
        assert!(config.is_development());

        let config = AppConfig {
            env: "production".into(),
            ..config
        };
        assert!(!config.is_development());
    }
}
