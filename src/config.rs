use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// A missing or empty secret is surfaced at login time (401), not at startup.
    pub jwt_secret: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt_secret = std::env::var("JWT_SECRET").ok();
        Ok(Self {
            database_url,
            jwt_secret,
        })
    }
}
