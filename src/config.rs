use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub support_email: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn init() -> Config {
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let support_email = env::var("SUPPORT_EMAIL").ok().filter(|addr| !addr.is_empty());
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080);

        Config {
            database_url,
            support_email,
            port,
        }
    }
}
