use anyhow::Context;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            other => anyhow::bail!("APP_ENV must be development or production, got `{other}`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub app_env: AppEnv,
    pub outbox_topic: String,
    /// Built-in own-records policy when absent.
    pub access_policy_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = lookup("PORT").unwrap_or_else(|| "8080".into());
        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".into());

        Ok(Self {
            host: host
                .parse()
                .with_context(|| format!("HOST is not an IP address: `{host}`"))?,
            port: port
                .parse()
                .with_context(|| format!("PORT is not a port number: `{port}`"))?,
            app_env: AppEnv::parse(&app_env)?,
            outbox_topic: lookup("OUTBOX_TOPIC")
                .filter(|topic| !topic.trim().is_empty())
                .unwrap_or_else(|| "time-tracking.v1".into()),
            access_policy_path: lookup("ACCESS_POLICY_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn expose_internal_errors(&self) -> bool {
        self.app_env != AppEnv::Production
    }
}
