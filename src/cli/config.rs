use anyhow::Context;
use serde::{Deserialize, Serialize};

use std::path::Path;

use super::db::DbConfig;
use crate::{app::AppConfig, tracing::TracingConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub db: DbConfig,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub tracing: TracingConfig,
}

pub struct EnvOverride {
    pub db_con: Option<String>,
}

impl Config {
    /// Loads `path` if it exists, falling back to defaults otherwise.
    pub fn from_path(
        path: impl AsRef<Path>,
        EnvOverride { db_con }: EnvOverride,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut config: Config = if path.exists() {
            let config_file =
                std::fs::read_to_string(path).context("Couldn't read config file")?;
            serde_yaml::from_str(&config_file).context("Couldn't parse config file")?
        } else {
            Config::default()
        };

        if let Some(db_con) = db_con {
            config.db.pg_con = db_con;
        }

        Ok(config)
    }
}
