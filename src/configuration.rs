use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Config::builder()
        .set_default("db_path", "trivia.db")?
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8080)?
        .set_default("max_connections", 5)
}

/// Defaults, then an optional `trivia.{toml,yaml,json}` file, then `TRIVIA_*` variables.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    dotenv::dotenv().ok();
    builder()?
        .add_source(File::with_name("trivia").required(false))
        .add_source(Environment::with_prefix("TRIVIA").try_parsing(true))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let settings: Settings = builder().unwrap().build().unwrap().try_deserialize().unwrap();
        assert_eq!(
            settings,
            Settings {
                db_path: "trivia.db".to_owned(),
                host: "0.0.0.0".to_owned(),
                port: 8080,
                max_connections: 5,
            }
        );
        assert_eq!(settings.address(), "0.0.0.0:8080");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trivia.toml");
        std::fs::write(&path, "port = 5000\ndb_path = \"/tmp/quiz.db\"\n").unwrap();

        let settings: Settings = builder()
            .unwrap()
            .add_source(File::from(path))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.db_path, "/tmp/quiz.db");
        assert_eq!(settings.host, "0.0.0.0");
    }
}
