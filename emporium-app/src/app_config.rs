use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    #[serde(default)]
    pub output: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Load from `./config`, picking the environment file from `RUN_MODE`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode)
    }

    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(dir, run_mode, Self::environment())
    }

    /// Variables look like `EMPORIUM__DEMO__OUTPUT=json`: the separator also
    /// follows the prefix.
    fn environment() -> config::Environment {
        config::Environment::with_prefix("EMPORIUM").separator("__")
    }

    fn load_with_env(
        dir: &Path,
        run_mode: &str,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let s = config::Config::builder()
            .set_default("store.name", "Emporium")?
            .set_default("logging.filter", "emporium=info")?
            .set_default("logging.json", false)?
            .set_default("demo.output", "text")?
            .add_source(file("default"))
            .add_source(file(run_mode))
            // Developer overrides, not checked in
            .add_source(file("local"))
            .add_source(environment)
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path(), "development").unwrap();

        assert_eq!(config.store.name, "Emporium");
        assert_eq!(config.logging.filter, "emporium=info");
        assert!(!config.logging.json);
        assert_eq!(config.demo.output, OutputFormat::Text);
    }

    #[test]
    fn test_run_mode_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[store]\nname = \"Corner Shop\"\n\n[demo]\noutput = \"text\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("staging.toml"), "[demo]\noutput = \"json\"\n").unwrap();

        let config = Config::load_from(dir.path(), "staging").unwrap();
        assert_eq!(config.store.name, "Corner Shop");
        assert_eq!(config.demo.output, OutputFormat::Json);
    }

    #[test]
    fn test_environment_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[demo]\noutput = \"text\"\n").unwrap();

        let vars = config::Map::from([
            ("EMPORIUM__DEMO__OUTPUT".to_string(), "json".to_string()),
            ("EMPORIUM__STORE__NAME".to_string(), "Night Market".to_string()),
            // Single underscore after the prefix is not picked up
            ("EMPORIUM_LOGGING__FILTER".to_string(), "debug".to_string()),
        ]);
        let environment = Config::environment().source(Some(vars));

        let config = Config::load_with_env(dir.path(), "development", environment).unwrap();
        assert_eq!(config.demo.output, OutputFormat::Json);
        assert_eq!(config.store.name, "Night Market");
        assert_eq!(config.logging.filter, "emporium=info");
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[demo]\noutput = \"xml\"\n").unwrap();

        assert!(Config::load_from(dir.path(), "development").is_err());
    }
}
