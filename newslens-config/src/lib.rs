//! Loader for the process-wide Newslens configuration.
//!
//! Configuration is read once at startup and injected into client and invoker
//! construction; nothing mutates it afterwards. Sources merge in the usual
//! order — a YAML file, then `NEWSLENS_`-prefixed environment variables — and
//! string values pass through recursive `${VAR}` expansion so secrets such as
//! the API key can live in the environment rather than on disk.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Top-level configuration for the analysis pipeline.
#[derive(Debug, Deserialize)]
pub struct NewslensConfig {
    pub version: Option<String>,
    pub llm: LlmSettings,
}

/// Model routing and credentials for the chat backend.
#[derive(Debug, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    #[serde(default = "default_primary_model")]
    pub primary_model: String,
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_primary_model() -> String {
    "gpt-4o".into()
}
fn default_fallback_model() -> String {
    "gpt-3.5-turbo".into()
}
fn default_endpoint() -> String {
    "https://api.openai.com/v1".into()
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (YAML + env overrides).
pub struct NewslensConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for NewslensConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl NewslensConfigLoader {
    /// Start an empty loader. File and inline-YAML sources merge in call
    /// order; `NEWSLENS_`-prefixed environment overrides are applied on top
    /// at [`NewslensConfigLoader::load`].
    ///
    /// ```
    /// use newslens_config::NewslensConfigLoader;
    ///
    /// let config = NewslensConfigLoader::new()
    ///     .with_yaml_str("version: '1'\nllm:\n  api_key: \"sk-test\"")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(config.version.as_deref(), Some("1"));
    /// assert_eq!(config.llm.primary_model, "gpt-4o");
    /// assert_eq!(config.llm.fallback_model, "gpt-3.5-turbo");
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Merge an inline YAML snippet (tests and CLI overrides).
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// `${VAR}` placeholders are expanded recursively (depth-capped) before
    /// the strongly typed config materialises.
    ///
    /// ```
    /// use newslens_config::NewslensConfigLoader;
    ///
    /// std::env::set_var("NEWSLENS_DOCTEST_KEY", "injected-from-env");
    ///
    /// let config = NewslensConfigLoader::new()
    ///     .with_yaml_str(r#"
    /// llm:
    ///   api_key: "${NEWSLENS_DOCTEST_KEY}"
    ///   primary_model: "gpt-4o"
    /// "#)
    ///     .load()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.llm.api_key, "injected-from-env");
    /// assert_eq!(config.llm.endpoint, "https://api.openai.com/v1");
    ///
    /// std::env::remove_var("NEWSLENS_DOCTEST_KEY");
    /// ```
    pub fn load(self) -> Result<NewslensConfig, ConfigError> {
        // The env overlay is attached last so it wins over file values.
        let cfg = self
            .builder
            .add_source(Environment::with_prefix("NEWSLENS").separator("__"))
            .build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: NewslensConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}
