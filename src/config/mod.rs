use crate::cli::Args;
use crate::error::ChatError;
use crate::message::Role;
use crate::providers::DEFAULT_MODEL;
use crate::providers::base_client::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL};
use crate::sampling::{Knob, SamplingParameters};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_role() -> Role {
    Role::System
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the bearer credential.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub sampling: SamplingParameters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            role: default_role(),
            sampling: SamplingParameters::default(),
        }
    }
}

impl Config {
    fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gptchat")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    pub fn input_history_path() -> PathBuf {
        Self::config_dir().join("input_history.txt")
    }

    /// Loads the user config, writing a default one on first run.
    pub fn load() -> Result<Config, ChatError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Config, ChatError> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config = serde_yml::from_str::<Config>(&contents)
                .map_err(|e| ChatError::Config(format!("Parse {}: {}", path.display(), e)))?;
            debug!(path = %path.display(), "loaded config");
            return Ok(config);
        }

        let config = Config::default();
        if let Err(e) = config.save_to(path) {
            debug!(path = %path.display(), error = %e, "could not write default config");
        }
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ChatError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let yaml_content = serde_yml::to_string(self)?;
        fs::write(path, yaml_content)?;
        Ok(())
    }

    /// Applies command-line overrides and checks the resulting values.
    pub fn merge_args(mut self, args: &Args) -> Result<Config, ChatError> {
        if let Some(model) = &args.model {
            self.model = model.clone();
        }
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(api_key_env) = &args.api_key_env {
            self.api_key_env = api_key_env.clone();
        }
        if let Some(role) = &args.role {
            self.role = role.parse()?;
        }

        let overrides = [
            (Knob::Temperature, args.temperature),
            (Knob::TopProbability, args.top_p),
            (Knob::PresencePenalty, args.presence_penalty),
            (Knob::FrequencyPenalty, args.frequency_penalty),
        ];
        for (knob, value) in overrides {
            if let Some(value) = value {
                self.sampling.set(knob, value)?;
            }
        }

        self.sampling.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn missing_file_yields_defaults_and_writes_them() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "model: gpt-4o-mini\nrole: user\nsampling:\n  temperature: 0.2\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.role, Role::User);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.sampling.temperature, 0.2);
        assert_eq!(config.sampling.top_probability, 1.0);
    }

    #[test]
    fn unparseable_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "role: [not, a, role]\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ChatError::Config(_))
        ));
    }

    #[test]
    fn command_line_overrides_win() {
        let args = Args::parse_from([
            "gptchat",
            "--model",
            "gpt-4o",
            "--role",
            "user",
            "--temperature",
            "0.5",
            "--presence-penalty=-1",
        ]);
        let config = Config::default().merge_args(&args).unwrap();

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.role, Role::User);
        assert_eq!(config.sampling.temperature, 0.5);
        assert_eq!(config.sampling.presence_penalty, -1.0);
        assert_eq!(config.api_key_env, DEFAULT_API_KEY_ENV);
    }

    #[test]
    fn out_of_range_override_is_rejected() {
        let args = Args::parse_from(["gptchat", "--top-p", "1.5"]);
        assert!(matches!(
            Config::default().merge_args(&args),
            Err(ChatError::ParameterOutOfRange { name: "top_probability", .. })
        ));
    }

    #[test]
    fn out_of_range_file_value_is_rejected_on_merge() {
        let mut config = Config::default();
        config.sampling.frequency_penalty = 9.0;
        let args = Args::parse_from(["gptchat"]);
        assert!(config.merge_args(&args).is_err());
    }
}
